use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, TimeDelta};
use tracing::{info, warn};

use crate::io::{read_labels, write_labels};
use crate::llm::GeminiClient;
use crate::models::{LabeledParagraph, ParagraphRecord};

/// Configuration for the batch classification stage
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Write the accumulated labels to the checkpoint file every N paragraphs
    pub checkpoint_every: usize,
    /// Fixed delay between requests (rate limiting)
    pub request_delay_ms: u64,
    /// Stop after this many paragraphs (for smoke runs)
    pub limit: Option<usize>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            checkpoint_every: 50,
            request_delay_ms: 1000,
            limit: None,
        }
    }
}

/// Result of the classification stage
#[derive(Debug)]
pub struct ClassifyResult {
    /// All labels accumulated so far, including any resumed from checkpoint
    pub labels: Vec<LabeledParagraph>,
    /// Paragraphs whose classification failed (HTTP or malformed label)
    pub failures: usize,
}

/// Classify a cleaned corpus paragraph by paragraph.
///
/// Sequential by design: one request at a time with a fixed delay between
/// requests. If `checkpoint_path` holds labels from an earlier run, those
/// paragraphs are skipped and the batch resumes where it stopped. A failed
/// paragraph is logged and counted, never fatal.
pub async fn execute_classify(
    client: &GeminiClient,
    paragraphs: &[ParagraphRecord],
    checkpoint_path: Option<&Path>,
    config: &ClassifyConfig,
) -> Result<ClassifyResult> {
    let mut labels = resume_from_checkpoint(checkpoint_path)?;
    let done: HashSet<String> = labels.iter().map(|l| l.paragraph_id.clone()).collect();
    if !done.is_empty() {
        info!(
            "Resuming from checkpoint: {}/{} already labeled",
            done.len(),
            paragraphs.len()
        );
    }

    let pending: Vec<&ParagraphRecord> = paragraphs
        .iter()
        .filter(|p| !done.contains(&p.paragraph_id))
        .collect();
    let total = match config.limit {
        Some(limit) => pending.len().min(limit),
        None => pending.len(),
    };

    let started = Local::now();
    let mut failures = 0;

    for (i, record) in pending.iter().take(total).enumerate() {
        if i > 0 && i % 100 == 0 {
            let elapsed = Local::now() - started;
            let per_item = elapsed / i as i32;
            let eta = Local::now() + per_item * (total - i) as i32;
            info!(
                "[{}/{}] elapsed {}m, ETA {}",
                i,
                total,
                elapsed.num_minutes(),
                eta.format("%H:%M:%S")
            );
        }

        match client.classify_paragraph(&record.paragraph_text).await {
            Ok(label) => {
                info!(
                    "[{}/{}] {} -> {}",
                    i + 1,
                    total,
                    record.paragraph_id,
                    label.primary_category().unwrap_or("unknown")
                );
                labels.push(LabeledParagraph::new(record, &label));
            }
            Err(err) => {
                warn!("[{}/{}] {} failed: {:#}", i + 1, total, record.paragraph_id, err);
                failures += 1;
            }
        }

        if let Some(path) = checkpoint_path {
            if (i + 1) % config.checkpoint_every == 0 {
                write_labels(path, &labels).context("Failed to write checkpoint")?;
                info!("Checkpoint saved ({} labeled)", labels.len());
            }
        }

        tokio::time::sleep(Duration::from_millis(config.request_delay_ms)).await;
    }

    report_duration(started.signed_duration_since(Local::now()).abs(), labels.len());

    Ok(ClassifyResult { labels, failures })
}

fn resume_from_checkpoint(checkpoint_path: Option<&Path>) -> Result<Vec<LabeledParagraph>> {
    match checkpoint_path {
        Some(path) if path.exists() => read_labels(path),
        _ => Ok(Vec::new()),
    }
}

fn report_duration(elapsed: TimeDelta, labeled: usize) {
    info!(
        "Classification pass finished: {} labeled in {}m{}s",
        labeled,
        elapsed.num_minutes(),
        elapsed.num_seconds() % 60
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifyConfig::default();
        assert_eq!(config.checkpoint_every, 50);
        assert_eq!(config.request_delay_ms, 1000);
        assert!(config.limit.is_none());
    }

    #[test]
    fn test_resume_without_checkpoint() {
        let labels = resume_from_checkpoint(None).unwrap();
        assert!(labels.is_empty());

        let missing = Path::new("/nonexistent/checkpoint.csv");
        let labels = resume_from_checkpoint(Some(missing)).unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_resume_from_existing_checkpoint() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let rows = vec![LabeledParagraph {
            paragraph_id: "bs1965_1".to_string(),
            speech_id: "bs1965".to_string(),
            paragraph_num: 1,
            year: 1965,
            category: "neutral".to_string(),
            promise_citizen: 0,
            promise_firm: 0,
            demand_citizen: 0,
            demand_firm: 0,
            neutral: 1,
            supportive_demand: 0,
            framing_signal: "none".to_string(),
            reason: "none".to_string(),
        }];
        write_labels(file.path(), &rows).unwrap();

        let labels = resume_from_checkpoint(Some(file.path())).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].paragraph_id, "bs1965_1");
    }
}
