use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::io::read_speech_lines;
use crate::models::{ParagraphRecord, SpeechMetadata};
use crate::segment::{segment_lines, SegmentConfig};

/// Why a single speech could not be processed. Failures are collected per
/// document; one bad speech never aborts the batch.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no metadata entry for {0}")]
    MissingMetadata(String),
    #[error("failed to read speech file: {0}")]
    Unreadable(String),
}

/// A speech that was skipped, with the reason
#[derive(Debug)]
pub struct DocumentFailure {
    pub file_name: String,
    pub error: GenerateError,
}

/// Result of the generation pass
#[derive(Debug)]
pub struct GenerateResult {
    /// All paragraphs across all successfully processed speeches
    pub paragraphs: Vec<ParagraphRecord>,
    /// Number of speeches processed to completion
    pub speeches_processed: usize,
    /// Speeches skipped, with reasons
    pub failures: Vec<DocumentFailure>,
}

/// Generation pass: segment every speech transcript in `corpus_dir` into
/// paragraphs, attach its metadata, and assign sequential identifiers.
///
/// Speech files are processed in sorted order so identifier assignment is
/// deterministic. A speech with no metadata entry or an unreadable file is
/// recorded as a failure and skipped.
pub fn execute_generate(
    corpus_dir: &Path,
    metadata: &HashMap<String, SpeechMetadata>,
    config: &SegmentConfig,
) -> Result<GenerateResult> {
    let speech_files = list_speech_files(corpus_dir)?;
    info!("Processing {} speech files", speech_files.len());

    let mut paragraphs = Vec::new();
    let mut failures = Vec::new();
    let mut speeches_processed = 0;

    for path in &speech_files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(meta) = metadata.get(&file_name) else {
            warn!("No metadata found for {}, skipping", file_name);
            failures.push(DocumentFailure {
                file_name: file_name.clone(),
                error: GenerateError::MissingMetadata(file_name),
            });
            continue;
        };

        let lines = match read_speech_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("Failed to read {}: {:#}", file_name, err);
                failures.push(DocumentFailure {
                    file_name,
                    error: GenerateError::Unreadable(format!("{err:#}")),
                });
                continue;
            }
        };

        let count_before = paragraphs.len();
        for (i, text) in segment_lines(&lines, config).into_iter().enumerate() {
            paragraphs.push(ParagraphRecord::new(meta, (i + 1) as u32, text));
        }

        debug!(
            "{}: {} paragraphs",
            file_name,
            paragraphs.len() - count_before
        );
        speeches_processed += 1;
    }

    info!(
        "Generated {} paragraphs from {} speeches ({} skipped)",
        paragraphs.len(),
        speeches_processed,
        failures.len()
    );

    Ok(GenerateResult {
        paragraphs,
        speeches_processed,
        failures,
    })
}

/// All `.txt` files in the corpus directory, sorted by name
fn list_speech_files(corpus_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(corpus_dir)
        .with_context(|| format!("Failed to read corpus directory: {:?}", corpus_dir))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    Ok(files)
}
