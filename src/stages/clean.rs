use std::collections::HashMap;

use tracing::{debug, info};

use crate::filter::classify;
use crate::models::ParagraphRecord;

/// Result of the filtering pass
#[derive(Debug)]
pub struct CleanResult {
    /// Surviving paragraphs, renumbered per speech
    pub kept: Vec<ParagraphRecord>,
    /// Removed paragraphs with their original identifiers, for audit
    pub removed: Vec<ParagraphRecord>,
    /// How often each rule fired
    pub rule_counts: HashMap<&'static str, usize>,
}

/// Filtering pass: partition an existing paragraph set into kept and
/// removed via the rule cascade, then renumber the survivors.
///
/// Removed paragraphs keep their original `paragraph_num`/`paragraph_id`
/// so audit rows can be traced back; no paragraph text is altered. The
/// partition is lossless: every input paragraph lands in exactly one of
/// the two outputs.
pub fn execute_clean(paragraphs: Vec<ParagraphRecord>) -> CleanResult {
    let total = paragraphs.len();
    let mut kept = Vec::new();
    let mut removed = Vec::new();
    let mut rule_counts: HashMap<&'static str, usize> = HashMap::new();

    for record in paragraphs {
        match classify(&record.paragraph_text) {
            Some(rule) => {
                debug!(
                    rule = rule.name(),
                    paragraph_id = %record.paragraph_id,
                    "removing paragraph"
                );
                *rule_counts.entry(rule.name()).or_insert(0) += 1;
                removed.push(record);
            }
            None => kept.push(record),
        }
    }

    renumber(&mut kept);

    info!(
        "Kept {} of {} paragraphs ({} removed)",
        kept.len(),
        total,
        removed.len()
    );

    CleanResult {
        kept,
        removed,
        rule_counts,
    }
}

/// Reassign `paragraph_num` within each speech, contiguous from 1 in the
/// existing relative order, and recompute identifiers.
///
/// Idempotent: renumbering an already-renumbered corpus changes nothing.
pub fn renumber(paragraphs: &mut [ParagraphRecord]) {
    let mut counters: HashMap<String, u32> = HashMap::new();

    for record in paragraphs {
        let counter = counters.entry(record.speech_id.clone()).or_insert(0);
        *counter += 1;
        record.set_paragraph_num(*counter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeechMetadata;

    fn meta(speech_id: &str) -> SpeechMetadata {
        SpeechMetadata {
            speech_id: speech_id.to_string(),
            year: 1965,
            date: "1965-11-23".to_string(),
            fm_name: "Fm Name".to_string(),
            pm_name: "Pm Name".to_string(),
            parliament_term: "1".to_string(),
            election_budget: "No".to_string(),
            file_name: format!("{speech_id}.txt"),
        }
    }

    fn corpus() -> Vec<ParagraphRecord> {
        let m = meta("bs1965");
        vec![
            ParagraphRecord::new(&m, 1, "Revenue, 1965".to_string()),
            ParagraphRecord::new(
                &m,
                2,
                "The economy grew by five per cent this year, reflecting strong exports."
                    .to_string(),
            ),
            ParagraphRecord::new(&m, 3, "1966 - 51,272".to_string()),
            ParagraphRecord::new(
                &m,
                4,
                "Expenditure on development will rise to meet the demands of a growing nation."
                    .to_string(),
            ),
        ]
    }

    #[test]
    fn test_clean_partitions_losslessly() {
        let input = corpus();
        let input_ids: Vec<String> = input.iter().map(|p| p.paragraph_id.clone()).collect();

        let result = execute_clean(input);

        assert_eq!(result.kept.len() + result.removed.len(), input_ids.len());
        // Removed rows keep their original identifiers
        let removed_ids: Vec<&str> =
            result.removed.iter().map(|p| p.paragraph_id.as_str()).collect();
        assert_eq!(removed_ids, vec!["bs1965_1", "bs1965_3"]);
    }

    #[test]
    fn test_clean_renumbers_survivors_contiguously() {
        let result = execute_clean(corpus());

        let nums: Vec<u32> = result.kept.iter().map(|p| p.paragraph_num).collect();
        assert_eq!(nums, vec![1, 2]);
        assert_eq!(result.kept[0].paragraph_id, "bs1965_1");
        assert_eq!(result.kept[1].paragraph_id, "bs1965_2");
        // Text survives untouched
        assert!(result.kept[0].paragraph_text.starts_with("The economy grew"));
    }

    #[test]
    fn test_clean_counts_fired_rules() {
        let result = execute_clean(corpus());

        assert_eq!(result.rule_counts.get("too_short"), Some(&2));
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let mut kept = execute_clean(corpus()).kept;
        let before: Vec<(u32, String)> = kept
            .iter()
            .map(|p| (p.paragraph_num, p.paragraph_id.clone()))
            .collect();

        renumber(&mut kept);

        let after: Vec<(u32, String)> = kept
            .iter()
            .map(|p| (p.paragraph_num, p.paragraph_id.clone()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_renumber_tracks_speeches_independently() {
        let m1 = meta("bs1965");
        let m2 = meta("bs1966");
        let mut paragraphs = vec![
            ParagraphRecord::new(&m1, 4, "First speech, first survivor.".to_string()),
            ParagraphRecord::new(&m2, 9, "Second speech, first survivor.".to_string()),
            ParagraphRecord::new(&m1, 7, "First speech, second survivor.".to_string()),
        ];

        renumber(&mut paragraphs);

        assert_eq!(paragraphs[0].paragraph_id, "bs1965_1");
        assert_eq!(paragraphs[1].paragraph_id, "bs1966_1");
        assert_eq!(paragraphs[2].paragraph_id, "bs1965_2");
    }

    #[test]
    fn test_boundary_example_end_to_end() {
        // A header, a content paragraph, and a table row: exactly one must
        // survive and two must be removed.
        let lines = [
            "Revenue, 1965",
            "",
            "The economy grew by five per cent this year, reflecting strong exports.",
            "",
            "1966 - 51,272",
        ];
        let m = meta("bs1965");
        let paragraphs: Vec<ParagraphRecord> =
            crate::segment::segment_lines(lines, &crate::segment::SegmentConfig::default())
                .into_iter()
                .enumerate()
                .map(|(i, text)| ParagraphRecord::new(&m, (i + 1) as u32, text))
                .collect();

        let result = execute_clean(paragraphs);

        assert_eq!(result.kept.len(), 1);
        assert_eq!(result.removed.len(), 2);
        assert!(result.kept[0].paragraph_text.starts_with("The economy grew"));
    }
}
