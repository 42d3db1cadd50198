pub mod assembler;
pub mod boundary;
pub mod splitter;

pub use assembler::assemble;
pub use boundary::{ends_with_terminator, locate_break};
pub use splitter::split_oversized;

/// Configuration for the line-to-paragraph segmentation pipeline
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Minimum trimmed line length for a terminated line to close a paragraph
    pub flush_line_len: usize,
    /// Maximum paragraph length before re-splitting at sentence boundaries
    pub max_paragraph_len: usize,
    /// Chunks at or below this character count are discarded as artifacts
    pub min_paragraph_len: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            flush_line_len: 80,
            max_paragraph_len: 800,
            min_paragraph_len: 10,
        }
    }
}

/// Run the full segmentation pipeline: assemble raw lines into candidate
/// paragraphs, re-split any that exceed the length cap, and drop fragments
/// at or below the minimum floor.
///
/// The floor applies uniformly to split and unsplit paragraphs.
pub fn segment_lines<I, S>(lines: I, config: &SegmentConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    assemble(lines, config.flush_line_len)
        .iter()
        .flat_map(|para| split_oversized(para, config.max_paragraph_len))
        .filter(|para| para.chars().count() > config.min_paragraph_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_merges_short_lines() {
        let lines = [
            "This sentence",
            "continues here and ends properly, filling out the line to a reasonable length overall.",
            "",
            "Short.",
        ];
        let paragraphs = segment_lines(lines, &SegmentConfig::default());

        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].starts_with("This sentence continues here"));
    }

    #[test]
    fn test_segment_drops_fragments() {
        let lines = ["(a)", "", "A paragraph long enough to survive the floor."];
        let paragraphs = segment_lines(lines, &SegmentConfig::default());

        assert_eq!(
            paragraphs,
            vec!["A paragraph long enough to survive the floor.".to_string()]
        );
    }

    #[test]
    fn test_segment_splits_oversized_paragraph() {
        let sentence = "This sentence is repeated to build an oversized paragraph. ";
        let long_line = sentence.repeat(20);
        let paragraphs = segment_lines([long_line.as_str()], &SegmentConfig::default());

        assert!(paragraphs.len() > 1);
        for para in &paragraphs {
            assert!(para.chars().count() > 10);
        }
    }
}
