use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{LabeledParagraph, ParagraphRecord};

/// Write a paragraph corpus as CSV, one row per paragraph.
///
/// The cleaned corpus and the removed-audit corpus share this layout.
pub fn write_corpus(path: &Path, paragraphs: &[ParagraphRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create corpus file: {:?}", path))?;

    for record in paragraphs {
        writer.serialize(record).context("Failed to write paragraph row")?;
    }
    writer.flush().context("Failed to flush corpus file")?;

    Ok(())
}

/// Read a paragraph corpus written by `write_corpus`.
pub fn read_corpus(path: &Path) -> Result<Vec<ParagraphRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open corpus file: {:?}", path))?;

    let mut paragraphs = Vec::new();
    for row in reader.deserialize() {
        let record: ParagraphRecord = row.context("Failed to parse paragraph row")?;
        paragraphs.push(record);
    }

    Ok(paragraphs)
}

/// Write classification results, one row per labeled paragraph.
pub fn write_labels(path: &Path, labels: &[LabeledParagraph]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create labels file: {:?}", path))?;

    for label in labels {
        writer.serialize(label).context("Failed to write label row")?;
    }
    writer.flush().context("Failed to flush labels file")?;

    Ok(())
}

/// Read classification results (used to resume from a checkpoint).
pub fn read_labels(path: &Path) -> Result<Vec<LabeledParagraph>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open labels file: {:?}", path))?;

    let mut labels = Vec::new();
    for row in reader.deserialize() {
        let label: LabeledParagraph = row.context("Failed to parse label row")?;
        labels.push(label);
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeechMetadata;

    fn test_metadata() -> SpeechMetadata {
        SpeechMetadata {
            speech_id: "bs1965".to_string(),
            year: 1965,
            date: "1965-11-23".to_string(),
            fm_name: "Lim Kim San".to_string(),
            pm_name: "Lee Kuan Yew".to_string(),
            parliament_term: "1".to_string(),
            election_budget: "No".to_string(),
            file_name: "bs1965.txt".to_string(),
        }
    }

    #[test]
    fn test_corpus_round_trip() {
        let meta = test_metadata();
        let paragraphs = vec![
            ParagraphRecord::new(&meta, 1, "The first paragraph of the speech.".to_string()),
            ParagraphRecord::new(&meta, 2, "A second one, with a comma.".to_string()),
        ];

        let file = tempfile::NamedTempFile::new().unwrap();
        write_corpus(file.path(), &paragraphs).unwrap();
        let restored = read_corpus(file.path()).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].paragraph_id, "bs1965_1");
        assert_eq!(restored[1].paragraph_text, "A second one, with a comma.");
        assert_eq!(restored[1].paragraph_length, 27);
    }

    #[test]
    fn test_corpus_preserves_embedded_quotes() {
        let meta = test_metadata();
        let paragraphs = vec![ParagraphRecord::new(
            &meta,
            1,
            "Text with an embedded \"quote\" inside.".to_string(),
        )];

        let file = tempfile::NamedTempFile::new().unwrap();
        write_corpus(file.path(), &paragraphs).unwrap();
        let restored = read_corpus(file.path()).unwrap();

        assert_eq!(restored[0].paragraph_text, paragraphs[0].paragraph_text);
    }
}
