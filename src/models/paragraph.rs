use serde::{Deserialize, Serialize};

/// Per-speech metadata supplied by the metadata CSV, keyed by file name.
///
/// All fields are immutable once loaded; paragraphs copy them verbatim at
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechMetadata {
    /// Opaque identifier of the source speech
    pub speech_id: String,
    /// Budget year the speech was delivered for
    pub year: u16,
    /// Delivery date as recorded in the metadata source
    pub date: String,
    /// Finance minister delivering the speech
    pub fm_name: String,
    /// Prime minister at the time of delivery
    pub pm_name: String,
    /// Parliament term
    pub parliament_term: String,
    /// Whether this was an election-year budget
    pub election_budget: String,
    /// Source transcript file name
    pub file_name: String,
}

/// One paragraph of the reconstructed corpus, in the persisted column layout.
///
/// `paragraph_text` is immutable after creation; renumbering passes rewrite
/// only `paragraph_num` and the derived `paragraph_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Derived identifier, `{speech_id}_{paragraph_num}`
    pub paragraph_id: String,
    /// Identifier of the owning speech
    pub speech_id: String,
    /// 1-based position within the speech
    pub paragraph_num: u32,
    /// Reconstructed paragraph body
    pub paragraph_text: String,
    /// Character count of `paragraph_text`
    pub paragraph_length: usize,
    pub year: u16,
    pub date: String,
    pub fm_name: String,
    pub pm_name: String,
    pub parliament_term: String,
    pub election_budget: String,
    pub file_name: String,
}

impl ParagraphRecord {
    /// Create a record for a reconstructed paragraph, copying the speech
    /// metadata and deriving the identifier.
    pub fn new(meta: &SpeechMetadata, paragraph_num: u32, paragraph_text: String) -> Self {
        let paragraph_length = paragraph_text.chars().count();
        Self {
            paragraph_id: Self::derive_id(&meta.speech_id, paragraph_num),
            speech_id: meta.speech_id.clone(),
            paragraph_num,
            paragraph_text,
            paragraph_length,
            year: meta.year,
            date: meta.date.clone(),
            fm_name: meta.fm_name.clone(),
            pm_name: meta.pm_name.clone(),
            parliament_term: meta.parliament_term.clone(),
            election_budget: meta.election_budget.clone(),
            file_name: meta.file_name.clone(),
        }
    }

    /// Identifier format shared by every pass
    pub fn derive_id(speech_id: &str, paragraph_num: u32) -> String {
        format!("{}_{}", speech_id, paragraph_num)
    }

    /// Reassign the position within the speech, keeping the identifier
    /// consistent. The paragraph text is never touched.
    pub fn set_paragraph_num(&mut self, paragraph_num: u32) {
        self.paragraph_num = paragraph_num;
        self.paragraph_id = Self::derive_id(&self.speech_id, paragraph_num);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_new_record_derives_id_and_length() {
        let meta = test_metadata();
        let record = ParagraphRecord::new(&meta, 3, "The economy grew.".to_string());

        assert_eq!(record.paragraph_id, "bs1965_3");
        assert_eq!(record.paragraph_num, 3);
        assert_eq!(record.paragraph_length, 17);
        assert_eq!(record.speech_id, "bs1965");
        assert_eq!(record.year, 1965);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let meta = test_metadata();
        let record = ParagraphRecord::new(&meta, 1, "a–b".to_string());

        assert_eq!(record.paragraph_length, 3);
    }

    #[test]
    fn test_set_paragraph_num_keeps_id_consistent() {
        let meta = test_metadata();
        let mut record = ParagraphRecord::new(&meta, 7, "Some text here.".to_string());

        record.set_paragraph_num(2);

        assert_eq!(record.paragraph_num, 2);
        assert_eq!(record.paragraph_id, "bs1965_2");
        assert_eq!(record.paragraph_text, "Some text here.");
    }
}
