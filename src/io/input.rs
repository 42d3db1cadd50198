use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::SpeechMetadata;

/// Load the speech metadata CSV and index it by `file_name`.
pub fn load_metadata(path: &Path) -> Result<HashMap<String, SpeechMetadata>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open metadata file: {:?}", path))?;

    let mut metadata = HashMap::new();
    for row in reader.deserialize() {
        let entry: SpeechMetadata = row.context("Failed to parse metadata row")?;
        metadata.insert(entry.file_name.clone(), entry);
    }

    Ok(metadata)
}

/// Read a speech transcript as a sequence of lines.
///
/// Blank lines are semantically meaningful paragraph separators and are
/// preserved for the assembler.
pub fn read_speech_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read speech file: {:?}", path))?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_metadata() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "speech_id,year,date,fm_name,pm_name,parliament_term,election_budget,file_name"
        )
        .unwrap();
        writeln!(
            file,
            "bs1965,1965,1965-11-23,Lim Kim San,Lee Kuan Yew,1,No,bs1965.txt"
        )
        .unwrap();
        writeln!(
            file,
            "bs1966,1966,1966-12-05,Lim Kim San,Lee Kuan Yew,1,No,bs1966.txt"
        )
        .unwrap();

        let metadata = load_metadata(file.path()).unwrap();

        assert_eq!(metadata.len(), 2);
        let entry = &metadata["bs1965.txt"];
        assert_eq!(entry.speech_id, "bs1965");
        assert_eq!(entry.year, 1965);
        assert_eq!(entry.fm_name, "Lim Kim San");
    }

    #[test]
    fn test_read_speech_lines_preserves_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "First line\n\nSecond paragraph\n").unwrap();

        let lines = read_speech_lines(file.path()).unwrap();

        assert_eq!(lines, vec!["First line", "", "Second paragraph"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_speech_lines(Path::new("/nonexistent/speech.txt"));
        assert!(result.is_err());
    }
}
