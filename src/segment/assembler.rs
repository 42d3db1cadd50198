use super::boundary::ends_with_terminator;

/// Merge raw transcript lines into candidate paragraphs.
///
/// Transcripts wrap sentences across lines inconsistently, so a short line is
/// treated as a continuation of the current paragraph rather than a boundary.
/// A paragraph closes when:
/// - a blank line is reached (blank lines are never emitted themselves), or
/// - the just-appended line is at least `flush_line_len` characters long and
///   ends with a sentence terminator, or
/// - the input ends with a non-empty buffer.
///
/// Buffered lines are joined with single spaces.
pub fn assemble<I, S>(lines: I, flush_line_len: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paragraphs = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();

        if line.is_empty() {
            if !buffer.is_empty() {
                paragraphs.push(buffer.join(" "));
                buffer.clear();
            }
            continue;
        }

        buffer.push(line.to_string());

        if line.chars().count() >= flush_line_len && ends_with_terminator(line) {
            paragraphs.push(buffer.join(" "));
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        paragraphs.push(buffer.join(" "));
    }

    paragraphs
}
