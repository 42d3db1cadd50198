use super::boundary::locate_break;

/// Re-segment a paragraph exceeding `max_len` bytes into sentence-bounded
/// chunks.
///
/// Repeatedly locates a sentence break near `max_len` in the unconsumed
/// remainder, slices off the leading chunk, and continues until the remainder
/// fits. When the locator finds no break nearby it falls back to a raw cut at
/// `max_len`; a run of more than `max_len` characters without sentence
/// punctuation therefore cuts mid-word. That fallback is part of the corpus
/// contract and must not be special-cased away.
pub fn split_oversized(paragraph: &str, max_len: usize) -> Vec<String> {
    if paragraph.len() <= max_len {
        return vec![paragraph.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = paragraph;

    while remaining.len() > max_len {
        let break_pos = locate_break(remaining, max_len);

        let chunk = remaining[..break_pos].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }

        remaining = remaining[break_pos..].trim_start();
    }

    let last = remaining.trim();
    if !last.is_empty() {
        chunks.push(last.to_string());
    }

    chunks
}
