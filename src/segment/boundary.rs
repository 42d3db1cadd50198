use std::sync::LazyLock;

use regex::Regex;

/// How far on either side of the target position to look for a break
pub const SEARCH_RADIUS: usize = 200;

/// One or more sentence terminators followed by whitespace; the break point
/// is the offset just after the whitespace.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s").unwrap());

/// Find the sentence break nearest to `target` within ±`SEARCH_RADIUS` bytes.
///
/// Returns the offset just after the terminator-plus-whitespace of the match
/// whose position is closest to `target`; on a distance tie the earlier match
/// wins. If no terminator is found in the window, `target` is returned
/// unchanged (clamped to a char boundary) and the caller cuts there — a
/// possible mid-word cut that downstream length filters absorb. Changing this
/// fallback changes corpus output; treat any change as a corpus-versioning
/// event.
///
/// Offsets are byte offsets clamped to UTF-8 character boundaries.
pub fn locate_break(text: &str, target: usize) -> usize {
    let window_start = floor_char_boundary(text, target.saturating_sub(SEARCH_RADIUS));
    let window_end = floor_char_boundary(text, (target + SEARCH_RADIUS).min(text.len()));
    let window = &text[window_start..window_end];

    let mut best: Option<usize> = None;
    for m in SENTENCE_BREAK.find_iter(window) {
        let pos = window_start + m.end();
        let closer = match best {
            Some(b) => pos.abs_diff(target) < b.abs_diff(target),
            None => true,
        };
        if closer {
            best = Some(pos);
        }
    }

    best.unwrap_or_else(|| floor_char_boundary(text, target.min(text.len())))
}

/// Whether trimmed text ends with a sentence terminator (`.` `!` `?` `;` `:`;
/// a trailing ellipsis ends in `.` and is covered).
pub fn ends_with_terminator(text: &str) -> bool {
    text.trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| matches!(c, '.' | '!' | '?' | ';' | ':'))
}

/// Largest char boundary at or below `index`
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_nearest_break() {
        // Breaks after "one. " (5) and "two two. " (14)
        let text = "one. two two. three three three";
        assert_eq!(locate_break(text, 12), 14);
        assert_eq!(locate_break(text, 6), 5);
    }

    #[test]
    fn test_tie_prefers_earlier_break() {
        // Breaks at 5 and 11; target 8 is equidistant from both
        let text = "aaa. bbbb. cccc";
        assert_eq!(locate_break(text, 8), 5);
    }

    #[test]
    fn test_break_after_terminator_run() {
        let text = "Is that so?! Indeed it is.";
        assert_eq!(locate_break(text, 10), 13);
    }

    #[test]
    fn test_no_break_returns_target() {
        let text = "a".repeat(1000);
        assert_eq!(locate_break(&text, 800), 800);
    }

    #[test]
    fn test_break_outside_window_ignored() {
        // Only break is after position 0..5; target far beyond the radius
        let mut text = "end. ".to_string();
        text.push_str(&"x".repeat(1000));
        assert_eq!(locate_break(&text, 800), 800);
    }

    #[test]
    fn test_fallback_clamps_to_char_boundary() {
        let text = "é".repeat(500); // 2 bytes per char, no terminators
        let pos = locate_break(&text, 801);
        assert_eq!(pos, 800);
        assert!(text.is_char_boundary(pos));
    }

    #[test]
    fn test_ends_with_terminator() {
        assert!(ends_with_terminator("A sentence."));
        assert!(ends_with_terminator("Wait..."));
        assert!(ends_with_terminator("A clause;  "));
        assert!(ends_with_terminator("Heading:"));
        assert!(!ends_with_terminator("trailing words"));
        assert!(!ends_with_terminator("   "));
        assert!(!ends_with_terminator(""));
    }
}
