//! Rule cascade deciding whether a reconstructed paragraph is content or
//! noise (headers, table rows, procedural boilerplate).
//!
//! Rules are evaluated in order and any rule firing removes the paragraph;
//! a paragraph matching no rule is kept. All predicates are structural or
//! lexical, never semantic. The phrase lists are tuned to the Singapore
//! parliamentary budget corpus; a different corpus forks this module.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum character count for a paragraph to be considered content
const MIN_CONTENT_LEN: usize = 20;

/// Below this length, header- and procedure-shaped text is removed
const SHORT_TEXT_LEN: usize = 50;

/// Fixed vocabulary of table column headers
const TABLE_HEADERS: [&str; 6] = ["From", "To", "Per Kilogram", "Consumption", "Present", "Proposed"];

/// Function words allowed lowercase inside a capitalized header
const HEADER_FUNCTION_WORDS: [&str; 7] = ["the", "of", "and", "or", "in", "on", "to"];

/// Connectors that mark an orphaned continuation fragment
const CONNECTOR_OPENERS: [&str; 4] = ["And ", "But ", "Or ", "So "];

/// Characters stripped before the pure-number test
const NUMERIC_PUNCT: [char; 6] = [',', '.', '$', '%', ' ', '-'];

// "1966 - 51,272"
static YEAR_AMOUNT_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}\s*[-–]\s*[\d,]+$").unwrap());

// "1964  ...  $2,700 million"
static YEAR_ELLIPSIS_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}\s+\.\.\.\s+").unwrap());

static SECTION_HEADERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(Revenue|Expenditure|Conclusion|Introduction|Summary),?\s*\d{4}$",
        r"^Tax (Changes|Increases|Measures)$",
        r"^(Budget|Fiscal|Economic)\s+(Policy|Outlook|Measures)$",
        r"^\d+-Room Flats$",
        r"^Duty on ",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Pure procedure openers. Paragraphs that merely end with "I beg to move"
// are substantive conclusions and are kept.
static PROCEDURE_OPENERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"^(Mr|Madam) (Speaker|Deputy Speaker), Sir, I beg to move,?\s*(That|"That) Parliament approves"#,
        r"^(Mr|Madam) (Speaker|Deputy Speaker), Sir, I beg to move\.$",
        r"^Sir, I beg to move\.$",
        r"^Question put and agreed to",
        r"^Bill read the (First|Second|Third) time",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ORPHAN_LETTER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([a-z]\)\s*$").unwrap());

static ORPHAN_ROMAN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([ivxl]+\)\s*$").unwrap());

/// The removal rules, in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalRule {
    TooShort,
    YearAmountRow,
    YearEllipsisRow,
    TableHeader,
    SectionHeader,
    ShortCapitalizedHeader,
    ProceduralOpener,
    ProceduralFragment,
    NumericOnly,
    ConnectorFragment,
    OrphanListMarker,
}

impl RemovalRule {
    /// Cascade order; any rule firing is sufficient for removal
    pub const CASCADE: [RemovalRule; 11] = [
        RemovalRule::TooShort,
        RemovalRule::YearAmountRow,
        RemovalRule::YearEllipsisRow,
        RemovalRule::TableHeader,
        RemovalRule::SectionHeader,
        RemovalRule::ShortCapitalizedHeader,
        RemovalRule::ProceduralOpener,
        RemovalRule::ProceduralFragment,
        RemovalRule::NumericOnly,
        RemovalRule::ConnectorFragment,
        RemovalRule::OrphanListMarker,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RemovalRule::TooShort => "too_short",
            RemovalRule::YearAmountRow => "year_amount_row",
            RemovalRule::YearEllipsisRow => "year_ellipsis_row",
            RemovalRule::TableHeader => "table_header",
            RemovalRule::SectionHeader => "section_header",
            RemovalRule::ShortCapitalizedHeader => "short_capitalized_header",
            RemovalRule::ProceduralOpener => "procedural_opener",
            RemovalRule::ProceduralFragment => "procedural_fragment",
            RemovalRule::NumericOnly => "numeric_only",
            RemovalRule::ConnectorFragment => "connector_fragment",
            RemovalRule::OrphanListMarker => "orphan_list_marker",
        }
    }

    /// Whether this rule fires on the given (trimmed) paragraph text
    pub fn matches(&self, text: &str) -> bool {
        let length = text.chars().count();

        match self {
            RemovalRule::TooShort => length < MIN_CONTENT_LEN,

            RemovalRule::YearAmountRow => YEAR_AMOUNT_ROW.is_match(text),

            RemovalRule::YearEllipsisRow => YEAR_ELLIPSIS_ROW.is_match(text),

            RemovalRule::TableHeader => {
                TABLE_HEADERS.contains(&text)
                    || (length < SHORT_TEXT_LEN
                        && TABLE_HEADERS.iter().any(|h| text.contains(h)))
            }

            RemovalRule::SectionHeader => SECTION_HEADERS.iter().any(|re| re.is_match(text)),

            RemovalRule::ShortCapitalizedHeader => is_short_capitalized_header(text, length),

            RemovalRule::ProceduralOpener => PROCEDURE_OPENERS.iter().any(|re| re.is_match(text)),

            RemovalRule::ProceduralFragment => {
                length < SHORT_TEXT_LEN
                    && ["Mr Speaker", "Madam Speaker", "Mr President"]
                        .iter()
                        .any(|p| text.starts_with(p))
                    && !last_chars(text, 30).contains("beg to move")
            }

            RemovalRule::NumericOnly => {
                let stripped: String =
                    text.chars().filter(|c| !NUMERIC_PUNCT.contains(c)).collect();
                !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
            }

            RemovalRule::ConnectorFragment => {
                length < 100 && CONNECTOR_OPENERS.iter().any(|c| text.starts_with(c))
            }

            RemovalRule::OrphanListMarker => {
                ORPHAN_LETTER_MARKER.is_match(text) || ORPHAN_ROMAN_MARKER.is_match(text)
            }
        }
    }
}

/// Evaluate the cascade; returns the first rule that fires, or `None` when
/// the paragraph is content and must be kept.
pub fn classify(paragraph_text: &str) -> Option<RemovalRule> {
    let text = paragraph_text.trim();
    RemovalRule::CASCADE.into_iter().find(|rule| rule.matches(text))
}

/// Short text with no terminal punctuation, an uppercase start, and at most
/// four words that are each capitalized or a function word — a heading shape.
fn is_short_capitalized_header(text: &str, length: usize) -> bool {
    if length == 0 || length >= SHORT_TEXT_LEN {
        return false;
    }
    if text.chars().next_back().is_some_and(|c| matches!(c, '.' | '!' | '?' | ';' | '"')) {
        return false;
    }
    if !text.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    words.len() <= 4
        && words.iter().all(|w| {
            w.chars().next().is_some_and(char::is_uppercase)
                || HEADER_FUNCTION_WORDS.contains(&w.to_lowercase().as_str())
        })
}

/// Last `n` characters of `text` (char-safe)
fn last_chars(text: &str, n: usize) -> String {
    let skip = text.chars().count().saturating_sub(n);
    text.chars().skip(skip).collect()
}
