//! Parsing of the classifier's constrained eight-line response.
//!
//! The five category flags are mutually exclusive by contract, but the
//! service is not trusted to honor that: a response with more than one flag
//! set, or none, is surfaced as a typed error rather than assumed away.

use thiserror::Error;

use crate::models::{FramingSignal, ParagraphLabel};

#[derive(Debug, Error, PartialEq)]
pub enum LabelParseError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid flag value for {field}: {value:?}")]
    InvalidFlag { field: &'static str, value: String },
    #[error("invalid framing signal: {0:?}")]
    InvalidFramingSignal(String),
    #[error("{0} category flags set, expected exactly one")]
    AmbiguousCategory(usize),
}

/// Parse the eight-line `key: value` response into a label.
///
/// Lines may wrap values in brackets ("[0]"), which some model runs emit;
/// unknown lines are ignored.
pub fn parse_label_response(text: &str) -> Result<ParagraphLabel, LabelParseError> {
    let mut promise_citizen = None;
    let mut promise_firm = None;
    let mut demand_citizen = None;
    let mut demand_firm = None;
    let mut neutral = None;
    let mut supportive_demand = None;
    let mut framing_signal = None;
    let mut reason = None;

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "promise_citizen" => promise_citizen = Some(parse_flag("promise_citizen", value)?),
            "promise_firm" => promise_firm = Some(parse_flag("promise_firm", value)?),
            "demand_citizen" => demand_citizen = Some(parse_flag("demand_citizen", value)?),
            "demand_firm" => demand_firm = Some(parse_flag("demand_firm", value)?),
            "neutral" => neutral = Some(parse_flag("neutral", value)?),
            "supportive_demand" => supportive_demand = Some(parse_flag("supportive_demand", value)?),
            "framing_signal" => {
                let cleaned = strip_brackets(value);
                framing_signal = Some(
                    FramingSignal::parse(cleaned)
                        .ok_or_else(|| LabelParseError::InvalidFramingSignal(cleaned.to_string()))?,
                );
            }
            "reason" => reason = Some(value.to_string()),
            _ => {}
        }
    }

    let label = ParagraphLabel {
        promise_citizen: promise_citizen.ok_or(LabelParseError::MissingField("promise_citizen"))?,
        promise_firm: promise_firm.ok_or(LabelParseError::MissingField("promise_firm"))?,
        demand_citizen: demand_citizen.ok_or(LabelParseError::MissingField("demand_citizen"))?,
        demand_firm: demand_firm.ok_or(LabelParseError::MissingField("demand_firm"))?,
        neutral: neutral.ok_or(LabelParseError::MissingField("neutral"))?,
        supportive_demand: supportive_demand
            .ok_or(LabelParseError::MissingField("supportive_demand"))?,
        framing_signal: framing_signal.ok_or(LabelParseError::MissingField("framing_signal"))?,
        reason: reason.ok_or(LabelParseError::MissingField("reason"))?,
    };

    let categories = label.category_count();
    if categories != 1 {
        return Err(LabelParseError::AmbiguousCategory(categories));
    }

    Ok(label)
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, LabelParseError> {
    match strip_brackets(value) {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(LabelParseError::InvalidFlag {
            field,
            value: other.to_string(),
        }),
    }
}

fn strip_brackets(value: &str) -> &str {
    value.trim_start_matches('[').trim_end_matches(']').trim()
}
