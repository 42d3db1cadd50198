use serde::{Deserialize, Serialize};

/// Framing signal reported by the label service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingSignal {
    CrisisFraming,
    CollectiveFutureFraming,
    VulnerabilityFraming,
    None,
}

impl FramingSignal {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "crisis_framing" => Some(Self::CrisisFraming),
            "collective_future_framing" => Some(Self::CollectiveFutureFraming),
            "vulnerability_framing" => Some(Self::VulnerabilityFraming),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrisisFraming => "crisis_framing",
            Self::CollectiveFutureFraming => "collective_future_framing",
            Self::VulnerabilityFraming => "vulnerability_framing",
            Self::None => "none",
        }
    }
}

/// Structured label returned by the external thematic classifier.
///
/// The five category flags are mutually exclusive by contract; the response
/// parser rejects labels that violate this (see `llm::response`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLabel {
    pub promise_citizen: bool,
    pub promise_firm: bool,
    pub demand_citizen: bool,
    pub demand_firm: bool,
    pub neutral: bool,
    pub supportive_demand: bool,
    pub framing_signal: FramingSignal,
    pub reason: String,
}

impl ParagraphLabel {
    /// Number of category flags set (excludes `supportive_demand`)
    pub fn category_count(&self) -> usize {
        [
            self.promise_citizen,
            self.promise_firm,
            self.demand_citizen,
            self.demand_firm,
            self.neutral,
        ]
        .iter()
        .filter(|&&f| f)
        .count()
    }

    /// Name of the single category flag that is set, if exactly one is
    pub fn primary_category(&self) -> Option<&'static str> {
        if self.category_count() != 1 {
            return None;
        }
        if self.promise_citizen {
            Some("promise_citizen")
        } else if self.promise_firm {
            Some("promise_firm")
        } else if self.demand_citizen {
            Some("demand_citizen")
        } else if self.demand_firm {
            Some("demand_firm")
        } else {
            Some("neutral")
        }
    }
}

/// One labeled paragraph in the persisted results layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledParagraph {
    pub paragraph_id: String,
    pub speech_id: String,
    pub paragraph_num: u32,
    pub year: u16,
    pub category: String,
    pub promise_citizen: u8,
    pub promise_firm: u8,
    pub demand_citizen: u8,
    pub demand_firm: u8,
    pub neutral: u8,
    pub supportive_demand: u8,
    pub framing_signal: String,
    pub reason: String,
}

impl LabeledParagraph {
    pub fn new(record: &super::ParagraphRecord, label: &ParagraphLabel) -> Self {
        Self {
            paragraph_id: record.paragraph_id.clone(),
            speech_id: record.speech_id.clone(),
            paragraph_num: record.paragraph_num,
            year: record.year,
            category: label.primary_category().unwrap_or("unknown").to_string(),
            promise_citizen: u8::from(label.promise_citizen),
            promise_firm: u8::from(label.promise_firm),
            demand_citizen: u8::from(label.demand_citizen),
            demand_firm: u8::from(label.demand_firm),
            neutral: u8::from(label.neutral),
            supportive_demand: u8::from(label.supportive_demand),
            framing_signal: label.framing_signal.as_str().to_string(),
            reason: label.reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_label() -> ParagraphLabel {
        ParagraphLabel {
            promise_citizen: false,
            promise_firm: false,
            demand_citizen: false,
            demand_firm: false,
            neutral: true,
            supportive_demand: false,
            framing_signal: FramingSignal::None,
            reason: "none".to_string(),
        }
    }

    #[test]
    fn test_primary_category() {
        let label = neutral_label();
        assert_eq!(label.category_count(), 1);
        assert_eq!(label.primary_category(), Some("neutral"));
    }

    #[test]
    fn test_primary_category_ambiguous() {
        let mut label = neutral_label();
        label.demand_citizen = true;

        assert_eq!(label.category_count(), 2);
        assert_eq!(label.primary_category(), None);
    }

    #[test]
    fn test_framing_signal_round_trip() {
        for signal in [
            FramingSignal::CrisisFraming,
            FramingSignal::CollectiveFutureFraming,
            FramingSignal::VulnerabilityFraming,
            FramingSignal::None,
        ] {
            assert_eq!(FramingSignal::parse(signal.as_str()), Some(signal));
        }
        assert_eq!(FramingSignal::parse("dramatic_framing"), None);
    }
}
