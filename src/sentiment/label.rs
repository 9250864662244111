//! Sentiment label module
//!
//! Maps a compound score onto the three discrete labels and carries the
//! fixed message template for each.

use serde::{Deserialize, Serialize};

/// Compound score at or above this is positive.
const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below this is negative.
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Discrete sentiment classification.
///
/// Serialized as `"pos"`, `"neg"` or `"neutral"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Pos,
    Neg,
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound score.
    ///
    /// Thresholds are inclusive at their boundary: exactly 0.05 is positive,
    /// exactly -0.05 is negative, the open interval between them is neutral.
    pub fn classify(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Self::Pos
        } else if compound <= NEGATIVE_THRESHOLD {
            Self::Neg
        } else {
            Self::Neutral
        }
    }

    /// Human-readable message for this label, one fixed template per variant.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Pos => "It is a sentence carrying a positive vibe.",
            Self::Neg => "It is a sentence carrying a negative vibe.",
            Self::Neutral => "It is a sentence carrying a neutral vibe.",
        }
    }

    /// Wire representation, matching the serde rename.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pos => "pos",
            Self::Neg => "neg",
            Self::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(SentimentLabel::classify(0.8), SentimentLabel::Pos);
        assert_eq!(SentimentLabel::classify(-0.8), SentimentLabel::Neg);
        assert_eq!(SentimentLabel::classify(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        // Exactly at the threshold resolves to pos/neg, not neutral
        assert_eq!(SentimentLabel::classify(0.05), SentimentLabel::Pos);
        assert_eq!(SentimentLabel::classify(-0.05), SentimentLabel::Neg);
        assert_eq!(SentimentLabel::classify(0.049), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(-0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Pos).unwrap(),
            "\"pos\""
        );
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Neg).unwrap(),
            "\"neg\""
        );
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Neutral).unwrap(),
            "\"neutral\""
        );
        assert_eq!(SentimentLabel::Pos.as_str(), "pos");
    }

    #[test]
    fn test_messages_differ_per_label() {
        assert!(SentimentLabel::Pos.message().contains("positive"));
        assert!(SentimentLabel::Neg.message().contains("negative"));
        assert!(SentimentLabel::Neutral.message().contains("neutral"));
    }
}
