//! Sentiment label and result value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classifier's categorical output, collapsed to a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels, in display order.
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Canonical upper-case token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Exact match against the canonical tokens, after upper-casing.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            "NEUTRAL" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `{label, score}` pair.
///
/// The score is always finite. No range is enforced: classifiers are expected
/// to emit probabilities in `[0, 1]` but any finite confidence is carried
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSentimentResult")]
pub struct SentimentResult {
    label: SentimentLabel,
    score: f64,
}

/// Unchecked wire form; deserialization goes through [`SentimentResult::new`].
#[derive(Deserialize)]
struct RawSentimentResult {
    label: SentimentLabel,
    score: f64,
}

impl TryFrom<RawSentimentResult> for SentimentResult {
    type Error = &'static str;

    fn try_from(raw: RawSentimentResult) -> Result<Self, Self::Error> {
        Self::new(raw.label, raw.score).ok_or("sentiment score must be finite")
    }
}

impl SentimentResult {
    /// Returns `None` when `score` is NaN or infinite.
    pub fn new(label: SentimentLabel, score: f64) -> Option<Self> {
        score.is_finite().then_some(Self { label, score })
    }

    pub const fn label(&self) -> SentimentLabel {
        self.label
    }

    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Score as a rounded percentage, as displayed in the result overlay.
    pub fn confidence_percent(&self) -> i64 {
        (self.score * 100.0).round() as i64
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Confidence: {}%)",
            self.label,
            self.confidence_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_is_case_insensitive_and_exact() {
        assert_eq!(
            SentimentLabel::from_token("positive"),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(
            SentimentLabel::from_token("Neutral"),
            Some(SentimentLabel::Neutral)
        );
        assert_eq!(SentimentLabel::from_token("VERY_POSITIVE"), None);
        assert_eq!(SentimentLabel::from_token(""), None);
    }

    #[test]
    fn result_rejects_non_finite_scores() {
        assert!(SentimentResult::new(SentimentLabel::Positive, f64::NAN).is_none());
        assert!(SentimentResult::new(SentimentLabel::Positive, f64::INFINITY).is_none());
        // Out-of-range but finite values are carried through.
        let r = SentimentResult::new(SentimentLabel::Negative, 1.5).unwrap();
        assert_eq!(r.score(), 1.5);
    }

    #[test]
    fn result_wire_shape() {
        let r = SentimentResult::new(SentimentLabel::Positive, 0.95).unwrap();
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            serde_json::json!({"label": "POSITIVE", "score": 0.95})
        );
    }

    #[test]
    fn deserialization_checks_the_score() {
        let r: SentimentResult =
            serde_json::from_value(serde_json::json!({"label": "NEUTRAL", "score": 0.4})).unwrap();
        assert_eq!(r, SentimentResult::new(SentimentLabel::Neutral, 0.4).unwrap());

        let raw = RawSentimentResult {
            label: SentimentLabel::Positive,
            score: f64::NAN,
        };
        assert!(SentimentResult::try_from(raw).is_err());

        // JSON `null` is not a score.
        assert!(
            serde_json::from_value::<SentimentResult>(
                serde_json::json!({"label": "NEUTRAL", "score": null})
            )
            .is_err()
        );
    }

    #[test]
    fn display_shows_rounded_confidence() {
        let r = SentimentResult::new(SentimentLabel::Negative, 0.854).unwrap();
        assert_eq!(r.confidence_percent(), 85);
        assert_eq!(r.to_string(), "NEGATIVE (Confidence: 85%)");
    }
}
