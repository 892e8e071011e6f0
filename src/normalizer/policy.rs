//! Label and score resolution policies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::defaults::normalization::FALLBACK_SCORE;
use crate::error::SentimentError;
use crate::types::SentimentLabel;

/// How unexpected label text and missing scores are treated.
///
/// - `Strict` rejects anything other than the three canonical labels
///   (case-insensitive) and requires a numeric score.
/// - `Permissive` matches `POSITIVE`/`NEGATIVE` as substrings, maps any other
///   label to `NEUTRAL`, and falls back to a score of `0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    #[default]
    Strict,
    Permissive,
}

impl NormalizationPolicy {
    pub fn resolve_label(&self, raw: &str) -> Result<SentimentLabel, SentimentError> {
        match self {
            Self::Strict => SentimentLabel::from_token(raw)
                .ok_or_else(|| SentimentError::UnsupportedLabel(raw.to_string())),
            Self::Permissive => {
                let upper = raw.to_uppercase();
                if upper.contains("POSITIVE") {
                    Ok(SentimentLabel::Positive)
                } else if upper.contains("NEGATIVE") {
                    Ok(SentimentLabel::Negative)
                } else {
                    if upper != "NEUTRAL" {
                        tracing::warn!(label = raw, "Unrecognized sentiment label, using NEUTRAL");
                    }
                    Ok(SentimentLabel::Neutral)
                }
            }
        }
    }

    pub fn resolve_score(&self, score: Option<f64>) -> Result<f64, SentimentError> {
        match (self, score) {
            (_, Some(score)) => Ok(score),
            (Self::Strict, None) => Err(SentimentError::MissingOrInvalidScore),
            (Self::Permissive, None) => {
                tracing::warn!(
                    fallback = FALLBACK_SCORE,
                    "Missing sentiment score, using fallback"
                );
                Ok(FALLBACK_SCORE)
            }
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl FromStr for NormalizationPolicy {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            other => Err(SentimentError::Configuration(format!(
                "Invalid normalization policy: {other}. Valid options: strict, permissive"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_labels_are_exact_after_uppercasing() {
        let p = NormalizationPolicy::Strict;
        for raw in ["positive", "POSITIVE", "Positive"] {
            assert_eq!(p.resolve_label(raw).unwrap(), SentimentLabel::Positive);
        }
        assert_eq!(
            p.resolve_label("VERY_POSITIVE"),
            Err(SentimentError::UnsupportedLabel("VERY_POSITIVE".into()))
        );
    }

    #[test]
    fn permissive_labels_match_substrings() {
        let p = NormalizationPolicy::Permissive;
        assert_eq!(
            p.resolve_label("very_positive").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            p.resolve_label("Negative-ish").unwrap(),
            SentimentLabel::Negative
        );
        assert_eq!(p.resolve_label("LABEL_1").unwrap(), SentimentLabel::Neutral);
    }

    #[test]
    fn scores() {
        assert_eq!(NormalizationPolicy::Strict.resolve_score(Some(0.2)), Ok(0.2));
        assert_eq!(
            NormalizationPolicy::Strict.resolve_score(None),
            Err(SentimentError::MissingOrInvalidScore)
        );
        assert_eq!(
            NormalizationPolicy::Permissive.resolve_score(None),
            Ok(FALLBACK_SCORE)
        );
    }

    #[test]
    fn parse_policy() {
        assert_eq!(
            "Permissive".parse::<NormalizationPolicy>().unwrap(),
            NormalizationPolicy::Permissive
        );
        assert_eq!(
            " strict ".parse::<NormalizationPolicy>().unwrap(),
            NormalizationPolicy::Strict
        );
        assert!(matches!(
            "lenient".parse::<NormalizationPolicy>(),
            Err(SentimentError::Configuration(_))
        ));
        assert_eq!(NormalizationPolicy::default(), NormalizationPolicy::Strict);
    }
}
