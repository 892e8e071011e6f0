//! Canned explanations shown alongside a result.

use serde::Serialize;

use super::sentiment::{SentimentLabel, SentimentResult};

/// Description and advice for one sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentInfo {
    pub description: &'static str,
    pub tip: &'static str,
}

const POSITIVE_INFO: SentimentInfo = SentimentInfo {
    description: "The text expresses a positive sentiment, showing approval, happiness, or optimism.",
    tip: "To maintain this positive tone, continue using affirmative language and focus on benefits and solutions.",
};

const NEGATIVE_INFO: SentimentInfo = SentimentInfo {
    description: "The text expresses a negative sentiment, showing disapproval, sadness, or pessimism.",
    tip: "To shift to a more positive tone, try focusing on solutions rather than problems, and use more constructive language.",
};

const NEUTRAL_INFO: SentimentInfo = SentimentInfo {
    description: "The text expresses a neutral sentiment, showing neither strong approval nor disapproval.",
    tip: "To make your message more engaging, consider adding more descriptive or emotional language that aligns with your intent.",
};

impl SentimentLabel {
    /// Explanatory copy for this label.
    pub const fn info(&self) -> &'static SentimentInfo {
        match self {
            Self::Positive => &POSITIVE_INFO,
            Self::Negative => &NEGATIVE_INFO,
            Self::Neutral => &NEUTRAL_INFO,
        }
    }
}

/// Everything the result overlay displays for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub label: SentimentLabel,
    /// Rounded percentage, e.g. `95` for a score of `0.95`
    pub confidence: i64,
    pub description: &'static str,
    pub tip: &'static str,
}

impl SentimentReport {
    pub fn from_result(result: &SentimentResult) -> Self {
        let info = result.label().info();
        Self {
            label: result.label(),
            confidence: result.confidence_percent(),
            description: info.description,
            tip: info.tip,
        }
    }

    /// Plain-text rendering of the overlay.
    pub fn render(&self) -> String {
        format!(
            "{}\nConfidence: {}%\n\nWhat does this mean?\n{}\n\nPro Tip\n{}\n",
            self.label, self.confidence, self.description, self.tip
        )
    }
}

impl From<&SentimentResult> for SentimentReport {
    fn from(result: &SentimentResult) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_copy() {
        for label in SentimentLabel::ALL {
            let info = label.info();
            assert!(!info.description.is_empty());
            assert!(!info.tip.is_empty());
        }
        assert!(SentimentLabel::Negative
            .info()
            .description
            .contains("negative sentiment"));
    }

    #[test]
    fn report_renders_confidence_line() {
        let result = SentimentResult::new(SentimentLabel::Positive, 0.95).unwrap();
        let report = SentimentReport::from(&result);
        assert_eq!(report.confidence, 95);
        let text = report.render();
        assert!(text.starts_with("POSITIVE\nConfidence: 95%\n"));
        assert!(text.contains("Pro Tip\nTo maintain this positive tone"));
    }
}
