//! Form-side view of an analysis in progress.

use serde::{Deserialize, Serialize};

use super::response::AnalysisResponse;
use super::sentiment::SentimentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What the form currently shows: nothing, a spinner, a result, or an alert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisState {
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            status: AnalysisStatus::Loading,
            ..Self::default()
        }
    }

    /// Settle the state from the analyzer's tagged response.
    pub fn from_response(response: AnalysisResponse) -> Self {
        match response.into_result() {
            Ok(result) => Self {
                status: AnalysisStatus::Success,
                result: Some(result),
                error: None,
            },
            Err(error) => Self {
                status: AnalysisStatus::Error,
                result: None,
                error: Some(error),
            },
        }
    }

    /// Submissions are disabled while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == AnalysisStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;

    #[test]
    fn settles_from_success_and_failure() {
        let result = SentimentResult::new(SentimentLabel::Neutral, 0.6).unwrap();
        let state = AnalysisState::from_response(AnalysisResponse::success(result));
        assert_eq!(state.status, AnalysisStatus::Success);
        assert_eq!(state.result, Some(result));

        let state = AnalysisState::from_response(AnalysisResponse::failure("boom"));
        assert_eq!(state.status, AnalysisStatus::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn loading_blocks_submission() {
        assert!(AnalysisState::loading().is_loading());
        assert!(!AnalysisState::idle().is_loading());
        assert_eq!(
            serde_json::to_value(AnalysisState::loading()).unwrap(),
            serde_json::json!({"status": "loading"})
        );
    }
}
