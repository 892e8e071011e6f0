//! Result shapes handed back to the UI layer.

use serde::{Deserialize, Serialize};

use super::sentiment::SentimentResult;
use crate::error::SentimentError;

/// Outcome of a pure precondition check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

impl From<Result<(), SentimentError>> for ValidationOutcome {
    fn from(result: Result<(), SentimentError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e.to_string()),
        }
    }
}

/// Tagged success/failure value returned to the form.
///
/// Serializes as `{"success": true, "result": {...}}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn success(result: SentimentResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }

    /// Convert back into a `Result`, with the error message as the failure.
    pub fn into_result(self) -> Result<SentimentResult, String> {
        match (self.success, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(self
                .error
                .unwrap_or_else(|| "Failed to analyze sentiment".to_string())),
        }
    }
}

impl From<Result<SentimentResult, SentimentError>> for AnalysisResponse {
    fn from(result: Result<SentimentResult, SentimentError>) -> Self {
        match result {
            Ok(r) => Self::success(r),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;
    use serde_json::json;

    #[test]
    fn validation_outcome_wire_shape() {
        assert_eq!(
            serde_json::to_value(ValidationOutcome::valid()).unwrap(),
            json!({"isValid": true})
        );
        let outcome = ValidationOutcome::from(Err::<(), _>(SentimentError::EmptyText));
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({"isValid": false, "errorMessage": "Text cannot be empty"})
        );
    }

    #[test]
    fn response_wire_shapes() {
        let result = SentimentResult::new(SentimentLabel::Positive, 0.95).unwrap();
        let ok = AnalysisResponse::from(Ok::<_, SentimentError>(result));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"success": true, "result": {"label": "POSITIVE", "score": 0.95}})
        );

        let err = AnalysisResponse::from(Err::<SentimentResult, _>(SentimentError::EmptyText));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"success": false, "error": "Text cannot be empty"})
        );
    }

    #[test]
    fn into_result_falls_back_to_generic_message() {
        let inconsistent = AnalysisResponse {
            success: true,
            result: None,
            error: None,
        };
        assert_eq!(
            inconsistent.into_result().unwrap_err(),
            "Failed to analyze sentiment"
        );
    }
}
