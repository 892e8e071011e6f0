//! User-facing error helpers.
//!
//! Structured summaries and short remediation hints suitable for rendering
//! in a form's inline alert or a terminal.

use super::types::{ErrorKind, SentimentError};

/// Structured error summary for UI consumption
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSummary {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    /// The exact message shown to the user
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Summarize a SentimentError with friendly suggestions.
pub fn summarize_error(err: &SentimentError) -> ErrorSummary {
    ErrorSummary {
        kind: err.kind(),
        status: err.status_code(),
        message: err.to_string(),
        suggestions: suggest_fixes(err),
    }
}

/// Suggest fixes based on the error kind.
pub fn suggest_fixes(err: &SentimentError) -> Vec<String> {
    let mut tips = Vec::new();
    match err.kind() {
        ErrorKind::EmptyText => {
            tips.push("Enter some text to analyze".to_string());
        }
        ErrorKind::TextTooLong => {
            tips.push("Shorten the text to 500 characters or fewer".to_string());
        }
        ErrorKind::MissingCredential => {
            tips.push(format!(
                "Set the {} environment variable",
                crate::defaults::env::API_KEY
            ));
        }
        ErrorKind::TransportError => match err.status_code() {
            Some(401 | 403) => tips.push("Verify the API key or Bearer token".to_string()),
            Some(429) => tips.push("Wait a moment before submitting again".to_string()),
            Some(503) => {
                tips.push("The model may still be loading; try again shortly".to_string())
            }
            _ => tips.push("Check network connectivity and the service status".to_string()),
        },
        ErrorKind::Configuration => {
            tips.push("Check the endpoint URL and HTTP client configuration".to_string());
        }
        ErrorKind::EmptyResponse
        | ErrorKind::EmptyResultArray
        | ErrorKind::InvalidResultFormat
        | ErrorKind::MissingOrInvalidLabel
        | ErrorKind::MissingOrInvalidScore
        | ErrorKind::UnsupportedLabel => {
            tips.push("The classifier returned an unexpected result; try again".to_string());
        }
    }
    tips
}

/// Render a CLI-friendly string for ErrorSummary.
pub fn format_summary(summary: &ErrorSummary) -> String {
    let mut out = String::new();
    if let Some(code) = summary.status {
        out.push_str(&format!("Status: {code}\n"));
    }
    out.push_str(&format!("Message: {}\n", summary.message));
    if !summary.suggestions.is_empty() {
        out.push_str("Suggestions:\n");
        for s in &summary.suggestions {
            out.push_str(&format!("  - {s}\n"));
        }
    }
    out
}
