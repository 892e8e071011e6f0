//! Core error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every failure the pipeline can report.
///
/// `Display` renders the exact message the form shows to the user, so callers
/// can forward `err.to_string()` without further formatting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentimentError {
    /// The submitted text was empty or whitespace only.
    #[error("Text cannot be empty")]
    EmptyText,

    /// The submitted text exceeded the maximum length.
    #[error("Text is too long ({length}/{max} characters)")]
    TextTooLong { length: usize, max: usize },

    /// No service credential is configured.
    #[error("API key is not configured on the server")]
    MissingCredential,

    /// The outbound call failed or the remote answered with a non-success status.
    #[error("API Error: {message}")]
    TransportError {
        /// HTTP status, when the remote answered at all
        status: Option<u16>,
        /// Upstream error detail, or the transport failure text
        message: String,
    },

    /// The remote answered with an empty body or JSON `null`.
    #[error("Empty API response")]
    EmptyResponse,

    /// The payload was an array without any candidate record.
    #[error("Empty result array from API")]
    EmptyResultArray,

    /// The candidate record was not a structured value.
    #[error("Invalid result format from API")]
    InvalidResultFormat,

    /// The candidate record had no textual `label`.
    #[error("No sentiment label found in API response")]
    MissingOrInvalidLabel,

    /// The candidate record had no numeric `score` (strict policy only).
    #[error("No sentiment score found in API response")]
    MissingOrInvalidScore,

    /// The label was not one of the known tokens (strict policy only).
    #[error("Invalid sentiment label: {0}")]
    UnsupportedLabel(String),

    /// Client-side configuration problem (endpoint, headers, HTTP client).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Coarse tag for each failure, independent of the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyText,
    TextTooLong,
    MissingCredential,
    TransportError,
    EmptyResponse,
    EmptyResultArray,
    InvalidResultFormat,
    MissingOrInvalidLabel,
    MissingOrInvalidScore,
    UnsupportedLabel,
    Configuration,
}

impl SentimentError {
    /// Build a transport error from an HTTP status and optional upstream detail.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        Self::TransportError {
            status: Some(status),
            message: detail
                .unwrap_or_else(|| format!("Request failed with status code {status}")),
        }
    }

    /// Build a transport error for a failure before any response arrived.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::TransportError {
            status: None,
            message: message.into(),
        }
    }

    /// The taxonomy tag of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyText => ErrorKind::EmptyText,
            Self::TextTooLong { .. } => ErrorKind::TextTooLong,
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::TransportError { .. } => ErrorKind::TransportError,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::EmptyResultArray => ErrorKind::EmptyResultArray,
            Self::InvalidResultFormat => ErrorKind::InvalidResultFormat,
            Self::MissingOrInvalidLabel => ErrorKind::MissingOrInvalidLabel,
            Self::MissingOrInvalidScore => ErrorKind::MissingOrInvalidScore,
            Self::UnsupportedLabel(_) => ErrorKind::UnsupportedLabel,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status attached to this error, if any.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::TransportError { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the failure was caused by the submitted text itself.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyText | Self::TextTooLong { .. })
    }

    /// Whether the failure came from normalizing the remote payload.
    pub const fn is_normalization_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyResponse
                | Self::EmptyResultArray
                | Self::InvalidResultFormat
                | Self::MissingOrInvalidLabel
                | Self::MissingOrInvalidScore
                | Self::UnsupportedLabel(_)
        )
    }
}
