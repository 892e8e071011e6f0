//! Type Conversions for SentimentError
//!
//! This module contains From trait implementations for converting
//! common error types into SentimentError.

use super::types::SentimentError;

impl From<reqwest::Error> for SentimentError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::from_status(status.as_u16(), None),
            None => Self::connection(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SentimentError {
    fn from(_: serde_json::Error) -> Self {
        Self::InvalidResultFormat
    }
}
