//! Response Normalizer
//!
//! Collapses the classifier's loosely-structured JSON reply into a
//! [`SentimentResult`]. Three payload shapes are understood:
//!
//! - a bare record: `{"label": "POSITIVE", "score": 0.95}`
//! - a flat array of records: `[{"label": ..., "score": ...}, ...]`
//! - an array of arrays of records, highest confidence first:
//!   `[[{"label": ..., "score": ...}, ...]]`
//!
//! Resolution happens in two steps. [`PayloadShape::detect`] classifies the
//! payload and yields the single candidate record, then the configured
//! [`NormalizationPolicy`] turns that record's `label` and `score` into typed
//! values. Every step is pure and returns a tagged `Result`.
//!
//! ```rust,ignore
//! use sentiment_lens::normalizer::{normalize_payload, NormalizationPolicy};
//! use serde_json::json;
//!
//! let payload = json!([[{"label": "NEGATIVE", "score": 0.85}, {"label": "POSITIVE", "score": 0.1}]]);
//! let result = normalize_payload(&payload, NormalizationPolicy::Strict)?;
//! assert_eq!(result.score(), 0.85);
//! ```

mod payload;
mod policy;

pub use payload::{CandidateRecord, PayloadShape};
pub use policy::NormalizationPolicy;

use serde_json::Value;

use crate::error::SentimentError;
use crate::types::SentimentResult;

/// Normalize an already-decoded payload.
pub fn normalize_payload(
    payload: &Value,
    policy: NormalizationPolicy,
) -> Result<SentimentResult, SentimentError> {
    if payload.is_null() {
        return Err(SentimentError::EmptyResponse);
    }

    let shape = PayloadShape::detect(payload);
    tracing::debug!(shape = shape.name(), "Detected classifier payload shape");

    let record = CandidateRecord::from_value(shape.candidate()?)?;
    let label = policy.resolve_label(record.label()?)?;
    let score = policy.resolve_score(record.score())?;

    // `score` comes from a JSON number or the fallback constant, both finite.
    SentimentResult::new(label, score).ok_or(SentimentError::MissingOrInvalidScore)
}

/// Normalize a raw response body.
///
/// An empty body is an [`SentimentError::EmptyResponse`]; a body that is not
/// JSON is an [`SentimentError::InvalidResultFormat`].
pub fn normalize_body(
    body: &[u8],
    policy: NormalizationPolicy,
) -> Result<SentimentResult, SentimentError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(SentimentError::EmptyResponse);
    }
    let payload: Value = serde_json::from_slice(body)?;
    normalize_payload(&payload, policy)
}
