//! Shape detection and candidate record extraction.

use serde_json::Value;

use crate::error::SentimentError;

/// The three payload layouts the classifier is known to return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadShape<'a> {
    /// Array of arrays of records, highest confidence first.
    Nested(&'a [Value]),
    /// Array of records.
    Flat(&'a [Value]),
    /// The payload itself is the record.
    Record(&'a Value),
}

impl<'a> PayloadShape<'a> {
    /// Classify a payload. An array counts as nested when its first element
    /// is itself an array.
    pub fn detect(payload: &'a Value) -> Self {
        match payload {
            Value::Array(items) if matches!(items.first(), Some(Value::Array(_))) => {
                Self::Nested(items)
            }
            Value::Array(items) => Self::Flat(items),
            other => Self::Record(other),
        }
    }

    /// The single value to validate as a `{label, score}` record.
    pub fn candidate(&self) -> Result<&'a Value, SentimentError> {
        match *self {
            Self::Nested(outer) => outer
                .first()
                .and_then(Value::as_array)
                .and_then(|inner| inner.first())
                .ok_or(SentimentError::EmptyResultArray),
            Self::Flat(items) => items.first().ok_or(SentimentError::EmptyResultArray),
            Self::Record(value) => Ok(value),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nested(_) => "nested",
            Self::Flat(_) => "flat",
            Self::Record(_) => "record",
        }
    }
}

/// Borrowed view of the `label` and `score` fields of a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateRecord<'a> {
    label: Option<&'a Value>,
    score: Option<&'a Value>,
}

impl<'a> CandidateRecord<'a> {
    /// Objects expose their fields; arrays are structured but carry no
    /// fields; anything else is rejected.
    pub fn from_value(value: &'a Value) -> Result<Self, SentimentError> {
        match value {
            Value::Object(map) => Ok(Self {
                label: map.get("label"),
                score: map.get("score"),
            }),
            Value::Array(_) => Ok(Self {
                label: None,
                score: None,
            }),
            _ => Err(SentimentError::InvalidResultFormat),
        }
    }

    /// The textual label, as sent by the classifier. An empty string counts
    /// as missing.
    pub fn label(&self) -> Result<&'a str, SentimentError> {
        self.label
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(SentimentError::MissingOrInvalidLabel)
    }

    /// The numeric score, if present.
    pub fn score(&self) -> Option<f64> {
        self.score.and_then(Value::as_f64)
    }
}
