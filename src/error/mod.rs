//! Error Handling Module
//!
//! This module provides error handling for the sentiment pipeline, including:
//! - Core error types (`SentimentError`, `ErrorKind`)
//! - User-facing error summaries
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use sentiment_lens::error::{ErrorKind, SentimentError};
//!
//! let error = SentimentError::TextTooLong { length: 501, max: 500 };
//! assert_eq!(error.kind(), ErrorKind::TextTooLong);
//! assert_eq!(error.to_string(), "Text is too long (501/500 characters)");
//! ```

mod conversions;
pub mod helpers;
pub mod types;

pub use helpers::*;
pub use types::*;
