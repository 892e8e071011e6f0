//! # sentiment-lens
//!
//! Client-side sentiment analysis against a hosted text-classification model.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Tagged results**: every failure is a [`SentimentError`] value; the form
//!   receives `{success, result | error}` and never an unwinding panic.
//! - **Shape-tolerant normalization**: bare records, flat arrays and nested
//!   arrays from the classifier all collapse to one [`SentimentResult`].
//! - **Explicit policy**: choose strict rejection or permissive defaults for
//!   unknown labels and missing scores via [`NormalizationPolicy`].
//! - **Injectable transport**: swap the `reqwest` transport for any
//!   [`SentimentTransport`] implementation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentiment_lens::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = SentimentAnalyzer::builder()
//!         .api_key_from_env()
//!         .policy(NormalizationPolicy::Strict)
//!         .build()?;
//!
//!     match analyzer.analyze("What a wonderful day!").await {
//!         Ok(result) => println!("{}", SentimentReport::from(&result).render()),
//!         Err(e) => eprintln!("{e}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod config;
pub mod defaults;
pub mod error;
pub mod normalizer;
pub mod telemetry;
pub mod transport;
pub mod types;
pub mod validation;

pub use analyzer::{SentimentAnalyzer, SentimentAnalyzerBuilder, analyze_sentiment};
pub use config::{AnalyzerConfig, HttpConfig};
pub use error::{ErrorKind, SentimentError};
pub use normalizer::{NormalizationPolicy, normalize_body, normalize_payload};
pub use transport::{SentimentTransport, TransportRequest, TransportResponse};
pub use types::{
    AnalysisResponse, AnalysisState, AnalysisStatus, SentimentInfo, SentimentLabel,
    SentimentReport, SentimentResult, ValidationOutcome,
};
pub use validation::{MAX_TEXT_LENGTH, validate_api_key, validate_text};

/// Commonly used items.
pub mod prelude {
    pub use crate::analyzer::{SentimentAnalyzer, SentimentAnalyzerBuilder, analyze_sentiment};
    pub use crate::config::{AnalyzerConfig, HttpConfig};
    pub use crate::error::{ErrorKind, SentimentError};
    pub use crate::normalizer::NormalizationPolicy;
    pub use crate::transport::SentimentTransport;
    pub use crate::types::*;
}
