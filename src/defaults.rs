//! Default Configuration Values
//!
//! Centralizes the endpoint, environment variable names and fallback values
//! used throughout the crate.

/// Hosted classifier defaults
pub mod api {
    /// Hugging Face inference endpoint for the SST-2 fine-tuned DistilBERT model
    pub const ENDPOINT: &str = "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";
}

/// Input limits
pub mod limits {
    /// Maximum number of characters accepted for a single analysis
    pub const MAX_TEXT_LENGTH: usize = 500;
}

/// Normalization fallbacks
pub mod normalization {
    /// Confidence used by the permissive policy when the score is missing
    pub const FALLBACK_SCORE: f64 = 0.5;
}

/// Environment variable names
pub mod env {
    /// Bearer token for the classifier
    pub const API_KEY: &str = "HUGGING_FACE_API_KEY";
    /// Optional endpoint override
    pub const API_URL: &str = "SENTIMENT_API_URL";
    /// Optional normalization policy (`strict` or `permissive`)
    pub const POLICY: &str = "SENTIMENT_NORMALIZATION_POLICY";
    /// Log level for `telemetry::init_from_env`
    pub const LOG_LEVEL: &str = "SENTIMENT_LOG_LEVEL";
    /// Log format for `telemetry::init_from_env`
    pub const LOG_FORMAT: &str = "SENTIMENT_LOG_FORMAT";
    /// Log file for `telemetry::init_from_env`
    pub const LOG_FILE: &str = "SENTIMENT_LOG_FILE";
}

/// HTTP client defaults
pub mod http {
    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("sentiment-lens/", env!("CARGO_PKG_VERSION"));
}
