//! `reqwest::Client` construction for the classifier.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::HttpConfig;
use crate::error::SentimentError;

/// Build the client used by [`ReqwestTransport`](super::ReqwestTransport).
///
/// Unset timeouts leave the transport defaults in place; extra headers are
/// sent on every request alongside the per-call authorization.
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, SentimentError> {
    let mut builder = reqwest::Client::builder().default_headers(default_headers(&config.headers)?);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder
        .build()
        .map_err(|e| SentimentError::Configuration(format!("Failed to create HTTP client: {e}")))
}

fn default_headers(headers: &HashMap<String, String>) -> Result<HeaderMap, SentimentError> {
    headers
        .iter()
        .map(|(name, value)| -> Result<(HeaderName, HeaderValue), SentimentError> {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SentimentError::Configuration(format!("Invalid header name '{name}': {e}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SentimentError::Configuration(format!("Invalid header value for '{name}': {e}"))
            })?;
            Ok((header_name, header_value))
        })
        .collect()
}
