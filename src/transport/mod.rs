//! HTTP transport abstraction.
//!
//! The analyzer never talks to `reqwest` directly: it hands a fully built JSON
//! POST to a [`SentimentTransport`] and gets back the status, headers and raw
//! body. This keeps the network edge injectable, so tests can observe the
//! outgoing request (or prove that none was made) and return synthetic
//! responses.

mod client;
mod http;

pub use client::build_http_client;
pub use http::ReqwestTransport;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::SentimentError;

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
///
/// Non-success statuses are returned here as data; only failures to obtain a
/// response at all are reported as errors.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Custom HTTP transport for JSON requests.
#[async_trait]
pub trait SentimentTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, SentimentError>;
}
