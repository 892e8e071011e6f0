//! Default transport backed by `reqwest`.

use async_trait::async_trait;

use super::{SentimentTransport, TransportRequest, TransportResponse};
use crate::error::SentimentError;

/// Sends requests with a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SentimentTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, SentimentError> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| SentimentError::connection(format!("Failed to read response: {e}")))?;

        Ok(TransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
