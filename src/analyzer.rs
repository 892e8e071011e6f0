//! Analysis Invoker
//!
//! Runs one end-to-end sentiment request: local precondition checks, a single
//! POST to the classifier, then normalization of the reply. Every failure is
//! returned as a [`SentimentError`]; [`SentimentAnalyzer::analyze_response`]
//! converts the outcome into the tagged [`AnalysisResponse`] the form expects.
//!
//! ```rust,ignore
//! use sentiment_lens::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::builder().api_key_from_env().build()?;
//! let response = analyzer.analyze_response("I love this!").await;
//! if let Some(result) = response.result {
//!     println!("{result}");
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use crate::config::{AnalyzerConfig, HttpConfig};
use crate::defaults;
use crate::error::SentimentError;
use crate::normalizer::{NormalizationPolicy, normalize_body};
use crate::transport::{
    ReqwestTransport, SentimentTransport, TransportRequest, build_http_client,
};
use crate::types::{AnalysisResponse, SentimentResult};
use crate::validation::check_text;

/// Client for the hosted sentiment classifier.
///
/// Holds no per-request state; concurrent calls are independent.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    config: AnalyzerConfig,
    transport: Arc<dyn SentimentTransport>,
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SentimentAnalyzer {
    pub fn builder() -> SentimentAnalyzerBuilder {
        SentimentAnalyzerBuilder::default()
    }

    /// Create an analyzer with the default `reqwest` transport.
    pub fn new(config: AnalyzerConfig) -> Result<Self, SentimentError> {
        SentimentAnalyzerBuilder::from_config(config).build()
    }

    /// Create an analyzer with a custom transport.
    pub fn with_transport(
        config: AnalyzerConfig,
        transport: Arc<dyn SentimentTransport>,
    ) -> Result<Self, SentimentError> {
        SentimentAnalyzerBuilder::from_config(config)
            .fetch(transport)
            .build()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `text` with the configured credential.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        self.analyze_with_key(text, self.config.api_key.as_ref())
            .await
    }

    /// Analyze `text` with an explicitly supplied credential.
    #[tracing::instrument(
        name = "sentiment.analyze",
        skip(self, text, api_key),
        fields(text_len = text.chars().count(), policy = self.config.policy.as_str())
    )]
    pub async fn analyze_with_key(
        &self,
        text: &str,
        api_key: Option<&SecretString>,
    ) -> Result<SentimentResult, SentimentError> {
        check_text(text)?;

        let api_key = api_key
            .filter(|k| !k.expose_secret().trim().is_empty())
            .ok_or(SentimentError::MissingCredential)?;

        let request = build_request(&self.config.endpoint, api_key, text)?;
        tracing::debug!(endpoint = %request.url, "Sending sentiment request");

        let response = self.transport.execute_json(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Sentiment request failed");
            e
        })?;

        if !response.is_success() {
            let err =
                SentimentError::from_status(response.status, extract_error_detail(&response.body));
            tracing::warn!(status = response.status, error = %err, "Classifier returned an error");
            return Err(err);
        }

        let result = normalize_body(&response.body, self.config.policy)?;
        tracing::info!(
            label = %result.label(),
            score = result.score(),
            "Sentiment analysis completed"
        );
        Ok(result)
    }

    /// Analyze `text` and return the tagged success/failure shape.
    ///
    /// Never fails: every error becomes `{success: false, error}`.
    pub async fn analyze_response(&self, text: &str) -> AnalysisResponse {
        let result = self.analyze(text).await;
        if let Err(e) = &result {
            tracing::error!(kind = ?e.kind(), error = %e, "Sentiment analysis failed");
        }
        result.into()
    }
}

/// One-shot analysis with configuration read from the environment.
///
/// The environment is read on every call, so a rotated `HUGGING_FACE_API_KEY`
/// takes effect without rebuilding anything.
pub async fn analyze_sentiment(text: &str) -> AnalysisResponse {
    match AnalyzerConfig::from_env().and_then(SentimentAnalyzer::new) {
        Ok(analyzer) => analyzer.analyze_response(text).await,
        Err(e) => {
            tracing::error!(error = %e, "Sentiment analyzer configuration is invalid");
            AnalysisResponse::failure(e.to_string())
        }
    }
}

/// Build the classifier request: `{"inputs": text}` with bearer auth.
pub fn build_request(
    endpoint: &str,
    api_key: &SecretString,
    text: &str,
) -> Result<TransportRequest, SentimentError> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
        .map_err(|e| SentimentError::Configuration(format!("Invalid API key: {e}")))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(TransportRequest {
        url: endpoint.to_string(),
        headers,
        body: json!({ "inputs": text }),
    })
}

/// Pull the upstream error detail out of an error body.
///
/// Understands the inference API's `{"error": "..."}` and the common
/// `{"error": {"message": "..."}}` envelope.
pub fn extract_error_detail(body: &[u8]) -> Option<String> {
    let json: Value = serde_json::from_slice(body).ok()?;
    match json.get("error")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// Builder for [`SentimentAnalyzer`]
#[derive(Default)]
pub struct SentimentAnalyzerBuilder {
    config: AnalyzerConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn SentimentTransport>>,
}

impl SentimentAnalyzerBuilder {
    pub fn from_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_api_key(api_key);
        self
    }

    /// Fill the API key from `HUGGING_FACE_API_KEY` unless one was set explicitly.
    pub fn api_key_from_env(mut self) -> Self {
        if self.config.api_key.is_none()
            && let Ok(key) = std::env::var(defaults::env::API_KEY)
            && !key.trim().is_empty()
        {
            self.config.api_key = Some(SecretString::from(key));
        }
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn policy(mut self, policy: NormalizationPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.config.http_config = http_config;
        self
    }

    /// Use a preconfigured `reqwest::Client` instead of building one from `HttpConfig`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the HTTP transport entirely.
    pub fn fetch(mut self, transport: Arc<dyn SentimentTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the analyzer. A missing API key is not an error here.
    pub fn build(self) -> Result<SentimentAnalyzer, SentimentError> {
        self.config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let client = match self.http_client {
                    Some(client) => client,
                    None => build_http_client(&self.config.http_config)?,
                };
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(SentimentAnalyzer {
            config: self.config,
            transport,
        })
    }
}
