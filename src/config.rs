//! Analyzer and HTTP configuration.
//!
//! Configuration is plain data passed explicitly to the analyzer. The
//! environment is only consulted by [`AnalyzerConfig::from_env`], which
//! callers invoke once at startup (or per request, if they want key rotation
//! to take effect without a restart).

use secrecy::SecretString;
use std::collections::HashMap;
use std::time::Duration;

use crate::defaults;
use crate::error::SentimentError;
use crate::normalizer::NormalizationPolicy;

/// HTTP configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// Connection timeout; `None` keeps the transport default
    pub connect_timeout: Option<Duration>,
    /// Extra headers sent with every request (e.g. `X-Wait-For-Model`)
    pub headers: HashMap<String, String>,
    /// User agent
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            headers: HashMap::new(),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }
}

/// Builder for `HttpConfig`
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.config.connect_timeout = connect_timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.config.user_agent = user_agent.map(Into::into);
        self
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> HttpConfig {
        self.config
    }
}

/// Everything the analyzer needs to reach the classifier.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Classifier endpoint (full URL, POSTed to directly)
    pub endpoint: String,
    /// Bearer token; absence is reported per call as `MissingCredential`
    pub api_key: Option<SecretString>,
    /// How loosely the classifier's reply is interpreted
    pub policy: NormalizationPolicy,
    pub http_config: HttpConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::api::ENDPOINT.to_string(),
            api_key: None,
            policy: NormalizationPolicy::default(),
            http_config: HttpConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration with the given API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `HUGGING_FACE_API_KEY`, `SENTIMENT_API_URL` and
    /// `SENTIMENT_NORMALIZATION_POLICY`. Only the policy can make this fail.
    pub fn from_env() -> Result<Self, SentimentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SentimentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup(defaults::env::API_KEY).filter(|k| !k.trim().is_empty()) {
            config.api_key = Some(SecretString::from(key));
        }
        if let Some(endpoint) = lookup(defaults::env::API_URL).filter(|u| !u.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(policy) = lookup(defaults::env::POLICY) {
            config.policy = policy.parse()?;
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_policy(mut self, policy: NormalizationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.endpoint.trim().is_empty() {
            return Err(SentimentError::Configuration(
                "Endpoint URL cannot be empty".to_string(),
            ));
        }

        reqwest::Url::parse(&self.endpoint).map_err(|e| {
            SentimentError::Configuration(format!("Invalid endpoint URL '{}': {e}", self.endpoint))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_point_at_hosted_model() {
        let config = AnalyzerConfig::default();
        assert!(config.endpoint.ends_with("distilbert-base-uncased-finetuned-sst-2-english"));
        assert!(config.api_key.is_none());
        assert_eq!(config.policy, NormalizationPolicy::Strict);
        assert!(config.http_config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lookup_reads_all_variables() {
        let config = AnalyzerConfig::from_lookup(lookup_from(&[
            ("HUGGING_FACE_API_KEY", "hf_test"),
            ("SENTIMENT_API_URL", "http://localhost:8080/classify"),
            ("SENTIMENT_NORMALIZATION_POLICY", "permissive"),
        ]))
        .unwrap();
        assert_eq!(
            config.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("hf_test".to_string())
        );
        assert_eq!(config.endpoint, "http://localhost:8080/classify");
        assert_eq!(config.policy, NormalizationPolicy::Permissive);
    }

    #[test]
    fn missing_or_blank_key_is_not_an_error() {
        let config = AnalyzerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.api_key.is_none());
        let config =
            AnalyzerConfig::from_lookup(lookup_from(&[("HUGGING_FACE_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let err = AnalyzerConfig::from_lookup(lookup_from(&[(
            "SENTIMENT_NORMALIZATION_POLICY",
            "lenient",
        )]))
        .unwrap_err();
        assert!(matches!(err, SentimentError::Configuration(_)));
    }

    #[test]
    fn validate_rejects_bad_endpoints() {
        assert!(AnalyzerConfig::default().with_endpoint("").validate().is_err());
        assert!(
            AnalyzerConfig::default()
                .with_endpoint("not a url")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AnalyzerConfig::new("hf_super_secret");
        assert!(!format!("{config:?}").contains("hf_super_secret"));
    }
}
