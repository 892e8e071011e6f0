//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; applications embedding it decide
//! where they go. These helpers install a `tracing-subscriber` stack scoped to
//! this crate's target, with optional JSON output and file logging.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sentiment_lens::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::defaults::env;

/// Errors raised while installing the subscriber
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLevel(String),

    #[error("Invalid log format: {0}. Valid options: text, json, json-compact")]
    InvalidFormat(String),

    #[error("Invalid log file path {}: {reason}", .path.display())]
    InvalidLogFile { path: PathBuf, reason: String },

    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON, one object per event
    Json,
    /// JSON with event fields flattened into the top-level object
    JsonCompact,
}

impl std::str::FromStr for OutputFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            _ => Err(TelemetryError::InvalidFormat(s.to_string())),
        }
    }
}

/// Configuration for tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write to stderr
    pub enable_console: bool,
    /// Also append to this file
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            enable_console: true,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Create a debug configuration
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }

    /// Create a production configuration: JSON to a file, warnings and up.
    pub fn production(log_file: PathBuf) -> Self {
        Self {
            log_level: tracing::Level::WARN,
            output_format: OutputFormat::Json,
            enable_console: false,
            log_file: Some(log_file),
        }
    }

    fn filter_directive(&self) -> String {
        let level = match self.log_level {
            tracing::Level::TRACE => "trace",
            tracing::Level::DEBUG => "debug",
            tracing::Level::INFO => "info",
            tracing::Level::WARN => "warn",
            tracing::Level::ERROR => "error",
        };
        format!("sentiment_lens={level}")
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    enable_console: Option<bool>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self> {
        let level = match level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => return Err(TelemetryError::InvalidLevel(level.to_string())),
        };
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn enable_console(mut self, enable: bool) -> Self {
        self.enable_console = Some(enable);
        self
    }

    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
            enable_console: self.enable_console.unwrap_or(true),
            log_file: self.log_file,
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn fmt_layer<W>(format: OutputFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(ansi);

    match format {
        OutputFormat::Text => layer.boxed(),
        OutputFormat::Json => layer
            .json()
            .with_thread_ids(true)
            .with_thread_names(true)
            .boxed(),
        OutputFormat::JsonCompact => layer
            .json()
            .flatten_event(true)
            .with_thread_ids(true)
            .boxed(),
    }
}

fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let invalid = |reason: String| TelemetryError::InvalidLogFile {
        path: path.to_path_buf(),
        reason,
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid("missing or non UTF-8 file name".to_string()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| invalid(e.to_string()))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize tracing subscriber with the given configuration
///
/// Returns the file writer's `WorkerGuard` when file logging is enabled; keep
/// it alive for as long as logs should be flushed. An already-installed
/// global subscriber is left in place and is not an error.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.enable_console {
        layers.push(fmt_layer(config.output_format, std::io::stderr, true));
    }

    let mut guard = None;
    if let Some(path) = &config.log_file {
        let (writer, g) = file_writer(path)?;
        layers.push(fmt_layer(config.output_format, writer, false));
        guard = Some(g);
    }

    match tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
    {
        Ok(()) => Ok(guard),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("already") {
                Ok(guard)
            } else {
                Err(TelemetryError::Init(msg))
            }
        }
    }
}

/// Initialize tracing subscriber with default configuration
pub fn init_default() -> Result<Option<WorkerGuard>> {
    init_subscriber(SubscriberConfig::default())
}

/// Initialize tracing subscriber for debugging
pub fn init_debug() -> Result<Option<WorkerGuard>> {
    init_subscriber(SubscriberConfig::debug())
}

/// Build a configuration from `SENTIMENT_LOG_LEVEL`, `SENTIMENT_LOG_FORMAT`
/// and `SENTIMENT_LOG_FILE`, using `lookup` to read each variable.
pub fn config_from_lookup<F>(lookup: F) -> Result<SubscriberConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = SubscriberConfig::builder();

    if let Some(level) = lookup(env::LOG_LEVEL) {
        builder = builder.log_level_str(&level)?;
    }
    if let Some(format) = lookup(env::LOG_FORMAT) {
        builder = builder.output_format(format.parse()?);
    }
    if let Some(file_path) = lookup(env::LOG_FILE) {
        builder = builder.log_file(PathBuf::from(file_path));
    }

    Ok(builder.build())
}

/// Initialize tracing subscriber from environment variables
pub fn init_from_env() -> Result<Option<WorkerGuard>> {
    init_subscriber(config_from_lookup(|key| std::env::var(key).ok())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = SubscriberConfig::builder().build();
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.enable_console);
        assert_eq!(config.filter_directive(), "sentiment_lens=info");
    }

    #[test]
    fn invalid_level_and_format() {
        assert!(matches!(
            SubscriberConfig::builder().log_level_str("loud"),
            Err(TelemetryError::InvalidLevel(_))
        ));
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(TelemetryError::InvalidFormat(_))
        ));
    }

    #[test]
    fn config_from_lookup_reads_variables() {
        let config = config_from_lookup(|key| match key {
            "SENTIMENT_LOG_LEVEL" => Some("DEBUG".to_string()),
            "SENTIMENT_LOG_FORMAT" => Some("json-compact".to_string()),
            "SENTIMENT_LOG_FILE" => Some("logs/sentiment.log".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.output_format, OutputFormat::JsonCompact);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/sentiment.log")));
    }

    #[test]
    fn unusable_log_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let config = SubscriberConfig::builder()
            .enable_console(false)
            .log_file(blocker.join("sentiment.log"))
            .build();

        match init_subscriber(config) {
            Err(TelemetryError::InvalidLogFile { path, .. }) => {
                assert_eq!(path, blocker.join("sentiment.log"));
            }
            other => panic!("unexpected: {:?}", other.map(|g| g.is_some())),
        }
    }

    #[test]
    fn log_path_without_file_name_is_an_error() {
        assert!(matches!(
            file_writer(Path::new("/")),
            Err(TelemetryError::InvalidLogFile { .. })
        ));
    }
}
