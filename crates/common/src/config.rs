//! Application configuration.
//!
//! Everything here is validated once at startup; a config that passes
//! [`AppConfig::validate`] never fails the frame loop later.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HandResult, HandstreamError};

/// Number of hand-label slots tracked by the engine (left and right).
pub const HAND_SLOTS: usize = 2;

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Classification and smoothing settings.
    pub engine: EngineConfig,

    /// Output sinks, in dispatch order.
    pub sinks: Vec<SinkSpec>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Engine tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of detected hands processed per frame.
    pub max_hands: usize,

    /// Window length for both the stability vote and the swipe classifier.
    #[serde(alias = "history_size")]
    pub buffer_size: usize,

    /// Minimum wrist displacement (normalized units) across the window for a swipe.
    pub gesture_threshold: f64,

    /// Process every Nth frame.
    pub frame_skip: u32,
}

/// One configured output sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SinkSpec {
    /// JSON line per event on stdout.
    Stdout {
        #[serde(default)]
        always_consume: bool,
    },

    /// POST each event as JSON.
    Http {
        url: String,
        #[serde(default = "default_http_timeout_ms")]
        timeout_ms: u64,
        #[serde(default)]
        always_consume: bool,
    },

    /// Append-only JSONL event log.
    Jsonl {
        path: PathBuf,
        #[serde(default)]
        always_consume: bool,
    },
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "handstream_engine=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            sinks: vec![SinkSpec::Stdout {
                always_consume: false,
            }],
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_hands: HAND_SLOTS,
            buffer_size: 5,
            gesture_threshold: 0.1,
            frame_skip: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

fn default_http_timeout_ms() -> u64 {
    2_000
}

impl SinkSpec {
    /// Short name used in logs and sink errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stdout { .. } => "stdout",
            Self::Http { .. } => "http",
            Self::Jsonl { .. } => "jsonl",
        }
    }

    pub fn always_consume(&self) -> bool {
        match self {
            Self::Stdout { always_consume }
            | Self::Http { always_consume, .. }
            | Self::Jsonl { always_consume, .. } => *always_consume,
        }
    }

    fn validate(&self) -> HandResult<()> {
        match self {
            Self::Stdout { .. } => Ok(()),
            Self::Http {
                url, timeout_ms, ..
            } => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(HandstreamError::config("http sink requires a url"));
                }
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(HandstreamError::config(format!(
                        "http sink url must start with http:// or https:// (got {url:?})"
                    )));
                }
                if *timeout_ms == 0 {
                    return Err(HandstreamError::config(
                        "http sink timeout_ms must be greater than zero",
                    ));
                }
                Ok(())
            }
            Self::Jsonl { path, .. } => {
                if path.as_os_str().is_empty() {
                    return Err(HandstreamError::config("jsonl sink requires a path"));
                }
                Ok(())
            }
        }
    }
}

impl EngineConfig {
    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> HandResult<()> {
        if self.buffer_size == 0 {
            return Err(HandstreamError::config("buffer_size must be at least 1"));
        }
        if self.frame_skip == 0 {
            return Err(HandstreamError::config("frame_skip must be at least 1"));
        }
        if self.max_hands == 0 {
            return Err(HandstreamError::config("max_hands must be at least 1"));
        }
        if !self.gesture_threshold.is_finite() || self.gesture_threshold < 0.0 {
            return Err(HandstreamError::config(format!(
                "gesture_threshold must be a non-negative number (got {})",
                self.gesture_threshold
            )));
        }
        if self.max_hands > HAND_SLOTS {
            tracing::warn!(
                max_hands = self.max_hands,
                "More hands than label slots; hands sharing a label will share history"
            );
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults
    /// only when no file exists there.
    pub fn load() -> HandResult<Self> {
        Self::load_or_default(&config_file_path())
    }

    /// Load `path` if it exists, otherwise return defaults. A file that
    /// exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> HandResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path).map_err(|e| {
            HandstreamError::config(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Load config from an explicit path. Unlike [`AppConfig::load`], any
    /// failure is reported to the caller.
    pub fn load_from(path: &Path) -> HandResult<Self> {
        if !path.exists() {
            return Err(HandstreamError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Validate the whole configuration before the frame loop starts.
    pub fn validate(&self) -> HandResult<()> {
        self.engine.validate()?;
        if self.sinks.is_empty() {
            return Err(HandstreamError::config("at least one sink must be configured"));
        }
        for sink in &self.sinks {
            sink.validate()?;
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("handstream").join("config.json")
}
