//! Error types shared across Handstream crates.

use std::path::PathBuf;

/// Top-level error type for Handstream operations.
#[derive(Debug, thiserror::Error)]
pub enum HandstreamError {
    /// The landmark source could not produce detections for a frame.
    #[error("Detection error: {message}")]
    Detection { message: String },

    /// A sink failed to consume or close. Recoverable at the dispatch boundary.
    #[error("Sink '{sink}' failed: {message}")]
    Sink { sink: String, message: String },

    #[error("Recording error: {message}")]
    Recording { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using HandstreamError.
pub type HandResult<T> = Result<T, HandstreamError>;

impl HandstreamError {
    pub fn detection(msg: impl Into<String>) -> Self {
        Self::Detection {
            message: msg.into(),
        }
    }

    pub fn sink(sink: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Sink {
            sink: sink.into(),
            message: msg.into(),
        }
    }

    pub fn recording(msg: impl Into<String>) -> Self {
        Self::Recording {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether the frame loop can continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Sink { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_errors_are_recoverable() {
        let err = HandstreamError::sink("http", "connection refused");
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Sink 'http' failed: connection refused");
    }

    #[test]
    fn test_detection_errors_are_fatal() {
        assert!(!HandstreamError::detection("camera unplugged").is_recoverable());
        assert!(!HandstreamError::config("buffer_size must be >= 1").is_recoverable());
    }
}
