//! Model-level errors.

/// Errors raised while building or decoding model values.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("finger slot must be 0 or 1, got {value}")]
    FingerSlot { value: u8 },

    #[error("unknown hand label: {label:?}")]
    UnknownLabel { label: String },

    #[error("line {line}: {source}")]
    RecordingLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
