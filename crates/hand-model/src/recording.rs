//! Landmark recordings.
//!
//! A recording is JSONL: an optional `# {header}` first line, then one
//! [`RecordedFrame`] per line. It captures exactly what a landmark detector
//! returned, so a stream can be replayed without a camera.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::event::TimestampNs;
use crate::landmarks::{HandLabel, Landmarks};

pub const RECORDING_SCHEMA_VERSION: &str = "1.0";

/// One detected hand as reported by a landmark detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: HandLabel,
    pub landmarks: Landmarks,
}

impl Detection {
    pub fn new(label: HandLabel, landmarks: Landmarks) -> Self {
        Self { label, landmarks }
    }
}

/// Detections for a single captured frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    #[serde(default)]
    pub hands: Vec<Detection>,
}

/// Metadata written as the first (comment) line of a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingHeader {
    pub schema_version: String,

    /// Free-form description of what produced the recording.
    pub source: String,

    /// Nominal capture rate.
    pub fps: f64,
}

impl Default for RecordingHeader {
    fn default() -> Self {
        Self {
            schema_version: RECORDING_SCHEMA_VERSION.to_string(),
            source: "unknown".to_string(),
            fps: 30.0,
        }
    }
}

/// A parsed recording.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recording {
    pub header: Option<RecordingHeader>,
    pub frames: Vec<RecordedFrame>,
}

impl Recording {
    /// Number of frames with at least one detected hand.
    pub fn frames_with_hands(&self) -> usize {
        self.frames.iter().filter(|f| !f.hands.is_empty()).count()
    }

    /// Whether timestamps never go backwards.
    pub fn is_monotonic(&self) -> bool {
        self.frames
            .windows(2)
            .all(|pair| pair[1].timestamp_ns >= pair[0].timestamp_ns)
    }
}

/// Parse a JSONL recording. Errors carry the 1-based line number.
pub fn parse_recording(jsonl: &str) -> Result<Recording, ModelError> {
    let mut recording = Recording::default();

    for (idx, raw) in jsonl.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            // Only the leading comment is a header; later comments are notes.
            if idx == 0 {
                recording.header = serde_json::from_str(comment.trim()).ok();
            }
            continue;
        }
        let frame = serde_json::from_str(line)
            .map_err(|source| ModelError::RecordingLine {
                line: idx + 1,
                source,
            })?;
        recording.frames.push(frame);
    }

    Ok(recording)
}

/// Serialize a recording to JSONL.
pub fn serialize_recording(
    header: &RecordingHeader,
    frames: &[RecordedFrame],
) -> Result<String, serde_json::Error> {
    let mut output = format!("# {}\n", serde_json::to_string(header)?);
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
