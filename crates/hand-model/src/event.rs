//! Hand-state events delivered to sinks.
//!
//! The wire form of an event is
//! `{"hands":[{"label":"left","fingers":[0,1,0,0,0],"gesture":"Pointing (Index)"}]}`.
//! Field names and the five-slot finger order are a compatibility surface.
//! Landmarks and the frame stay in process and are never serialized.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::fingers::FingerVector;
use crate::gesture::Gesture;
use crate::landmarks::{HandLabel, Landmarks};

/// Monotonic timestamp in nanoseconds since the stream started.
pub type TimestampNs = u64;

/// Raw pixels behind a frame. Never inspected by the core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Opaque reference to the image a set of detections came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Position of the frame in its stream, starting at zero.
    pub sequence: u64,
    pub timestamp_ns: TimestampNs,
    /// Shared so events can hand the frame to sinks without copying pixels.
    pub image: Option<Arc<FrameImage>>,
}

impl Frame {
    /// A frame with no pixel data, as produced by replayed recordings.
    pub fn blank(sequence: u64, timestamp_ns: TimestampNs) -> Self {
        Self {
            sequence,
            timestamp_ns,
            image: None,
        }
    }

    pub fn with_image(sequence: u64, timestamp_ns: TimestampNs, image: FrameImage) -> Self {
        Self {
            sequence,
            timestamp_ns,
            image: Some(Arc::new(image)),
        }
    }
}

/// Stabilized state of one hand within an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandState {
    pub label: HandLabel,

    /// Majority-vote finger vector.
    #[serde(rename = "fingers")]
    pub stable_fingers: FingerVector,

    /// Swipe if one fired this frame, otherwise the pose name.
    pub gesture: Option<Gesture>,

    /// Landmarks from the detection that produced this state.
    #[serde(skip)]
    pub landmarks: Landmarks,
}

/// Everything detected in one processed frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HandEvent {
    pub hands: Vec<HandState>,

    #[serde(skip)]
    pub frame: Frame,
}

impl HandEvent {
    pub fn new(frame: Frame) -> Self {
        Self {
            hands: Vec::new(),
            frame,
        }
    }

    /// State for a label, if that hand is present in this event.
    pub fn hand(&self, label: HandLabel) -> Option<&HandState> {
        self.hands.iter().find(|hand| hand.label == label)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Parse events from JSONL content (one JSON object per line).
pub fn parse_events(jsonl: &str) -> Result<Vec<HandEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize events to JSONL format.
pub fn serialize_events(events: &[HandEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}
