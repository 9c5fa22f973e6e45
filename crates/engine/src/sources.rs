//! Landmark sources that need no camera or model.

use std::path::Path;

use handstream_common::error::{HandResult, HandstreamError};
use handstream_hand_model::event::Frame;
use handstream_hand_model::recording::{parse_recording, Detection, Recording};

use crate::LandmarkSource;

/// Returns scripted detections in order, then nothing.
///
/// Each call to [`LandmarkSource::detect`] consumes one entry regardless of
/// the frame passed in.
pub struct StubSource {
    script: std::vec::IntoIter<Vec<Detection>>,
}

impl StubSource {
    pub fn new(script: Vec<Vec<Detection>>) -> Self {
        Self {
            script: script.into_iter(),
        }
    }

    /// A source that never sees a hand.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl LandmarkSource for StubSource {
    fn detect(&mut self, _frame: &Frame) -> HandResult<Vec<Detection>> {
        Ok(self.script.next().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Replays a landmark recording, indexed by frame sequence number.
pub struct ReplaySource {
    recording: Recording,
    name: String,
}

impl ReplaySource {
    pub fn new(recording: Recording) -> Self {
        let name = recording
            .header
            .as_ref()
            .map(|h| format!("replay:{}", h.source))
            .unwrap_or_else(|| "replay".to_string());
        Self { recording, name }
    }

    /// Load and parse a recording file.
    pub fn from_path(path: &Path) -> HandResult<Self> {
        if !path.exists() {
            return Err(HandstreamError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let recording = parse_recording(&content)
            .map_err(|e| HandstreamError::recording(format!("{}: {e}", path.display())))?;

        tracing::debug!(
            path = %path.display(),
            frames = recording.frames.len(),
            "Recording loaded"
        );
        Ok(Self::new(recording))
    }

    /// One blank frame per recorded frame, carrying its timestamp.
    pub fn frames(&self) -> Vec<Frame> {
        self.recording
            .frames
            .iter()
            .enumerate()
            .map(|(i, recorded)| Frame::blank(i as u64, recorded.timestamp_ns))
            .collect()
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }
}

impl LandmarkSource for ReplaySource {
    fn detect(&mut self, frame: &Frame) -> HandResult<Vec<Detection>> {
        usize::try_from(frame.sequence)
            .ok()
            .and_then(|idx| self.recording.frames.get(idx))
            .map(|recorded| recorded.hands.clone())
            .ok_or_else(|| {
                HandstreamError::detection(format!(
                    "frame {} is past the end of the recording ({} frames)",
                    frame.sequence,
                    self.recording.frames.len()
                ))
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handstream_hand_model::fingers::FingerVector;
    use handstream_hand_model::landmarks::HandLabel;
    use handstream_hand_model::recording::{serialize_recording, RecordingHeader};
    use handstream_hand_model::synthetic;

    #[test]
    fn test_stub_source_runs_dry() {
        let hand = synthetic::detection(FingerVector::FIST, HandLabel::Left, (0.4, 0.7));
        let mut source = StubSource::new(vec![vec![hand]]);
        let frame = Frame::blank(0, 0);
        assert_eq!(source.detect(&frame).unwrap().len(), 1);
        assert!(source.detect(&frame).unwrap().is_empty());
    }

    #[test]
    fn test_replay_source_indexes_by_sequence() {
        let recording = Recording {
            header: None,
            frames: synthetic::two_hands(10, 30.0),
        };
        let mut source = ReplaySource::new(recording);
        let frames = source.frames();
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[3].timestamp_ns, synthetic::timestamp_for(3, 30.0));

        assert_eq!(source.detect(&frames[4]).unwrap().len(), 1);
        assert_eq!(source.detect(&frames[3]).unwrap().len(), 2);
        assert!(source.detect(&Frame::blank(10, 0)).is_err());
    }

    #[test]
    fn test_replay_source_from_file() {
        let dir = std::env::temp_dir().join("handstream_test_replay_source");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let header = RecordingHeader {
            source: "palm".to_string(),
            ..Default::default()
        };
        let path = dir.join("palm.jsonl");
        let content = serialize_recording(&header, &synthetic::palm_to_fist(4, 30.0)).unwrap();
        std::fs::write(&path, content).unwrap();

        let source = ReplaySource::from_path(&path).unwrap();
        assert_eq!(source.name(), "replay:palm");
        assert_eq!(source.recording().frames.len(), 4);

        assert!(matches!(
            ReplaySource::from_path(&dir.join("missing.jsonl")),
            Err(HandstreamError::FileNotFound { .. })
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
