//! Write a synthetic landmark recording.

use std::path::PathBuf;

use clap::ValueEnum;
use handstream_hand_model::recording::{serialize_recording, RecordedFrame, RecordingHeader};
use handstream_hand_model::synthetic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    PalmToFist,
    SwipeRight,
    TwoHands,
}

impl Scenario {
    fn name(&self) -> &'static str {
        match self {
            Self::PalmToFist => "palm-to-fist",
            Self::SwipeRight => "swipe-right",
            Self::TwoHands => "two-hands",
        }
    }

    fn frames(&self, frames: usize, fps: f64) -> Vec<RecordedFrame> {
        match self {
            Self::PalmToFist => synthetic::palm_to_fist(frames, fps),
            Self::SwipeRight => synthetic::swipe_right(frames, fps),
            Self::TwoHands => synthetic::two_hands(frames, fps),
        }
    }
}

pub fn run(output: PathBuf, scenario: Scenario, frames: usize, fps: f64) -> anyhow::Result<()> {
    if frames == 0 {
        anyhow::bail!("--frames must be at least 1");
    }

    let header = RecordingHeader {
        source: format!("synthetic:{}", scenario.name()),
        fps,
        ..Default::default()
    };
    let content = serialize_recording(&header, &scenario.frames(frames, fps))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output, content)?;

    tracing::info!(path = %output.display(), scenario = scenario.name(), frames, "Recording written");
    println!("Wrote {frames} frame(s) to {}", output.display());
    Ok(())
}
