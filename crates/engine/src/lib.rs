//! Handstream Engine
//!
//! Runs the per-frame loop: pulls detections from a landmark source,
//! stabilizes each hand, decides whether anything changed, and fans the
//! resulting event out to sinks. Uses pluggable sources and sinks:
//!
//! - **Sources:** recorded landmark replays, scripted stubs, or any external
//!   detector behind [`LandmarkSource`]
//! - **Sinks:** stdout, HTTP webhooks, JSONL event logs, in-process channels
//!
//! Processing is single-threaded per frame. A failing sink is logged and
//! skipped; a failing source stops the loop.

pub mod engine;
pub mod sinks;
pub mod sources;

pub use engine::{EngineStats, FrameOutcome, HandEngine, HandSnapshot};
pub use sinks::{build_sinks, Sink};

use handstream_common::error::HandResult;
use handstream_hand_model::event::Frame;
use handstream_hand_model::recording::Detection;

/// Trait for hand-landmark detectors.
pub trait LandmarkSource: Send {
    /// Detect hands in a frame. An empty vec means no hands; an error means
    /// the source itself is unusable.
    fn detect(&mut self, frame: &Frame) -> HandResult<Vec<Detection>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}
