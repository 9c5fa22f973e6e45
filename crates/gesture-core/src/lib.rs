//! Handstream Gesture Core
//!
//! Turns raw per-frame landmarks into stable hand semantics:
//! - **Finger Classification:** which fingers are extended in one frame
//! - **Stability Filter:** majority vote over a sliding window per hand
//! - **Swipe Classifier:** directional wrist motion across the same window
//! - **Gesture Naming:** static pose names for stable finger vectors
//!
//! This crate is pure computation with no I/O.
//! All inputs are data; all outputs are data.

pub mod classify;
pub mod history;
pub mod naming;
pub mod stability;
pub mod swipe;

pub use classify::classify_fingers;
pub use history::HistoryBuffer;
pub use naming::{name_fingers, pose_gesture};
pub use stability::StabilityFilter;
pub use swipe::SwipeClassifier;
