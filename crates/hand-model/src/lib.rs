//! Handstream Hand Model
//!
//! Defines the core data contracts shared by the classifier, the engine,
//! and every sink:
//! - **Landmarks:** 21 normalized points per detected hand plus its label
//! - **Fingers:** the five-slot extension vector and its wire form
//! - **Gestures:** swipe directions and static pose names
//! - **Events:** per-frame hand states and their JSON representation
//! - **Recordings:** JSONL landmark captures used for replay
//!
//! All coordinates are normalized to `[0.0, 1.0]` relative to the image,
//! with `z` relative to the wrist depth.

pub mod error;
pub mod event;
pub mod fingers;
pub mod gesture;
pub mod landmarks;
pub mod recording;
pub mod synthetic;

pub use error::*;
pub use event::*;
pub use fingers::*;
pub use gesture::*;
pub use landmarks::*;
pub use recording::*;
