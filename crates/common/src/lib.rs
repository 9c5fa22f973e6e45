//! Handstream Common Utilities
//!
//! Shared infrastructure for all Handstream crates:
//! - Error types and result aliases
//! - Engine, sink, and logging configuration with startup validation
//! - Frame-skip throttling for the processing loop
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;
pub mod throttle;

pub use config::*;
pub use error::*;
pub use throttle::*;
