//! Event sinks.
//!
//! A sink receives an event when any hand changed state in that frame, or on
//! every processed frame if it asks to always consume. A failing sink never
//! stops the frame loop.

pub mod channel;
pub mod console;
pub mod http;
pub mod jsonl;

use std::time::Duration;

use handstream_common::config::{EngineConfig, SinkSpec};
use handstream_common::error::{HandResult, HandstreamError};
use handstream_hand_model::event::HandEvent;

pub use channel::ChannelSink;
pub use console::ConsoleSink;
pub use http::HttpSink;
pub use jsonl::JsonlSink;

/// Receiver of hand events.
pub trait Sink: Send {
    /// Handle one event. Errors are logged by the engine and skipped.
    fn consume(&mut self, event: &HandEvent) -> HandResult<()>;

    /// Receive every processed frame, not only frames with a state change.
    fn always_consume(&self) -> bool {
        false
    }

    /// Release resources. Called once when the engine shuts down.
    fn close(&mut self) -> HandResult<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Encode an event for a sink. Encoding failures are sink failures.
pub(crate) fn encode_event(sink: &str, event: &HandEvent) -> HandResult<String> {
    event.to_json().map_err(|e| encoding_error(sink, e))
}

fn encoding_error(sink: &str, err: serde_json::Error) -> HandstreamError {
    HandstreamError::sink(sink, format!("Failed to encode event: {err}"))
}

/// Build sinks from configuration, in order.
pub fn build_sinks(specs: &[SinkSpec], engine: &EngineConfig) -> HandResult<Vec<Box<dyn Sink>>> {
    let mut sinks: Vec<Box<dyn Sink>> = Vec::with_capacity(specs.len());
    for spec in specs {
        let sink: Box<dyn Sink> = match spec {
            SinkSpec::Stdout { always_consume } => {
                Box::new(ConsoleSink::stdout().always(*always_consume))
            }
            SinkSpec::Http {
                url,
                timeout_ms,
                always_consume,
            } => Box::new(
                HttpSink::new(url, Duration::from_millis(*timeout_ms))?.always(*always_consume),
            ),
            SinkSpec::Jsonl {
                path,
                always_consume,
            } => Box::new(JsonlSink::create(path.clone(), engine)?.always(*always_consume)),
        };
        tracing::debug!(kind = spec.kind(), "Sink built");
        sinks.push(sink);
    }
    Ok(sinks)
}
