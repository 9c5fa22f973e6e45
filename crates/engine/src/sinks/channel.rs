//! Forward events to another thread over a channel.

use std::sync::mpsc::{self, Receiver, Sender};

use handstream_common::error::{HandResult, HandstreamError};
use handstream_hand_model::event::HandEvent;

use super::Sink;

/// Sends a clone of every event it receives. Always consumes by default,
/// so the receiver sees every processed frame.
pub struct ChannelSink {
    tx: Sender<HandEvent>,
    always: bool,
}

impl ChannelSink {
    pub fn new(tx: Sender<HandEvent>) -> Self {
        Self { tx, always: true }
    }

    /// A sink and the receiving end of its channel.
    pub fn pair() -> (Self, Receiver<HandEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }

    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }
}

impl Sink for ChannelSink {
    fn consume(&mut self, event: &HandEvent) -> HandResult<()> {
        self.tx
            .send(event.clone())
            .map_err(|_| HandstreamError::sink("channel", "receiver disconnected"))
    }

    fn always_consume(&self) -> bool {
        self.always
    }

    fn name(&self) -> &str {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_receiver_fails_consume() {
        let (mut sink, rx) = ChannelSink::pair();
        sink.consume(&HandEvent::default()).unwrap();
        assert_eq!(rx.try_recv().unwrap(), HandEvent::default());

        drop(rx);
        assert!(sink.consume(&HandEvent::default()).is_err());
    }
}
