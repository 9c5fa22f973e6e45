//! One JSON line per event on stdout or any writer.

use std::io::{self, Stdout, Write};

use handstream_common::error::{HandResult, HandstreamError};
use handstream_hand_model::event::HandEvent;

use super::Sink;

pub struct ConsoleSink<W: Write + Send> {
    writer: W,
    name: &'static str,
    always: bool,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
            name: "stdout",
            always: false,
        }
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "console",
            always: false,
        }
    }

    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn consume(&mut self, event: &HandEvent) -> HandResult<()> {
        let json = super::encode_event(self.name, event)?;
        writeln!(self.writer, "{json}")
            .and_then(|_| self.writer.flush())
            .map_err(|e| HandstreamError::sink(self.name, e.to_string()))
    }

    fn always_consume(&self) -> bool {
        self.always
    }

    fn close(&mut self) -> HandResult<()> {
        self.writer
            .flush()
            .map_err(|e| HandstreamError::sink(self.name, e.to_string()))
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handstream_hand_model::event::{Frame, HandState};
    use handstream_hand_model::fingers::FingerVector;
    use handstream_hand_model::gesture::Gesture;
    use handstream_hand_model::landmarks::{HandLabel, Landmarks};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn fist_event() -> HandEvent {
        let mut event = HandEvent::new(Frame::blank(0, 0));
        event.hands.push(HandState {
            label: HandLabel::Left,
            stable_fingers: FingerVector::FIST,
            gesture: Some(Gesture::pose("Fist")),
            landmarks: Landmarks::default(),
        });
        event
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.consume(&fist_event()).unwrap();
        sink.consume(&fist_event()).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"hands":[{"label":"left","fingers":[0,0,0,0,0],"gesture":"Fist"}]}"#
        );
    }

    #[test]
    fn test_write_failure_is_a_sink_error() {
        let mut sink = ConsoleSink::new(BrokenPipe);
        let err = sink.consume(&fist_event()).unwrap_err();
        assert!(err.is_recoverable());
    }
}
