//! Append-only JSONL event log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use handstream_common::config::EngineConfig;
use handstream_common::error::{HandResult, HandstreamError};
use handstream_hand_model::event::HandEvent;
use serde::{Deserialize, Serialize};

use super::Sink;

pub const EVENT_LOG_SCHEMA_VERSION: &str = "1.0";

/// Events between forced flushes.
const FLUSH_EVERY: u64 = 100;

/// First line of an event log, written as a `# ` comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogHeader {
    pub schema_version: String,

    /// Wall-clock start time (RFC 3339).
    pub started_at: String,

    /// Engine settings the events were produced with.
    pub engine: EngineConfig,
}

pub struct JsonlSink {
    writer: BufWriter<File>,
    path: PathBuf,
    events_written: u64,
    always: bool,
}

impl JsonlSink {
    /// Create (or truncate) the log and write the header line.
    pub fn create(path: PathBuf, engine: &EngineConfig) -> HandResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        let mut writer = BufWriter::new(file);

        let header = EventLogHeader {
            schema_version: EVENT_LOG_SCHEMA_VERSION.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            engine: engine.clone(),
        };
        let header_json = serde_json::to_string(&header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| HandstreamError::sink("jsonl", format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            path,
            events_written: 0,
            always: false,
        })
    }

    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }

    pub fn flush(&mut self) -> HandResult<()> {
        self.writer
            .flush()
            .map_err(|e| HandstreamError::sink("jsonl", format!("Failed to flush events: {e}")))
    }

    pub fn events_written(&self) -> u64 {
        self.events_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for JsonlSink {
    fn consume(&mut self, event: &HandEvent) -> HandResult<()> {
        let json = super::encode_event("jsonl", event)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| HandstreamError::sink("jsonl", format!("Failed to write event: {e}")))?;
        self.events_written += 1;

        if self.events_written % FLUSH_EVERY == 0 {
            self.flush()?;
        }
        Ok(())
    }

    fn always_consume(&self) -> bool {
        self.always
    }

    fn close(&mut self) -> HandResult<()> {
        self.flush()?;
        tracing::debug!(
            path = %self.path.display(),
            events = self.events_written,
            "Event log closed"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "jsonl"
    }
}

impl Drop for JsonlSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
