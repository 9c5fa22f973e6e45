//! POST each event as JSON to an HTTP endpoint.

use std::time::Duration;

use handstream_common::error::{HandResult, HandstreamError};
use handstream_hand_model::event::HandEvent;
use reqwest::blocking::Client;

use super::Sink;

pub struct HttpSink {
    client: Client,
    url: String,
    always: bool,
}

impl HttpSink {
    /// Build a sink with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> HandResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HandstreamError::sink("http", format!("Failed to build client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
            always: false,
        })
    }

    pub fn always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Sink for HttpSink {
    /// Non-2xx responses count as failures.
    fn consume(&mut self, event: &HandEvent) -> HandResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(event)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| HandstreamError::sink("http", e.to_string()))?;

        tracing::trace!(url = %self.url, status = %response.status(), "Event posted");
        Ok(())
    }

    fn always_consume(&self) -> bool {
        self.always
    }

    fn name(&self) -> &str {
        "http"
    }
}
