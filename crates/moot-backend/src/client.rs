use std::time::Duration;

use serde_json::Value;

use moot_core::wire::{encode_turns, WireShape};
use moot_core::{MootError, Turn};

use crate::config::BackendConfig;

/// Seam between the session controller and the transport, so sessions can
/// be driven without a live backend.
pub trait BackendCall {
    /// One round trip: POST the transcript snapshot, return the parsed
    /// reply body. Single attempt — retries are the caller's problem and
    /// currently nobody's.
    fn consult(&self, turns: &[Turn]) -> Result<Value, MootError>;
}

/// Blocking HTTP client for the analyst backend.
pub struct BackendClient {
    agent: ureq::Agent,
    url: String,
    shape: WireShape,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .new_agent();
        Self {
            agent,
            url: config.url(),
            shape: config.wire_shape,
        }
    }
}

impl BackendCall for BackendClient {
    fn consult(&self, turns: &[Turn]) -> Result<Value, MootError> {
        let body = encode_turns(turns, self.shape);
        tracing::debug!(url = %self.url, turns = turns.len(), "posting transcript");

        let mut response = self
            .agent
            .post(&self.url)
            .header("Content-Type", "application/json")
            .send(body.to_string())
            .map_err(|e| MootError::NetworkFailure(e.to_string()))?;

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| MootError::NetworkFailure(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| MootError::MalformedReply(e.to_string()))
    }
}
