use crate::gate::ReportGate;
use crate::transcript::TranscriptStore;
use moot_core::SessionId;

fn new_session_id() -> SessionId {
    format!("ses_{}", ulid::Ulid::new().to_string().to_lowercase())
}

/// All mutable state of one session: the transcript, the report gate, and
/// the most recently received compiled-report source.
///
/// An explicit object owned by one controller instance — collaborators get
/// a handle, never shared statics, so multiple sessions can coexist.
/// Nothing here is persisted; the state dies with the session.
#[derive(Debug)]
pub struct SessionState {
    pub session_id: SessionId,
    pub transcript: TranscriptStore,
    pub gate: ReportGate,
    /// Side-channel report source from the latest fold. Textual or
    /// structured, per whatever the backend sent. Never rendered as a turn.
    pub pending_report: Option<serde_json::Value>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: new_session_id(),
            transcript: TranscriptStore::new(),
            gate: ReportGate::new(),
            pending_report: None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
