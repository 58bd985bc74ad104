use time::OffsetDateTime;

use moot_backend::{fold, BackendCall, BackendConfig, FieldMap};
use moot_core::{MootError, Role, Turn};
use moot_report::Document;

use crate::state::SessionState;

/// Controller phase. `Awaiting` means a backend call is in flight; a second
/// submission is rejected until it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Awaiting,
}

/// What a `submit` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input: no turn, no request.
    Ignored,
    /// Round trip completed and the reply was folded in.
    Submitted,
    /// The backend call failed; an error turn was appended instead.
    BackendFailed,
}

/// Fixed user-visible content of the synthesized error turn.
pub const BACKEND_ERROR_TEXT: &str = "[Error communicating with backend]";

/// Cooldown between compilations (seconds).
const COMPILE_COOLDOWN_SECS: i64 = 10;

/// Read the effective cooldown, allowing `MOOT_COMPILE_COOLDOWN_SECS` override.
fn compile_cooldown_secs() -> i64 {
    std::env::var("MOOT_COMPILE_COOLDOWN_SECS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(COMPILE_COOLDOWN_SECS)
}

/// Orchestrates the round trip: append the user turn, call the backend,
/// fold the reply, and expose session state to whatever renders it.
///
/// Single-threaded by design — the blocking backend call and the compile
/// cooldown are the only suspension points, so turns land in submission
/// order with no locking.
pub struct SessionController {
    state: SessionState,
    phase: Phase,
    fields: FieldMap,
    reply_role: Role,
    last_compile: Option<OffsetDateTime>,
}

impl SessionController {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            state: SessionState::new(),
            phase: Phase::Idle,
            fields: config.fields.clone(),
            reply_role: config.reply_role(),
            last_compile: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turns appended since `mark`, for incremental rendering.
    pub fn turns_since(&self, mark: usize) -> Vec<Turn> {
        self.state.transcript.snapshot().split_off(mark.min(self.state.transcript.len()))
    }

    /// One submission cycle: `Idle → Awaiting → Idle`.
    ///
    /// Blank input is a no-op. A submission while `Awaiting` fails with
    /// `Busy`. Transport and parse failures are converted into a single
    /// synthesized error turn; the gate is left untouched and the session
    /// stays usable.
    pub fn submit(
        &mut self,
        input: &str,
        backend: &dyn BackendCall,
    ) -> Result<SubmitOutcome, MootError> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        if self.phase == Phase::Awaiting {
            return Err(MootError::Busy);
        }

        self.state.transcript.append(Turn::new(Role::User, prompt));
        self.phase = Phase::Awaiting;
        let snapshot = self.state.transcript.snapshot();
        let result = backend.consult(&snapshot);
        self.phase = Phase::Idle;

        match result {
            Ok(raw) => {
                let outcome = fold(&raw, &self.fields, &self.reply_role);
                for turn in outcome.turns {
                    self.state.transcript.append(turn);
                }
                if outcome.gate_update {
                    self.state.gate.open();
                }
                if let Some(source) = outcome.report_source {
                    self.state.pending_report = Some(source);
                }
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                tracing::warn!(session = %self.state.session_id, %err, "backend call failed");
                self.state
                    .transcript
                    .append(Turn::new(Role::System, BACKEND_ERROR_TEXT));
                Ok(SubmitOutcome::BackendFailed)
            }
        }
    }

    /// Compile the pending report source into a document.
    ///
    /// Refused with `NotEligible` while the gate is closed, while no report
    /// source has been received, or inside the cooldown window after a
    /// completed compilation. `now` supplies both the cooldown reference
    /// and the header date.
    pub fn compile(&mut self, now: OffsetDateTime) -> Result<Document, MootError> {
        if !self.state.gate.eligible() {
            return Err(MootError::NotEligible);
        }
        let Some(source) = &self.state.pending_report else {
            return Err(MootError::NotEligible);
        };
        if let Some(last) = self.last_compile {
            if (now - last).whole_seconds() < compile_cooldown_secs() {
                return Err(MootError::NotEligible);
            }
        }

        let document = moot_report::compile(source, now.date());
        self.last_compile = Some(now);
        Ok(document)
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
