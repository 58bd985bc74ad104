mod controller;
mod gate;
mod state;
mod transcript;

pub use controller::{Phase, SessionController, SubmitOutcome, BACKEND_ERROR_TEXT};
pub use gate::ReportGate;
pub use state::SessionState;
pub use transcript::TranscriptStore;
