use thiserror::Error;

/// Errors surfaced by the session pipeline. None of these are fatal to a
/// session: the controller converts transport errors into a visible turn
/// and returns to `Idle`.
#[derive(Debug, Error)]
pub enum MootError {
    /// Compilation attempted before the backend signalled sufficiency,
    /// with no report source on hand, or inside the compile cooldown.
    #[error("report not eligible yet")]
    NotEligible,

    /// The request could not complete or returned a non-success status.
    #[error("backend request failed: {0}")]
    NetworkFailure(String),

    /// The response body was not parseable as the expected shape.
    #[error("backend reply unreadable: {0}")]
    MalformedReply(String),

    /// A backend call is already in flight.
    #[error("a submission is already awaiting a reply")]
    Busy,
}
