/// Report eligibility. Opens when the backend signals the interaction is
/// sufficient for report generation; once open it stays open for the rest
/// of the session, even if a later reply omits the signal.
#[derive(Debug, Default)]
pub struct ReportGate {
    eligible: bool,
}

impl ReportGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eligible(&self) -> bool {
        self.eligible
    }

    /// Open the gate. There is deliberately no closing operation.
    pub fn open(&mut self) {
        self.eligible = true;
    }
}
