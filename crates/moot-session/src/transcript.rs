use moot_core::Turn;

/// The append-only transcript. Single source of truth for the outbound
/// payload: turns are never edited, removed, or reordered.
#[derive(Debug, Default)]
pub struct TranscriptStore {
    turns: Vec<Turn>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Empty content is permitted (a visual no-op, still
    /// recorded). Never fails.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Current sequence by value. Later appends do not retroactively change
    /// a snapshot already taken — this is the exact outbound payload order.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// The most recently appended turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
