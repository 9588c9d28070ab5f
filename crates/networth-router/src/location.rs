use crate::traits::LocationProvider;

/// Default number of retained history entries.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// In-memory fragment history with a cursor, modelled on browser session history.
///
/// Pushing discards every entry ahead of the cursor. Moving the cursor only
/// reports a change when the fragment actually differs, the same way a browser
/// raises a fragment-change notification only for a different hash.
#[derive(Debug, Clone)]
pub struct HistoryLocation {
    entries: Vec<String>,
    cursor: usize,
    limit: usize,
}

impl HistoryLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Cap the number of retained entries (at least one).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self.trim();
        self
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    fn trim(&mut self) {
        if self.entries.len() > self.limit {
            let overflow = self.entries.len() - self.limit;
            self.entries.drain(..overflow);
            self.cursor = self.cursor.saturating_sub(overflow);
        }
    }
}

impl Default for HistoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl LocationProvider for HistoryLocation {
    fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor = self.entries.len() - 1;
        self.trim();
    }

    fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let previous = self.cursor;
        self.cursor -= 1;
        self.entries[previous] != self.entries[self.cursor]
    }

    fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        let previous = self.cursor;
        self.cursor += 1;
        self.entries[previous] != self.entries[self.cursor]
    }
}
