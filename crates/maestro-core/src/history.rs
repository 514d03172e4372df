//! In-session history of generated prompt documents.

use serde::{Deserialize, Serialize};

use crate::state::SelectionState;

/// Character cap for generated history titles.
pub const TITLE_LIMIT: usize = 30;

/// One generated document kept for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Short display title derived from genre and topic.
    pub title: String,
    /// The full serialized document.
    pub content: String,
    /// Caller-supplied creation timestamp; opaque to the core.
    pub timestamp: String,
}

/// Session-owned history, most recent first. Dropped with the session;
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Records a freshly generated document at the front.
    pub fn record(
        &mut self,
        state: &SelectionState,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) {
        self.entries.insert(
            0,
            HistoryEntry {
                title: title_for(state),
                content: content.into(),
                timestamp: timestamp.into(),
            },
        );
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Removes and returns the entry at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<HistoryEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// "<genre> - <topic>", truncated to [`TITLE_LIMIT`] characters on a char
/// boundary.
fn title_for(state: &SelectionState) -> String {
    let full = format!("{} - {}", state.genre, state.topic);
    match full.char_indices().nth(TITLE_LIMIT) {
        Some((byte_index, _)) => full[..byte_index].to_string(),
        None => full,
    }
}
