//! Session-scoped history and favorites.
//!
//! A [`Session`] is created at session start, passed explicitly to every
//! operation, and dropped at session end. Nothing here is shared across
//! sessions or persisted locally.

use chrono::{DateTime, Utc};

/// Number of history entries exposed for display.
pub const RECENT_DISPLAY_LIMIT: usize = 10;

/// One generated prompt recorded in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Per-session context holding history and favorites.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
    favorites: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generated prompt to the history. Insertion order is
    /// chronological; the full sequence is retained unbounded.
    pub fn record(&mut self, text: impl Into<String>) -> &HistoryEntry {
        self.history.push(HistoryEntry { text: text.into(), created_at: Utc::now() });
        self.history.last().expect("history cannot be empty after push")
    }

    /// The most recent entries in display order (most recent first), capped
    /// to [`RECENT_DISPLAY_LIMIT`].
    pub fn recent(&self) -> Vec<&HistoryEntry> {
        self.history.iter().rev().take(RECENT_DISPLAY_LIMIT).collect()
    }

    /// Full chronological history.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Copy the entry at `index` in the [`Self::recent`] view into the
    /// favorites list. No deduplication, no capacity bound, no removal.
    pub fn favorite_recent(&mut self, index: usize) -> Option<&HistoryEntry> {
        let entry = self.recent().get(index).copied()?.clone();
        self.favorites.push(entry);
        self.favorites.last()
    }

    pub fn favorites(&self) -> &[HistoryEntry] {
        &self.favorites
    }
}
