//! Session-scoped search history and timestamped search log.

use chrono::{NaiveDateTime, Timelike};

use crate::models::SearchLogEntry;

/// Ephemeral per-session containers. Both lists are append-only
/// and cleared independently.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: Vec<String>,
    log: Vec<SearchLogEntry>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one lookup in both the history and the log.
    pub fn record_search(&mut self, patient_id: &str, at: NaiveDateTime) {
        // Second precision
        let at = at.with_nanosecond(0).unwrap_or(at);
        self.history.push(patient_id.to_string());
        self.log.push(SearchLogEntry {
            patient_id: patient_id.to_string(),
            timestamp: at,
        });
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn log(&self) -> &[SearchLogEntry] {
        &self.log
    }

    /// Empty the history. Returns how many entries were dropped.
    pub fn clear_history(&mut self) -> usize {
        let cleared = self.history.len();
        self.history.clear();
        tracing::info!(cleared, "Search history cleared");
        cleared
    }

    /// Empty the log. Returns how many entries were dropped.
    pub fn clear_log(&mut self) -> usize {
        let cleared = self.log.len();
        self.log.clear();
        tracing::info!(cleared, "Search log cleared");
        cleared
    }
}
