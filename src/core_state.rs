//! Session context shared by every transport.
//!
//! `CoreState` owns the record store and the session's search history
//! and log. A single `Mutex` serializes user actions, so each action
//! either fully applies or leaves the session untouched.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::intake::{self, AddConfirmation, IntakeError, PatientForm};
use crate::reporting::{self, CsvExport};
use crate::search::{self, SearchError, SearchOutcome};
use crate::session::SessionState;
use crate::store::{PatientCounts, RecordStore, StoreError};

// ═══════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════

/// Everything that lives for one session: the patient table plus
/// the search history and log.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub store: RecordStore,
    pub searches: SessionState,
}

impl Session {
    /// A fresh session over the seeded record store.
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            store: RecordStore::seeded(),
            searches: SessionState::new(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

/// Wrapped in `Arc` at startup and handed to the API layer.
pub struct CoreState {
    session: Mutex<Session>,
}

impl CoreState {
    /// Create a CoreState with a freshly seeded session.
    pub fn new() -> Self {
        let session = Session::start();
        tracing::info!(session_id = %session.id, "Session started");
        Self {
            session: Mutex::new(session),
        }
    }

    /// Acquire the session for the duration of one action.
    pub fn lock_session(&self) -> Result<MutexGuard<'_, Session>, CoreError> {
        self.session.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Drop the current session and start over from the seed records.
    pub fn restart(&self) -> Result<Uuid, CoreError> {
        let mut guard = self.lock_session()?;
        let previous = guard.id;
        *guard = Session::start();
        tracing::info!(%previous, session_id = %guard.id, "Session restarted");
        Ok(guard.id)
    }

    // ── Actions ─────────────────────────────────────────────

    pub fn search(&self, raw_input: &str) -> Result<SearchOutcome, CoreError> {
        let mut guard = self.lock_session()?;
        let Session {
            store, searches, ..
        } = &mut *guard;
        Ok(search::search(store, searches, raw_input)?)
    }

    pub fn add_patient(&self, form: PatientForm) -> Result<AddConfirmation, CoreError> {
        let mut guard = self.lock_session()?;
        Ok(intake::add_patient(&mut guard.store, form)?)
    }

    pub fn clear_history(&self) -> Result<usize, CoreError> {
        Ok(self.lock_session()?.searches.clear_history())
    }

    pub fn clear_log(&self) -> Result<usize, CoreError> {
        Ok(self.lock_session()?.searches.clear_log())
    }

    // ── Reads ───────────────────────────────────────────────

    pub fn counts(&self) -> Result<PatientCounts, CoreError> {
        Ok(self.lock_session()?.store.count())
    }

    /// The full table as a CSV download payload.
    pub fn export_csv(&self) -> Result<CsvExport, CoreError> {
        Ok(reporting::render_csv(&self.lock_session()?.store)?)
    }

    pub fn session_id(&self) -> Result<Uuid, CoreError> {
        Ok(self.lock_session()?.id)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatientStatus;

    fn zoe() -> PatientForm {
        PatientForm {
            patient_id: "P1006".into(),
            name: "Zoe".into(),
            age: 28,
            disease: "Flu".into(),
            doctor: "Dr. X".into(),
            room: "110A".into(),
            status: PatientStatus::Admitted,
        }
    }

    #[test]
    fn new_state_is_seeded() {
        let state = CoreState::new();
        assert_eq!(state.counts().unwrap().total, 5);
        assert!(state.lock_session().unwrap().searches.history().is_empty());
    }

    #[test]
    fn end_to_end_add_then_search() {
        let state = CoreState::new();
        let confirmation = state.add_patient(zoe()).unwrap();
        assert_eq!(confirmation.name, "Zoe");

        let counts = state.counts().unwrap();
        assert_eq!(counts.total, 6);
        assert_eq!(counts.admitted, 4);

        match state.search("p1006").unwrap() {
            SearchOutcome::Found(record) => assert_eq!(record.name, "Zoe"),
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn empty_search_surfaces_search_error() {
        let state = CoreState::new();
        let err = state.search("  ").unwrap_err();
        assert!(matches!(err, CoreError::Search(SearchError::EmptyInput)));
        assert!(state.lock_session().unwrap().searches.log().is_empty());
    }

    #[test]
    fn duplicate_add_surfaces_intake_error() {
        let state = CoreState::new();
        let form = PatientForm {
            patient_id: "p1001".into(),
            ..zoe()
        };
        let err = state.add_patient(form).unwrap_err();
        assert!(matches!(err, CoreError::Intake(IntakeError::DuplicateId(_))));
        assert_eq!(state.counts().unwrap().total, 5);
    }

    #[test]
    fn clears_are_independent() {
        let state = CoreState::new();
        state.search("P1001").unwrap();
        state.search("P9999").unwrap();
        assert_eq!(state.clear_history().unwrap(), 2);
        assert_eq!(state.clear_history().unwrap(), 0);
        assert_eq!(state.lock_session().unwrap().searches.log().len(), 2);
        assert_eq!(state.clear_log().unwrap(), 2);
    }

    #[test]
    fn restart_reseeds_and_clears() {
        let state = CoreState::new();
        let first = state.session_id().unwrap();
        state.add_patient(zoe()).unwrap();
        state.search("P1006").unwrap();

        let second = state.restart().unwrap();
        assert_ne!(first, second);
        let session = state.lock_session().unwrap();
        assert_eq!(session.store.len(), 5);
        assert!(session.store.find("P1006").is_none());
        assert!(session.searches.history().is_empty());
        assert!(session.searches.log().is_empty());
    }

    #[test]
    fn export_has_row_per_record() {
        let state = CoreState::new();
        state.add_patient(zoe()).unwrap();
        let export = state.export_csv().unwrap();
        assert_eq!(export.filename, "patient_records.csv");
        let csv = String::from_utf8(export.body).unwrap();
        assert_eq!(csv.lines().count(), 7);
        assert!(csv.lines().last().unwrap().starts_with("P1006,Zoe,28"));
    }
}
