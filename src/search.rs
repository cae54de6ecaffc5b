//! Search service: patient lookup by identifier.
//!
//! Every non-empty attempt lands in the session history and the
//! timestamped log, whether or not a record matched.

use chrono::{Local, NaiveDateTime};

use crate::models::{normalize_id, PatientRecord};
use crate::session::SessionState;
use crate::store::RecordStore;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search input is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(PatientRecord),
    /// Carries the normalized identifier that missed.
    NotFound(String),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Look up `raw_input` and record the attempt at the current local time.
pub fn search(
    store: &RecordStore,
    session: &mut SessionState,
    raw_input: &str,
) -> Result<SearchOutcome, SearchError> {
    search_at(store, session, raw_input, Local::now().naive_local())
}

/// Same as [`search`] with an explicit timestamp for the log entry.
pub fn search_at(
    store: &RecordStore,
    session: &mut SessionState,
    raw_input: &str,
    at: NaiveDateTime,
) -> Result<SearchOutcome, SearchError> {
    let patient_id = normalize_id(raw_input);
    if patient_id.is_empty() {
        tracing::debug!("Rejected empty search input");
        return Err(SearchError::EmptyInput);
    }

    let outcome = match store.find(&patient_id) {
        Some(record) => SearchOutcome::Found(record.clone()),
        None => SearchOutcome::NotFound(patient_id.clone()),
    };
    session.record_search(&patient_id, at);

    tracing::info!(patient_id = %patient_id, found = outcome.is_found(), "Patient search");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_input_records_nothing() {
        let store = RecordStore::seeded();
        let mut session = SessionState::new();
        for input in ["", "   ", "\t\n"] {
            assert_eq!(
                search(&store, &mut session, input).unwrap_err(),
                SearchError::EmptyInput
            );
        }
        assert!(session.history().is_empty());
        assert!(session.log().is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive_and_always_logged() {
        let store = RecordStore::seeded();
        let mut session = SessionState::new();

        let lower = search_at(&store, &mut session, "p1001", noon()).unwrap();
        let upper = search_at(&store, &mut session, "P1001", noon()).unwrap();
        assert_eq!(lower, upper);
        match lower {
            SearchOutcome::Found(record) => assert_eq!(record.name, "Amit Kumar"),
            other => panic!("expected hit, got {other:?}"),
        }
        assert_eq!(session.history(), ["P1001", "P1001"]);
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn miss_is_still_logged() {
        let store = RecordStore::seeded();
        let mut session = SessionState::new();

        let outcome = search_at(&store, &mut session, " p9999 ", noon()).unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound("P9999".to_string()));
        assert_eq!(session.history(), ["P9999"]);
        assert_eq!(session.log()[0].patient_id, "P9999");
        assert_eq!(session.log()[0].timestamp, noon());
    }
}
