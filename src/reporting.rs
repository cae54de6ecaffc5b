//! Presentation views derived from the current session.
//!
//! Owns every user-facing message. Views are plain serializable structs;
//! the API layer returns them as JSON.

use serde::Serialize;

use crate::intake::IntakeError;
use crate::models::patient::COLUMNS;
use crate::models::{PatientRecord, SearchLogEntry};
use crate::search::{SearchError, SearchOutcome};
use crate::store::{PatientCounts, RecordStore, StoreError};

pub const CSV_FILENAME: &str = "patient_records.csv";
pub const CSV_MIME: &str = "text/csv";

pub const MSG_FOUND: &str = "Record Found!";
pub const MSG_NOT_FOUND: &str = "No record found for this Patient ID.";
pub const MSG_EMPTY_INPUT: &str = "Please enter a valid Patient ID.";
pub const MSG_MISSING_FIELDS: &str = "Please fill all fields.";
pub const MSG_DUPLICATE_ID: &str = "Patient ID already exists.";
pub const MSG_HISTORY_CLEARED: &str = "History cleared.";
pub const MSG_LOG_CLEARED: &str = "Log cleared.";

/// Result card for a search, or the not-found message.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub found: bool,
    pub message: &'static str,
    pub patient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientRecord>,
}

pub fn render_outcome(outcome: SearchOutcome) -> SearchView {
    match outcome {
        SearchOutcome::Found(record) => SearchView {
            found: true,
            message: MSG_FOUND,
            patient_id: record.patient_id.clone(),
            patient: Some(record),
        },
        SearchOutcome::NotFound(patient_id) => SearchView {
            found: false,
            message: MSG_NOT_FOUND,
            patient_id,
            patient: None,
        },
    }
}

/// Generic table: column headers plus rows.
#[derive(Debug, Clone, Serialize)]
pub struct TableView<T> {
    pub columns: Vec<&'static str>,
    pub rows: Vec<T>,
}

pub fn render_table(store: &RecordStore) -> TableView<PatientRecord> {
    TableView {
        columns: COLUMNS.to_vec(),
        rows: store.records().to_vec(),
    }
}

pub fn render_history(history: &[String]) -> TableView<String> {
    TableView {
        columns: vec!["Searched Patient IDs"],
        rows: history.to_vec(),
    }
}

pub fn render_log(log: &[SearchLogEntry]) -> TableView<SearchLogEntry> {
    TableView {
        columns: vec!["PatientID", "Timestamp"],
        rows: log.to_vec(),
    }
}

/// Download payload for the full table.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: &'static str,
    pub mime: &'static str,
    pub body: Vec<u8>,
}

impl CsvExport {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

pub fn render_csv(store: &RecordStore) -> Result<CsvExport, StoreError> {
    Ok(CsvExport {
        filename: CSV_FILENAME,
        mime: CSV_MIME,
        body: store.serialize()?,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    pub label: &'static str,
    pub value: usize,
}

/// Live dashboard: total, admitted, discharged.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub tiles: Vec<Tile>,
}

pub fn render_counts(counts: PatientCounts) -> DashboardView {
    DashboardView {
        tiles: vec![
            Tile {
                label: "Total Patients",
                value: counts.total,
            },
            Tile {
                label: "Admitted",
                value: counts.admitted,
            },
            Tile {
                label: "Discharged",
                value: counts.discharged,
            },
        ],
    }
}

/// Acknowledgement for a clear action.
#[derive(Debug, Clone, Serialize)]
pub struct ClearedView {
    pub message: &'static str,
    pub cleared: usize,
}

pub fn search_error_message(err: &SearchError) -> &'static str {
    match err {
        SearchError::EmptyInput => MSG_EMPTY_INPUT,
    }
}

pub fn intake_error_message(err: &IntakeError) -> String {
    match err {
        IntakeError::Validation { .. } => MSG_MISSING_FIELDS.to_string(),
        IntakeError::DuplicateId(_) => MSG_DUPLICATE_ID.to_string(),
        IntakeError::AgeOutOfRange(_) | IntakeError::Store(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;

    #[test]
    fn found_outcome_renders_card() {
        let store = RecordStore::seeded();
        let record = store.find("P1002").unwrap().clone();
        let view = render_outcome(SearchOutcome::Found(record));
        assert!(view.found);
        assert_eq!(view.message, MSG_FOUND);
        assert_eq!(view.patient.unwrap().name, "Sneha Patel");
    }

    #[test]
    fn not_found_outcome_has_no_card() {
        let view = render_outcome(SearchOutcome::NotFound("P9999".into()));
        assert!(!view.found);
        assert_eq!(view.patient_id, "P9999");
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("patient").is_none());
        assert_eq!(json["message"], MSG_NOT_FOUND);
    }

    #[test]
    fn table_lists_columns_in_order() {
        let view = render_table(&RecordStore::seeded());
        assert_eq!(view.columns[0], "PatientID");
        assert_eq!(view.columns[6], "Status");
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn history_and_log_views() {
        let mut session = SessionState::new();
        session.record_search("P1001", chrono::Local::now().naive_local());
        let history = render_history(session.history());
        assert_eq!(history.columns, ["Searched Patient IDs"]);
        assert_eq!(history.rows, ["P1001"]);
        let log = render_log(session.log());
        assert_eq!(log.columns, ["PatientID", "Timestamp"]);
        assert_eq!(log.rows.len(), 1);
    }

    #[test]
    fn csv_export_metadata() {
        let export = render_csv(&RecordStore::seeded()).unwrap();
        assert_eq!(export.mime, "text/csv");
        assert_eq!(
            export.content_disposition(),
            "attachment; filename=\"patient_records.csv\""
        );
        assert!(export.body.starts_with(b"PatientID,"));
    }

    #[test]
    fn dashboard_tiles() {
        let view = render_counts(RecordStore::seeded().count());
        let values: Vec<_> = view.tiles.iter().map(|t| (t.label, t.value)).collect();
        assert_eq!(
            values,
            [("Total Patients", 5), ("Admitted", 3), ("Discharged", 2)]
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(search_error_message(&SearchError::EmptyInput), MSG_EMPTY_INPUT);
        assert_eq!(
            intake_error_message(&IntakeError::Validation { field: "Name" }),
            MSG_MISSING_FIELDS
        );
        assert_eq!(
            intake_error_message(&IntakeError::DuplicateId("P1".into())),
            MSG_DUPLICATE_ID
        );
        assert!(intake_error_message(&IntakeError::AgeOutOfRange(200)).contains("200"));
    }
}
