use serde::{Deserialize, Serialize};

use super::enums::PatientStatus;

/// Upper bound accepted for `Age`.
pub const MAX_AGE: u8 = 120;

/// One row of the patient table.
///
/// Serialized field names are the table's column headers, so the same
/// shape feeds the JSON views and the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Doctor")]
    pub doctor: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Status")]
    pub status: PatientStatus,
}

impl PatientRecord {
    pub fn is_admitted(&self) -> bool {
        self.status == PatientStatus::Admitted
    }
}

/// Column order of the patient table.
pub const COLUMNS: [&str; 7] = [
    "PatientID",
    "Name",
    "Age",
    "Disease",
    "Doctor",
    "Room",
    "Status",
];

/// Trim and uppercase a patient identifier.
///
/// Applied to both stored IDs and search input so matching is
/// case-insensitive.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
