//! Admin intake: validates the new-patient form and appends the record.

use serde::{Deserialize, Serialize};

use crate::models::patient::{normalize_id, MAX_AGE};
use crate::models::{PatientRecord, PatientStatus};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Required field is empty: {field}")]
    Validation { field: &'static str },
    #[error("Age {0} is outside 0..={max}", max = MAX_AGE)]
    AgeOutOfRange(u8),
    #[error("Patient ID already exists: {0}")]
    DuplicateId(String),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for IntakeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation { field } => IntakeError::Validation { field },
            StoreError::AgeOutOfRange { age } => IntakeError::AgeOutOfRange(age),
            StoreError::DuplicateId(id) => IntakeError::DuplicateId(id),
            other => IntakeError::Store(other),
        }
    }
}

/// Admin form input. Missing text fields arrive as empty strings and
/// fail validation; `status` defaults to `Admitted`, `age` to 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u8,
    #[serde(default)]
    pub disease: String,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub status: PatientStatus,
}

/// Returned on a successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddConfirmation {
    pub patient_id: String,
    pub name: String,
}

impl AddConfirmation {
    pub fn message(&self) -> String {
        format!("New record added for {}", self.name)
    }
}

impl PatientForm {
    /// Trimmed record with the identifier uppercased.
    fn into_record(self) -> PatientRecord {
        PatientRecord {
            patient_id: normalize_id(&self.patient_id),
            name: self.name.trim().to_string(),
            age: self.age,
            disease: self.disease.trim().to_string(),
            doctor: self.doctor.trim().to_string(),
            room: self.room.trim().to_string(),
            status: self.status,
        }
    }
}

/// Validate `form` and append it to `store`.
///
/// Check order: required fields, age range, duplicate ID. On any
/// failure the store is untouched.
pub fn add_patient(
    store: &mut RecordStore,
    form: PatientForm,
) -> Result<AddConfirmation, IntakeError> {
    let record = form.into_record();

    let required = [
        ("PatientID", &record.patient_id),
        ("Name", &record.name),
        ("Disease", &record.disease),
        ("Doctor", &record.doctor),
        ("Room", &record.room),
    ];
    if let Some(&(field, _)) = required.iter().find(|(_, v)| v.is_empty()) {
        tracing::debug!(field, "Intake rejected: missing field");
        return Err(IntakeError::Validation { field });
    }
    if record.age > MAX_AGE {
        return Err(IntakeError::AgeOutOfRange(record.age));
    }
    if store.contains(&record.patient_id) {
        tracing::warn!(patient_id = %record.patient_id, "Intake rejected: duplicate ID");
        return Err(IntakeError::DuplicateId(record.patient_id));
    }

    let confirmation = AddConfirmation {
        patient_id: record.patient_id.clone(),
        name: record.name.clone(),
    };
    let status = record.status;
    store.insert(record)?;

    tracing::info!(patient_id = %confirmation.patient_id, %status, "Patient added");
    Ok(confirmation)
}
