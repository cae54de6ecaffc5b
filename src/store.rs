//! Record store: the in-memory patient table.
//!
//! Ordered by insertion, keyed by uppercase `PatientID`, append-only.
//! Lookups are linear scans; the table stays small.

use serde::Serialize;

use crate::models::patient::{normalize_id, MAX_AGE};
use crate::models::{PatientRecord, PatientStatus};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Required field is empty: {field}")]
    Validation { field: &'static str },
    #[error("Age {age} is outside 0..={max}", max = MAX_AGE)]
    AgeOutOfRange { age: u8 },
    #[error("Patient ID already exists: {0}")]
    DuplicateId(String),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Live counts for the dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatientCounts {
    pub total: usize,
    pub admitted: usize,
    pub discharged: usize,
}

/// The session's patient table.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<PatientRecord>,
}

impl RecordStore {
    /// An empty store. Sessions start from [`RecordStore::seeded`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the five fixed seed records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.initialize();
        store
    }

    /// Populate the seed records if the store is still empty.
    pub fn initialize(&mut self) {
        if !self.records.is_empty() {
            return;
        }
        self.records = seed_records();
        tracing::debug!(count = self.records.len(), "Record store seeded");
    }

    /// Exact match on the normalized identifier.
    pub fn find(&self, id: &str) -> Option<&PatientRecord> {
        let id = normalize_id(id);
        self.records.iter().find(|r| r.patient_id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append a record. Nothing is written when validation fails.
    pub fn insert(&mut self, mut record: PatientRecord) -> Result<(), StoreError> {
        record.patient_id = normalize_id(&record.patient_id);
        validate(&record)?;
        if self.contains(&record.patient_id) {
            return Err(StoreError::DuplicateId(record.patient_id));
        }
        tracing::debug!(patient_id = %record.patient_id, "Record appended");
        self.records.push(record);
        Ok(())
    }

    /// Render the whole table as UTF-8 CSV, header first.
    pub fn serialize(&self) -> Result<Vec<u8>, StoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.records.is_empty() {
            writer.write_record(crate::models::patient::COLUMNS)?;
        }
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer
            .into_inner()
            .map_err(|e| StoreError::Csv(e.into_error().into()))
    }

    pub fn count(&self) -> PatientCounts {
        let total = self.records.len();
        let admitted = self.records.iter().filter(|r| r.is_admitted()).count();
        PatientCounts {
            total,
            admitted,
            discharged: total - admitted,
        }
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(record: &PatientRecord) -> Result<(), StoreError> {
    let required = [
        ("PatientID", &record.patient_id),
        ("Name", &record.name),
        ("Disease", &record.disease),
        ("Doctor", &record.doctor),
        ("Room", &record.room),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(StoreError::Validation { field });
        }
    }
    if record.age > MAX_AGE {
        return Err(StoreError::AgeOutOfRange { age: record.age });
    }
    Ok(())
}

fn seed_records() -> Vec<PatientRecord> {
    use PatientStatus::{Admitted, Discharged};

    [
        ("P1001", "Amit Kumar", 25, "Typhoid", "Dr. Reddy", "202A", Admitted),
        ("P1002", "Sneha Patel", 32, "Fracture", "Dr. Sen", "105B", Discharged),
        ("P1003", "Rahul Singh", 45, "Diabetes", "Dr. Mehta", "303C", Admitted),
        ("P1004", "Meena Gupta", 29, "Migraine", "Dr. Bose", "210A", Admitted),
        ("P1005", "Tanzil Raza", 36, "Covid-19", "Dr. Khanna", "Isolation-1", Discharged),
    ]
    .into_iter()
    .map(|(id, name, age, disease, doctor, room, status)| PatientRecord {
        patient_id: id.to_string(),
        name: name.to_string(),
        age,
        disease: disease.to_string(),
        doctor: doctor.to_string(),
        room: room.to_string(),
        status,
    })
    .collect()
}
