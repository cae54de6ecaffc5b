pub mod enums;
pub mod patient;
pub mod search;

pub use enums::PatientStatus;
pub use patient::{normalize_id, PatientRecord};
pub use search::SearchLogEntry;
