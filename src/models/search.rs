use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Display format for search timestamps (second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped lookup, recorded on hit and on miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLogEntry {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "Timestamp", serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamp_serializes_with_seconds() {
        let entry = SearchLogEntry {
            patient_id: "P1001".into(),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(14, 5, 7)
                .unwrap(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["PatientID"], "P1001");
        assert_eq!(json["Timestamp"], "2024-03-09 14:05:07");
    }
}
