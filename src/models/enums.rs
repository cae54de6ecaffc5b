use serde::{Deserialize, Serialize, Serializer};

/// Raised when a submitted string is not a known enum value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// Serde goes through the same pair: `as_str` on the way out,
/// `FromStr` on the way in.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
        #[serde(try_from = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidEnum;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

str_enum!(PatientStatus {
    Admitted => "Admitted",
    Discharged => "Discharged",
});

/// The intake form preselects `Admitted`.
impl Default for PatientStatus {
    fn default() -> Self {
        Self::Admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [PatientStatus::Admitted, PatientStatus::Discharged] {
            assert_eq!(status.as_str().parse::<PatientStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "Transferred".parse::<PatientStatus>().unwrap_err();
        assert_eq!(err.field, "PatientStatus");
        assert_eq!(err.value, "Transferred");
    }

    #[test]
    fn status_parse_is_exact() {
        assert!("admitted".parse::<PatientStatus>().is_err());
    }

    #[test]
    fn default_status_is_admitted() {
        assert_eq!(PatientStatus::default(), PatientStatus::Admitted);
    }

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&PatientStatus::Discharged).unwrap();
        assert_eq!(json, "\"Discharged\"");
    }

    #[test]
    fn deserialize_reports_invalid_enum() {
        let status: PatientStatus = serde_json::from_str("\"Discharged\"").unwrap();
        assert_eq!(status, PatientStatus::Discharged);

        let err = serde_json::from_str::<PatientStatus>("\"Transferred\"").unwrap_err();
        assert!(
            err.to_string().contains("Invalid PatientStatus value: Transferred"),
            "unexpected error: {err}"
        );
    }
}
