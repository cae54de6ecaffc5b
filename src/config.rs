//! Server configuration.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PATIENT_FINDER_PORT` | 8080 | Server port |
//! | `PATIENT_FINDER_HOST` | 127.0.0.1 | Host to bind |
//! | `PATIENT_FINDER_LOG_LEVEL` | info | Log level |

use clap::Parser;

/// Application-level constants
pub const APP_NAME: &str = "Patient Finder";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Default `EnvFilter` directive when `RUST_LOG` is not set.
pub fn default_log_filter(level: &str) -> String {
    format!("patient_finder_lib={level},patient_finder={level},tower_http=info")
}

/// Runtime configuration, from command line arguments or environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "patient-finder")]
#[command(about = "Hospital patient record lookup service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PATIENT_FINDER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "PATIENT_FINDER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PATIENT_FINDER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Collects every configuration problem instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.host.trim().is_empty() {
            errors.push("host must not be empty".to_string());
        }
        if self.port == 0 {
            errors.push("port must be greater than 0".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "invalid log level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Address string to bind, `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_reports_all_errors() {
        let config = ServerConfig {
            port: 0,
            host: "  ".to_string(),
            log_level: "loud".to_string(),
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("log level")));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = ServerConfig {
            log_level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_cli_arguments() {
        let config =
            ServerConfig::try_parse_from(["patient-finder", "-p", "9000", "--host", "0.0.0.0"])
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn default_filter_names_crate() {
        assert!(default_log_filter("debug").contains("patient_finder_lib=debug"));
    }

    #[test]
    fn app_name_is_patient_finder() {
        assert_eq!(APP_NAME, "Patient Finder");
    }
}
