//! Runtime settings for the HTTP server binary.
//!
//! Settings come from environment variables, falling back to defaults when
//! a variable is unset.

use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Port the server listens on unless `STAY_ENGINE_PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 3001;

/// Catalog directory used unless `STAY_ENGINE_CONFIG` says otherwise.
pub const DEFAULT_CONFIG_DIR: &str = "./config/hotel";

/// Settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// TCP port to bind on all interfaces.
    pub port: u16,
    /// Directory holding `hotel.yaml` and `rooms.yaml`.
    pub config_dir: PathBuf,
}

impl ServerSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("STAY_ENGINE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| EngineError::ConfigParseError {
                    path: "STAY_ENGINE_PORT".to_string(),
                    message: format!("'{}' is not a valid port: {}", raw, e),
                })?,
            None => {
                info!("STAY_ENGINE_PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let config_dir = match lookup("STAY_ENGINE_CONFIG") {
            Some(dir) => PathBuf::from(dir),
            None => {
                info!("STAY_ENGINE_CONFIG not set, using default: {DEFAULT_CONFIG_DIR}");
                PathBuf::from(DEFAULT_CONFIG_DIR)
            }
        };

        Ok(Self { port, config_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.config_dir, PathBuf::from(DEFAULT_CONFIG_DIR));
    }

    #[test]
    fn test_reads_port_and_config_dir() {
        let settings = ServerSettings::from_lookup(lookup_from(&[
            ("STAY_ENGINE_PORT", "8080"),
            ("STAY_ENGINE_CONFIG", "/etc/stay-engine"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.config_dir, PathBuf::from("/etc/stay-engine"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = ServerSettings::from_lookup(lookup_from(&[("STAY_ENGINE_PORT", "http")]));
        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "STAY_ENGINE_PORT");
                assert!(message.contains("'http'"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
