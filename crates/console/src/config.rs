//! Environment configuration for the console binary.

use thiserror::Error;

use orderdesk_observability::LogFormat;

pub const ENV_MAX_DISTANCE: &str = "ORDERDESK_MAX_DISTANCE";
pub const ENV_ASSIGN_DISTANCE: &str = "ORDERDESK_ASSIGN_DISTANCE";
pub const ENV_SEED_DEMO: &str = "ORDERDESK_SEED_DEMO";
pub const ENV_LOG_FORMAT: &str = "ORDERDESK_LOG_FORMAT";

const DEFAULT_DISTANCE_KM: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {var}=`{value}`: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Startup settings. Every field has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Initial table distance ceiling (km).
    pub max_distance: f64,
    /// Initial assignment distance ceiling (km).
    pub assign_max_distance: f64,
    /// Start with the demo orders loaded.
    pub seed_demo: bool,
    pub log_format: LogFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_DISTANCE_KM,
            assign_max_distance: DEFAULT_DISTANCE_KM,
            seed_demo: true,
            log_format: LogFormat::default(),
        }
    }
}

impl ConsoleConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which returns the raw value of a variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_distance = match lookup(ENV_MAX_DISTANCE) {
            Some(raw) => parse_distance(ENV_MAX_DISTANCE, &raw)?,
            None => defaults.max_distance,
        };
        let assign_max_distance = match lookup(ENV_ASSIGN_DISTANCE) {
            Some(raw) => parse_distance(ENV_ASSIGN_DISTANCE, &raw)?,
            None => defaults.assign_max_distance,
        };
        let seed_demo = match lookup(ENV_SEED_DEMO) {
            Some(raw) => parse_bool(ENV_SEED_DEMO, &raw)?,
            None => defaults.seed_demo,
        };
        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| ConfigError {
                var: ENV_LOG_FORMAT,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            max_distance,
            assign_max_distance,
            seed_demo,
            log_format,
        })
    }
}

fn parse_distance(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(km) if km >= 0.0 => Ok(km),
        _ => Err(ConfigError {
            var,
            value: raw.to_string(),
            reason: "expected a non-negative number of km".to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            var,
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ConsoleConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.max_distance, 10.0);
        assert!(config.seed_demo);
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = ConsoleConfig::from_lookup(lookup_from(&[
            (ENV_MAX_DISTANCE, "4.5"),
            (ENV_ASSIGN_DISTANCE, " 2 "),
            (ENV_SEED_DEMO, "off"),
            (ENV_LOG_FORMAT, "json"),
        ]))
        .unwrap();

        assert_eq!(config.max_distance, 4.5);
        assert_eq!(config.assign_max_distance, 2.0);
        assert!(!config.seed_demo);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = ConsoleConfig::from_lookup(lookup_from(&[(ENV_MAX_DISTANCE, "-3")])).unwrap_err();
        assert_eq!(err.var, ENV_MAX_DISTANCE);
        assert!(err.to_string().starts_with("invalid ORDERDESK_MAX_DISTANCE=`-3`"));

        let err = ConsoleConfig::from_lookup(lookup_from(&[(ENV_SEED_DEMO, "maybe")])).unwrap_err();
        assert_eq!(err.var, ENV_SEED_DEMO);

        let err = ConsoleConfig::from_lookup(lookup_from(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert_eq!(err.var, ENV_LOG_FORMAT);
    }
}
