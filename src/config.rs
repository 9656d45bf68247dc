use std::{num::ParseIntError, time::Duration};

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const ENV_BUS: &str = "MLX90614_I2C_BUS";
pub const ENV_ADDRESS: &str = "MLX90614_ADDRESS";
pub const ENV_POLL_MS: &str = "MLX90614_POLL_MS";
pub const ENV_PEC: &str = "MLX90614_PEC";
pub const ENV_LOG: &str = "MLX90614_LOG";

/// Settings for the monitor. Every field can be overridden from the
/// environment, see `MonitorConfig::from_env`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Linux I2C character device. The adapter must be clocked at 100kHz.
    pub bus_path: String,

    /// 7-bit address of the sensor.
    pub address: u8,

    /// Time between two readings.
    pub poll_interval: Duration,

    /// Validate the PEC byte of every read.
    pub pec: bool,

    pub log_level: LevelFilter,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not a valid address. Error: {1}")]
    InvalidAddress(&'static str, ParseIntError),

    #[error("{0} is not a valid number of milliseconds. Error: {1}")]
    InvalidPollInterval(&'static str, ParseIntError),

    #[error("{0} must be greater than zero.")]
    ZeroPollInterval(&'static str),

    #[error("{0} must be one of true/false/1/0, got '{1}'.")]
    InvalidFlag(&'static str, String),

    #[error("{0} is not a valid log level, got '{1}'.")]
    InvalidLogLevel(&'static str, String),
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            bus_path: "/dev/i2c-1".into(),
            address: 0x5A,
            poll_interval: Duration::from_millis(1000),
            pec: false,
            log_level: LevelFilter::INFO,
        }
    }
}

impl MonitorConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from the defaults, overriding every value `lookup`
    /// returns something for.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bus_path) = lookup(ENV_BUS) {
            config.bus_path = bus_path;
        }
        if let Some(address) = lookup(ENV_ADDRESS) {
            config.address =
                parse_address(&address).map_err(|e| ConfigError::InvalidAddress(ENV_ADDRESS, e))?;
        }
        if let Some(poll_ms) = lookup(ENV_POLL_MS) {
            let poll_ms: u64 = poll_ms
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidPollInterval(ENV_POLL_MS, e))?;
            if poll_ms == 0 {
                return Err(ConfigError::ZeroPollInterval(ENV_POLL_MS));
            }
            config.poll_interval = Duration::from_millis(poll_ms);
        }
        if let Some(pec) = lookup(ENV_PEC) {
            config.pec = parse_flag(&pec).ok_or(ConfigError::InvalidFlag(ENV_PEC, pec))?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(ENV_LOG, level))?;
        }

        Ok(config)
    }
}

/// Accepts `0x` prefixed hex or plain decimal. Range checking is left to the
/// driver.
fn parse_address(raw: &str) -> Result<u8, ParseIntError> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => raw.parse(),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::from_lookup(lookup_from(&[])).expect("Failed to build config.");
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.address, 0x5A);
        assert_eq!(config.poll_interval, Duration::from_millis(1000));
        assert!(!config.pec);
    }

    #[test]
    fn test_overrides() {
        let config = MonitorConfig::from_lookup(lookup_from(&[
            (ENV_BUS, "/dev/i2c-0"),
            (ENV_ADDRESS, "0x5B"),
            (ENV_POLL_MS, "250"),
            (ENV_PEC, "true"),
            (ENV_LOG, "debug"),
        ]))
        .expect("Failed to build config.");

        assert_eq!(config.bus_path, "/dev/i2c-0");
        assert_eq!(config.address, 0x5B);
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert!(config.pec);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x5A"), Ok(0x5A));
        assert_eq!(parse_address("0X5a"), Ok(0x5A));
        assert_eq!(parse_address("90"), Ok(90));
        assert!(parse_address("0x").is_err());
        assert!(parse_address("0x100").is_err());
        assert!(parse_address("ninety").is_err());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            MonitorConfig::from_lookup(lookup_from(&[(ENV_ADDRESS, "zz")])),
            Err(ConfigError::InvalidAddress(ENV_ADDRESS, _))
        ));
        assert!(matches!(
            MonitorConfig::from_lookup(lookup_from(&[(ENV_POLL_MS, "-5")])),
            Err(ConfigError::InvalidPollInterval(ENV_POLL_MS, _))
        ));
        assert!(matches!(
            MonitorConfig::from_lookup(lookup_from(&[(ENV_POLL_MS, "0")])),
            Err(ConfigError::ZeroPollInterval(ENV_POLL_MS))
        ));
        assert!(matches!(
            MonitorConfig::from_lookup(lookup_from(&[(ENV_PEC, "maybe")])),
            Err(ConfigError::InvalidFlag(ENV_PEC, _))
        ));
        assert!(matches!(
            MonitorConfig::from_lookup(lookup_from(&[(ENV_LOG, "loud")])),
            Err(ConfigError::InvalidLogLevel(ENV_LOG, _))
        ));
    }
}
