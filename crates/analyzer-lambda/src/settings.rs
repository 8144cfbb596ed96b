//! Function settings

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use sensor_analyzer::ThresholdConfig;
use serde::Deserialize;
use tracing::Level;

/// Prefix of every environment variable read by the function
pub const ENV_PREFIX: &str = "ANALYZER";

/// Function configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LambdaConfig {
    /// Max tracing level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Alert thresholds
    pub thresholds: ThresholdConfig,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            thresholds: ThresholdConfig::default(),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl LambdaConfig {
    /// Load from `ANALYZER_*` environment variables, `__` separating nested keys
    /// (e.g. `ANALYZER_THRESHOLDS__TEMPERATURE_MAX=95`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(environment()))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Configured log level, INFO when unparseable
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};
    use std::collections::HashMap;

    fn from_json(json: &str) -> LambdaConfig {
        LambdaConfig::from_builder(
            Config::builder().add_source(File::from_str(json, FileFormat::Json)),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_json("{}");
        assert_eq!(config, LambdaConfig::default());
        assert_eq!(config.thresholds.temperature_max, 90.0);
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_partial_override() {
        let config = from_json(r#"{"log_level": "debug", "thresholds": {"temperature_max": 95.5}}"#);
        assert_eq!(config.max_level(), Level::DEBUG);
        assert_eq!(config.thresholds.temperature_max, 95.5);
        assert_eq!(config.thresholds.battery_voltage_min, 23.0);
        assert_eq!(config.thresholds.brake_pressure_min, 50.0);
    }

    #[test]
    fn test_environment_variables() {
        let vars: HashMap<String, String> = [
            ("ANALYZER_LOG_LEVEL", "warn"),
            ("ANALYZER_THRESHOLDS__TEMPERATURE_MAX", "95"),
            ("ANALYZER_THRESHOLDS__BRAKE_PRESSURE_MIN", "47.5"),
            ("OTHER_THRESHOLDS__BATTERY_VOLTAGE_MIN", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = LambdaConfig::from_builder(
            Config::builder().add_source(environment().source(Some(vars))),
        )
        .unwrap();

        assert_eq!(config.max_level(), Level::WARN);
        assert_eq!(config.thresholds.temperature_max, 95.0);
        assert_eq!(config.thresholds.brake_pressure_min, 47.5);
        assert_eq!(config.thresholds.battery_voltage_min, 23.0);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = LambdaConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.max_level(), Level::INFO);
    }
}
