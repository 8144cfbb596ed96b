//! Sensor Readings
//!
//! Typed representation of one CSV data row.

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns every document header must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["sensor_type", "value", "timestamp"];

/// Sensor kinds with threshold rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    /// Temperature (°C)
    Temperature,
    /// Battery voltage (V)
    BatteryVoltage,
    /// Brake pressure (PSI)
    BrakePressure,
}

impl SensorKind {
    /// Parse a `sensor_type` field, trimmed and case-insensitive.
    ///
    /// Returns `None` for kinds without a rule; those rows are skipped.
    pub fn parse(sensor_type: &str) -> Option<Self> {
        match sensor_type.trim().to_ascii_lowercase().as_str() {
            "temperature" => Some(SensorKind::Temperature),
            "battery_voltage" => Some(SensorKind::BatteryVoltage),
            "brake_pressure" => Some(SensorKind::BrakePressure),
            _ => None,
        }
    }

    /// Canonical `sensor_type` spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::BatteryVoltage => "battery_voltage",
            SensorKind::BrakePressure => "brake_pressure",
        }
    }

    /// Unit suffix used in report lines
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::BatteryVoltage => "V",
            SensorKind::BrakePressure => " PSI",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row as it appears in the document, before numeric parsing
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    pub sensor_type: String,
    pub value: String,
    pub timestamp: String,
}

/// One parsed data row
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// `sensor_type` exactly as written
    pub sensor_type: String,
    /// Normalized kind, `None` when unrecognized
    pub kind: Option<SensorKind>,
    /// Parsed reading
    pub value: f64,
    /// Trimmed source text of the value
    pub raw_value: String,
    /// Opaque timestamp, passed through unmodified
    pub timestamp: String,
    /// 1-based line number in the document
    pub line: u64,
}

impl SensorReading {
    /// Build a reading from a raw row, failing on a non-numeric value
    pub(crate) fn from_raw(raw: RawRow, line: u64) -> Result<Self, AnalyzerError> {
        let raw_value = raw.value.trim().to_string();
        let value = parse_value(&raw_value).ok_or_else(|| AnalyzerError::InvalidValue {
            line,
            value: raw.value.clone(),
        })?;

        Ok(Self {
            kind: SensorKind::parse(&raw.sensor_type),
            sensor_type: raw.sensor_type,
            value,
            raw_value,
            timestamp: raw.timestamp,
            line,
        })
    }
}

/// NaN never compares against a threshold, so it is rejected with other junk
fn parse_value(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(sensor_type: &str, value: &str) -> RawRow {
        RawRow {
            sensor_type: sensor_type.to_string(),
            value: value.to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_kind_normalization() {
        assert_eq!(SensorKind::parse("temperature"), Some(SensorKind::Temperature));
        assert_eq!(SensorKind::parse("  Battery_Voltage "), Some(SensorKind::BatteryVoltage));
        assert_eq!(SensorKind::parse("BRAKE_PRESSURE"), Some(SensorKind::BrakePressure));
        assert_eq!(SensorKind::parse("humidity"), None);
        assert_eq!(SensorKind::parse(""), None);
    }

    #[test]
    fn test_value_parsing() {
        let reading = SensorReading::from_raw(raw("temperature", " 25.0 "), 2).unwrap();
        assert_eq!(reading.value, 25.0);
        assert_eq!(reading.raw_value, "25.0");
        assert_eq!(reading.line, 2);

        let reading = SensorReading::from_raw(raw("brake_pressure", "-3e1"), 3).unwrap();
        assert_eq!(reading.value, -30.0);
    }

    #[test]
    fn test_invalid_value() {
        for bad in ["", "abc", "12,5", "NaN", "1.2.3"] {
            let err = SensorReading::from_raw(raw("temperature", bad), 4).unwrap_err();
            assert_eq!(
                err,
                AnalyzerError::InvalidValue {
                    line: 4,
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_unknown_kind_still_parses_value() {
        let reading = SensorReading::from_raw(raw("humidity", "40"), 2).unwrap();
        assert_eq!(reading.kind, None);
        assert_eq!(reading.sensor_type, "humidity");
    }
}
