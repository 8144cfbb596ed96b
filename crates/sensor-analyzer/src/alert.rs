//! Alert Records and Summary

use crate::reading::SensorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label naming the out-of-range condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertLabel {
    HighTemperature,
    LowBatteryVoltage,
    LowBrakePressure,
}

impl AlertLabel {
    /// Upper-case text used in report lines
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLabel::HighTemperature => "HIGH TEMPERATURE",
            AlertLabel::LowBatteryVoltage => "LOW BATTERY VOLTAGE",
            AlertLabel::LowBrakePressure => "LOW BRAKE PRESSURE",
        }
    }

    /// Leading icon for report lines
    pub fn icon(&self) -> &'static str {
        match self {
            AlertLabel::HighTemperature => "🔥",
            AlertLabel::LowBatteryVoltage => "⚡",
            AlertLabel::LowBrakePressure => "🛑",
        }
    }
}

impl fmt::Display for AlertLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One out-of-range reading
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: SensorKind,
    pub label: AlertLabel,
    pub value: f64,
    /// Value as written in the document
    pub raw_value: String,
    pub timestamp: String,
    /// Source line of the reading
    pub line: u64,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}: {}{}",
            self.label.icon(),
            self.timestamp,
            self.label,
            self.raw_value,
            self.kind.unit()
        )
    }
}

/// Machine-readable result of one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub ok: bool,
    pub alert_count: usize,
}

impl Summary {
    /// Summary for a given number of alerts
    pub fn from_count(alert_count: usize) -> Self {
        Self {
            ok: alert_count == 0,
            alert_count,
        }
    }

    /// Combine summaries of several documents
    pub fn merge(self, other: Summary) -> Self {
        Self::from_count(self.alert_count + other.alert_count)
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::from_count(0)
    }
}
