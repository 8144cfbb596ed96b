//! Threshold Rules

use crate::alert::{Alert, AlertLabel};
use crate::reading::{SensorKind, SensorReading};
use serde::{Deserialize, Serialize};

/// Threshold configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Temperature above this raises HIGH TEMPERATURE (°C)
    pub temperature_max: f64,
    /// Battery voltage below this raises LOW BATTERY VOLTAGE (V)
    pub battery_voltage_min: f64,
    /// Brake pressure below this raises LOW BRAKE PRESSURE (PSI)
    pub brake_pressure_min: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            temperature_max: 90.0,
            battery_voltage_min: 23.0,
            brake_pressure_min: 50.0,
        }
    }
}

/// Direction of a threshold check; both are strict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Fires when value > threshold
    Above,
    /// Fires when value < threshold
    Below,
}

/// A single threshold rule for one sensor kind
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub kind: SensorKind,
    pub comparison: Comparison,
    pub threshold: f64,
    pub label: AlertLabel,
}

impl Rule {
    /// Whether `value` is out of range for this rule
    pub fn is_violated(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::Above => value > self.threshold,
            Comparison::Below => value < self.threshold,
        }
    }
}

/// The rule for every known sensor kind
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the rule set from configured thresholds
    pub fn new(config: &ThresholdConfig) -> Self {
        Self {
            rules: vec![
                Rule {
                    kind: SensorKind::Temperature,
                    comparison: Comparison::Above,
                    threshold: config.temperature_max,
                    label: AlertLabel::HighTemperature,
                },
                Rule {
                    kind: SensorKind::BatteryVoltage,
                    comparison: Comparison::Below,
                    threshold: config.battery_voltage_min,
                    label: AlertLabel::LowBatteryVoltage,
                },
                Rule {
                    kind: SensorKind::BrakePressure,
                    comparison: Comparison::Below,
                    threshold: config.brake_pressure_min,
                    label: AlertLabel::LowBrakePressure,
                },
            ],
        }
    }

    /// Rule for a sensor kind
    pub fn rule_for(&self, kind: SensorKind) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }

    /// Evaluate one reading; unknown kinds never alert
    pub fn evaluate(&self, reading: &SensorReading) -> Option<Alert> {
        let rule = self.rule_for(reading.kind?)?;
        if !rule.is_violated(reading.value) {
            return None;
        }

        Some(Alert {
            kind: rule.kind,
            label: rule.label,
            value: reading.value,
            raw_value: reading.raw_value.clone(),
            timestamp: reading.timestamp.clone(),
            line: reading.line,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(kind: &str, value: f64) -> SensorReading {
        SensorReading {
            sensor_type: kind.to_string(),
            kind: SensorKind::parse(kind),
            value,
            raw_value: value.to_string(),
            timestamp: "t".to_string(),
            line: 2,
        }
    }

    #[test]
    fn test_boundaries_are_strict() {
        let rules = RuleSet::default();
        assert!(rules.evaluate(&reading("temperature", 90.0)).is_none());
        assert!(rules.evaluate(&reading("battery_voltage", 23.0)).is_none());
        assert!(rules.evaluate(&reading("brake_pressure", 50.0)).is_none());
    }

    #[test]
    fn test_out_of_range_readings() {
        let rules = RuleSet::default();

        let alert = rules.evaluate(&reading("temperature", 90.5)).unwrap();
        assert_eq!(alert.label, AlertLabel::HighTemperature);

        let alert = rules.evaluate(&reading("battery_voltage", 22.9)).unwrap();
        assert_eq!(alert.label, AlertLabel::LowBatteryVoltage);

        let alert = rules.evaluate(&reading("brake_pressure", 0.0)).unwrap();
        assert_eq!(alert.label, AlertLabel::LowBrakePressure);
    }

    #[test]
    fn test_in_range_readings() {
        let rules = RuleSet::default();
        assert!(rules.evaluate(&reading("temperature", -40.0)).is_none());
        assert!(rules.evaluate(&reading("battery_voltage", 120.0)).is_none());
        assert!(rules.evaluate(&reading("brake_pressure", 72.0)).is_none());
    }

    #[test]
    fn test_unknown_kind() {
        let rules = RuleSet::default();
        assert!(rules.evaluate(&reading("humidity", 1000.0)).is_none());
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ThresholdConfig {
            temperature_max: 100.0,
            ..Default::default()
        };
        let rules = RuleSet::new(&config);
        assert!(rules.evaluate(&reading("temperature", 95.0)).is_none());
        assert!(rules.evaluate(&reading("temperature", 101.0)).is_some());
        assert_eq!(rules.rule_for(SensorKind::Temperature).unwrap().threshold, 100.0);
    }
}
