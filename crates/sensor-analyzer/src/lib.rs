//! Sensor Log Analysis
//!
//! Parses CSV sensor logs, checks readings against fixed thresholds, and
//! produces alert records, a summary, and a human-readable report.

mod alert;
mod analyzer;
mod error;
mod reading;
mod report;
mod rules;

pub use alert::{Alert, AlertLabel, Summary};
pub use analyzer::{analyze, Analysis, Analyzer};
pub use error::AnalyzerError;
pub use reading::{SensorKind, SensorReading, REQUIRED_COLUMNS};
pub use report::Report;
pub use rules::{Comparison, Rule, RuleSet, ThresholdConfig};
