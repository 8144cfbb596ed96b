//! Log Analyzer
//!
//! Single pass over a CSV document: every row is parsed and judged on its
//! own, alerts keep input order, and any error aborts the whole document.

use crate::alert::{Alert, Summary};
use crate::error::AnalyzerError;
use crate::reading::{RawRow, SensorReading, REQUIRED_COLUMNS};
use crate::report::Report;
use crate::rules::{RuleSet, ThresholdConfig};
use tracing::{debug, info};

/// Outcome of analyzing one document
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Alerts in input row order
    pub alerts: Vec<Alert>,
    /// Success flag and alert count
    pub summary: Summary,
    /// Number of data rows read
    pub rows: usize,
}

impl Analysis {
    /// Render the alerts for logging
    pub fn report(&self) -> Report {
        Report::new(&self.alerts)
    }
}

/// Analyzer bound to a rule set
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    rules: RuleSet,
}

impl Analyzer {
    /// Create an analyzer with the given thresholds
    pub fn new(config: &ThresholdConfig) -> Self {
        debug!("Creating analyzer with thresholds: {:?}", config);
        Self {
            rules: RuleSet::new(config),
        }
    }

    /// Analyze the raw bytes of a CSV document
    pub fn analyze(&self, document: &[u8]) -> Result<Analysis, AnalyzerError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(document);

        let headers = reader.headers()?.clone();
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(AnalyzerError::MalformedInput { missing });
        }

        let mut alerts = Vec::new();
        let mut rows = 0;
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let raw: RawRow = record.deserialize(Some(&headers))?;
            let reading = SensorReading::from_raw(raw, line)?;
            rows += 1;

            if let Some(alert) = self.rules.evaluate(&reading) {
                debug!("Line {}: {} {}", line, alert.label, alert.raw_value);
                alerts.push(alert);
            } else if reading.kind.is_none() {
                debug!("Line {}: no rule for sensor type {:?}", line, reading.sensor_type);
            }
        }

        let summary = Summary::from_count(alerts.len());
        info!("Analyzed {} rows, {} alert(s)", rows, summary.alert_count);

        Ok(Analysis {
            alerts,
            summary,
            rows,
        })
    }
}

/// Analyze a document with the default thresholds
pub fn analyze(document: &[u8]) -> Result<Analysis, AnalyzerError> {
    Analyzer::default().analyze(document)
}
