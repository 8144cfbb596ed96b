//! Human-readable Report

use crate::alert::Alert;
use std::fmt;

const ISSUES_HEADER: &str = "🚨 Issues Found:";
const NO_ISSUES: &str = "✅ No issues detected.";

/// Text rendering of an analysis, one entry per log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Render alerts in input order
    pub fn new(alerts: &[Alert]) -> Self {
        let lines = if alerts.is_empty() {
            vec![NO_ISSUES.to_string()]
        } else {
            std::iter::once(ISSUES_HEADER.to_string())
                .chain(alerts.iter().map(Alert::to_string))
                .collect()
        };
        Self { lines }
    }

    /// Report lines, header first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
