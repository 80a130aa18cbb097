//! Report structures for terminal and JSON display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::Diagnostic;

/// Line shown when a run produced no diagnostics
pub const NO_ISSUES_MESSAGE: &str = "No issues found.";

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub id: u16,
    pub code: String,
    pub message: String,
}

impl From<&Diagnostic> for DiagnosticRecord {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            id: diagnostic.id(),
            code: diagnostic.code(),
            message: diagnostic.message(),
        }
    }
}

/// Output of one check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Timestamp
    pub generated_at: DateTime<Utc>,
    pub issue_count: usize,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl Report {
    pub fn new(diagnostics: &[Diagnostic]) -> Self {
        Self {
            generated_at: Utc::now(),
            issue_count: diagnostics.len(),
            diagnostics: diagnostics.iter().map(DiagnosticRecord::from).collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Display rows in order; a clean run renders a single placeholder row
    pub fn rows(&self) -> Vec<String> {
        if self.is_clean() {
            return vec![NO_ISSUES_MESSAGE.to_string()];
        }
        self.diagnostics
            .iter()
            .map(|record| format!("{}: {}", record.code, record.message))
            .collect()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        self.rows().join("\n")
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        if self.is_clean() {
            return NO_ISSUES_MESSAGE.green().to_string();
        }
        self.diagnostics
            .iter()
            .map(|record| format!("{}: {}", record.code.yellow().bold(), record.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayerType;

    #[test]
    fn test_clean_report() {
        let report = Report::new(&[]);
        assert!(report.is_clean());
        assert_eq!(report.to_parseable_string(), "No issues found.");
    }

    #[test]
    fn test_rows_keep_order() {
        let report = Report::new(&[
            Diagnostic::DuplicateLayerType { layer_type: LayerType::FX },
            Diagnostic::OverriddenMaterials { node_name: "Body".into() },
        ]);
        let rows = report.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("A0007: "));
        assert!(rows[1].starts_with("A0011: "));
        assert_eq!(report.issue_count, 2);
    }

    #[test]
    fn test_rerender_is_stable() {
        let report = Report::new(&[Diagnostic::NoAvatarDescriptor]);
        assert_eq!(report.to_parseable_string(), report.to_parseable_string());
    }
}
