//! Reporting validation results to a UI

use serde::Serialize;

use crate::form::Field;
use crate::result::ValidationResult;

/// Receives each field's validation result as the controller produces it.
///
/// A browser implementation sets or clears the input's custom validity
/// message and asks it to display; the CLI prints a line per field.
pub trait FieldReporter {
    fn report(&mut self, field: Field, result: &ValidationResult);
}

/// One reported result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: Field,
    pub matched: bool,
    pub message: Option<String>,
}

/// Reporter that keeps every report in order
#[derive(Debug, Default)]
pub struct ReportCollector {
    reports: Vec<FieldReport>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[FieldReport] {
        &self.reports
    }

    /// Take the collected reports, leaving the collector empty
    pub fn drain(&mut self) -> Vec<FieldReport> {
        std::mem::take(&mut self.reports)
    }

    /// Latest report for a field
    pub fn last_for(&self, field: Field) -> Option<&FieldReport> {
        self.reports.iter().rev().find(|r| r.field == field)
    }
}

impl FieldReporter for ReportCollector {
    fn report(&mut self, field: Field, result: &ValidationResult) {
        self.reports.push(FieldReport {
            field,
            matched: result.matched,
            message: result.message.clone(),
        });
    }
}
