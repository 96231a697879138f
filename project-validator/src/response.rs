use chrono::Local;
use serde::Serialize;
use validator_lib::{Issue, ValidationSummary};

/// Transport envelope for one validation run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub issues: Vec<Issue>,
    /// When the run finished, as an RFC 3339 timestamp.
    pub processed_at: String,
    /// Name of the uploaded or checked file, echoed back for the report.
    pub file_name: String,
}

impl ValidationResponse {
    pub fn new(summary: ValidationSummary, file_name: String) -> Self {
        Self {
            total_rows: summary.total_rows,
            valid_rows: summary.valid_rows,
            issues: summary.issues,
            processed_at: Local::now().to_rfc3339(),
            file_name,
        }
    }
}
