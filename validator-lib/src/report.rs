//! Validation findings and the aggregate report.
//!
//! The serialized shapes here are a wire contract: the report frontend
//! switches on the exact `issueType` strings and expects camelCase keys,
//! so the serde attributes below are load-bearing.

use serde::Serialize;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// The kinds of issue a row can be flagged with.
///
/// Variants serialize to their human-readable labels. Start and end date
/// problems share a label and are told apart by the description and the
/// date fields carried on the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    #[serde(rename = "Missing Project Name")]
    MissingProjectName,
    #[serde(rename = "Invalid Date Format")]
    InvalidDateFormat,
    #[serde(rename = "Missing Date")]
    MissingDate,
    #[serde(rename = "Invalid Date Range")]
    InvalidDateRange,
    #[serde(rename = "Future Start Date")]
    FutureStartDate,
    #[serde(rename = "Excessive Duration")]
    ExcessiveDuration,
}

/// One finding on a single row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// 1-based row in the original file, counting the header row.
    pub row: usize,
    /// Project name from the row, or a placeholder when it is unusable.
    pub project_name: String,
    pub issue_type: IssueKind,
    pub description: String,
    pub severity: Severity,
    /// Start date involved in the finding: raw cell text for format
    /// issues, `YYYY-MM-DD` once the date has parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date involved in the finding, same convention as `start_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Aggregate outcome of validating one dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total_rows: usize,
    /// Rows with no findings at all.
    pub valid_rows: usize,
    pub issues: Vec<Issue>,
}
