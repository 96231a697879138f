//! Row-level validation rules.
//!
//! Rules run in a fixed order for every row, and a row can collect several
//! findings in one pass. The range, future-start and duration checks only
//! run once both dates have parsed; everything else is independent. No rule
//! mutates the data, rows are only ever flagged.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::dataset::DataRow;
use crate::report::{Issue, IssueKind, Severity, ValidationSummary};
use crate::resolver::{CanonicalColumn, CanonicalDataset};
use crate::utils::{format_ymd, local_now};

/// Longest acceptable project, in days. Anything beyond two years
/// (731 days or more) is flagged.
const MAX_PROJECT_DAYS: i64 = 730;

const DAYS_PER_YEAR: f64 = 365.25;

/// Placeholder name for issues on rows whose project name is unusable.
fn fallback_name(row_number: usize) -> String {
    format!("Row {row_number}")
}

/// Validates every row and aggregates the findings.
///
/// The wall clock is read once, so every row in a run is judged against
/// the same instant. A row counts as valid when no rule flags it.
pub fn validate_all(dataset: &CanonicalDataset) -> ValidationSummary {
    let now = local_now();

    let mut issues = Vec::new();
    for row in dataset.rows() {
        validate_row(row, now, &mut issues);
    }

    let flagged_rows: HashSet<usize> = issues.iter().map(|issue| issue.row).collect();
    let total_rows = dataset.row_count();

    ValidationSummary {
        total_rows,
        valid_rows: total_rows - flagged_rows.len(),
        issues,
    }
}

fn validate_row(row: &DataRow, now: NaiveDateTime, issues: &mut Vec<Issue>) {
    let row_number = row.row_number();

    let name_cell = row.get(CanonicalColumn::ProjectName.display_name());
    let start_cell = row.get(CanonicalColumn::StartDate.display_name());
    let end_cell = row.get(CanonicalColumn::EndDate.display_name());

    // Once the name is known missing, later findings on this row carry a
    // positional placeholder instead of the raw (blank) value.
    let project_name = if name_cell.is_blank() {
        issues.push(Issue {
            row: row_number,
            project_name: "Unknown".to_string(),
            issue_type: IssueKind::MissingProjectName,
            description: "Project name is missing".to_string(),
            severity: Severity::High,
            start_date: None,
            end_date: None,
        });
        fallback_name(row_number)
    } else {
        name_cell.to_string()
    };

    let start = start_cell.to_datetime();
    if !start_cell.is_blank() && start.is_none() {
        issues.push(Issue {
            row: row_number,
            project_name: project_name.clone(),
            issue_type: IssueKind::InvalidDateFormat,
            description: format!("Start date '{start_cell}' is not in valid format"),
            severity: Severity::High,
            start_date: Some(start_cell.to_string()),
            end_date: None,
        });
    }

    let end = end_cell.to_datetime();
    if !end_cell.is_blank() && end.is_none() {
        issues.push(Issue {
            row: row_number,
            project_name: project_name.clone(),
            issue_type: IssueKind::InvalidDateFormat,
            description: format!("End date '{end_cell}' is not in valid format"),
            severity: Severity::High,
            start_date: None,
            end_date: Some(end_cell.to_string()),
        });
    }

    if start_cell.is_blank() {
        issues.push(Issue {
            row: row_number,
            project_name: project_name.clone(),
            issue_type: IssueKind::MissingDate,
            description: "Start date is missing".to_string(),
            severity: Severity::High,
            start_date: None,
            end_date: None,
        });
    }

    if end_cell.is_blank() {
        issues.push(Issue {
            row: row_number,
            project_name: project_name.clone(),
            issue_type: IssueKind::MissingDate,
            description: "End date is missing".to_string(),
            severity: Severity::High,
            start_date: None,
            end_date: None,
        });
    }

    // Cross-field checks need both dates. Each fires on its own, so an
    // inverted range does not hide a future start.
    let (Some(start), Some(end)) = (start, end) else {
        return;
    };

    if start > end {
        issues.push(Issue {
            row: row_number,
            project_name: project_name.clone(),
            issue_type: IssueKind::InvalidDateRange,
            description: format!(
                "Start date ({}) is after end date ({})",
                format_ymd(&start),
                format_ymd(&end)
            ),
            severity: Severity::High,
            start_date: Some(format_ymd(&start)),
            end_date: Some(format_ymd(&end)),
        });
    }

    if start > now {
        issues.push(Issue {
            row: row_number,
            project_name: project_name.clone(),
            issue_type: IssueKind::FutureStartDate,
            description: format!("Start date ({}) is in the future", format_ymd(&start)),
            severity: Severity::Medium,
            start_date: Some(format_ymd(&start)),
            end_date: None,
        });
    }

    let duration_days = (end - start).num_days();
    if duration_days > MAX_PROJECT_DAYS {
        let years = duration_days as f64 / DAYS_PER_YEAR;
        issues.push(Issue {
            row: row_number,
            project_name,
            issue_type: IssueKind::ExcessiveDuration,
            description: format!("Project duration ({years:.1} years) exceeds 2-year limit"),
            severity: Severity::Medium,
            start_date: Some(format_ymd(&start)),
            end_date: Some(format_ymd(&end)),
        });
    }
}
