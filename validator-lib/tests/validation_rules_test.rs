//! Row validation over whole datasets.

mod common;

use std::collections::HashSet;

use chrono::{Duration, Local};
use proptest::prelude::*;

use common::{issue_kinds, resolved};
use validator_lib::test_utils::dataset_from_strings;
use validator_lib::{resolve, validate_all, IssueKind, Severity};

#[test]
fn mixed_dataset_reports_every_problem_in_row_order() {
    let soon = (Local::now().date_naive() + Duration::days(60))
        .format("%Y-%m-%d")
        .to_string();
    let later = (Local::now().date_naive() + Duration::days(90))
        .format("%Y-%m-%d")
        .to_string();

    let dataset = resolved(&[
        ("Website Redesign", "2024-01-15", "2024-06-30"),
        ("", "2024-02-01", "2024-05-15"),
        ("Mobile App", "not a date", "2024-12-31"),
        ("Data Migration", "2024-03-01", ""),
        ("Cloud Setup", "2024-06-01", "2024-01-01"),
        ("AI Research", "2023-01-01", "2025-06-30"),
        ("Quantum Pilot", &soon, &later),
    ]);
    let summary = validate_all(&dataset);

    assert_eq!(summary.total_rows, 7);
    assert_eq!(summary.valid_rows, 1);
    assert_eq!(
        issue_kinds(&summary),
        vec![
            IssueKind::MissingProjectName,
            IssueKind::InvalidDateFormat,
            IssueKind::MissingDate,
            IssueKind::InvalidDateRange,
            IssueKind::ExcessiveDuration,
            IssueKind::FutureStartDate,
        ]
    );
    let rows: Vec<usize> = summary.issues.iter().map(|issue| issue.row).collect();
    assert_eq!(rows, vec![3, 4, 5, 6, 7, 8]);
}

#[test]
fn one_bad_row_can_carry_several_findings() {
    let dataset = resolved(&[("", "not a date", "")]);
    let summary = validate_all(&dataset);

    assert_eq!(
        issue_kinds(&summary),
        vec![
            IssueKind::MissingProjectName,
            IssueKind::InvalidDateFormat,
            IssueKind::MissingDate,
        ]
    );
    // The name finding keeps "Unknown"; everything after falls back to
    // the row placeholder
    assert_eq!(summary.issues[0].project_name, "Unknown");
    assert_eq!(summary.issues[1].project_name, "Row 2");
    assert_eq!(summary.issues[2].project_name, "Row 2");

    // Three findings, one flagged row
    assert_eq!(summary.total_rows, 1);
    assert_eq!(summary.valid_rows, 0);
}

#[test]
fn severities_match_the_rule_catalogue() {
    let dataset = resolved(&[
        ("", "2024-01-01", "2024-06-30"),
        ("Alpha", "garbled", "2024-06-30"),
        ("Beta", "", "2024-06-30"),
        ("Gamma", "2024-06-01", "2024-01-01"),
        ("Delta", "2019-01-01", "2023-06-30"),
    ]);
    let summary = validate_all(&dataset);

    let severities: Vec<Severity> = summary.issues.iter().map(|issue| issue.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::High,   // missing name
            Severity::High,   // invalid format
            Severity::High,   // missing date
            Severity::High,   // inverted range
            Severity::Medium, // excessive duration
        ]
    );
}

#[test]
fn all_valid_rows_mean_no_issues() {
    let dataset = resolved(&[
        ("Alpha", "2024-01-01", "2024-06-30"),
        ("Beta", "01/15/2024", "03/30/2024"),
        ("Gamma", "15 Jan 2024", "June 30, 2024"),
        ("Delta", "15/01/2024", "20/03/2024"),
    ]);
    let summary = validate_all(&dataset);
    assert!(summary.issues.is_empty());
    assert_eq!(summary.valid_rows, 4);
}

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("2024-01-01".to_string()),
        Just("2024-06-30".to_string()),
        Just("2019-03-01".to_string()),
        Just("2035-01-01".to_string()),
        Just("not a date".to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn summary_counts_always_reconcile(
        rows in prop::collection::vec((cell_text(), cell_text(), cell_text()), 1..12)
    ) {
        let tuples: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|(name, start, end)| (name.as_str(), start.as_str(), end.as_str()))
            .collect();
        let dataset = resolve(dataset_from_strings(&tuples)).unwrap();
        let summary = validate_all(&dataset);

        let flagged: HashSet<usize> = summary.issues.iter().map(|issue| issue.row).collect();
        prop_assert_eq!(summary.total_rows, tuples.len());
        prop_assert_eq!(summary.valid_rows + flagged.len(), summary.total_rows);

        // Issues stay in row order and inside the data range
        let issue_rows: Vec<usize> = summary.issues.iter().map(|issue| issue.row).collect();
        let mut sorted = issue_rows.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&issue_rows, &sorted);
        for row in issue_rows {
            prop_assert!((2..=tuples.len() + 1).contains(&row));
        }
    }

    #[test]
    fn no_input_ever_panics_validation(
        rows in prop::collection::vec(
            ("\\PC{0,20}", "\\PC{0,20}", "\\PC{0,20}"),
            1..8
        )
    ) {
        let tuples: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|(name, start, end)| (name.as_str(), start.as_str(), end.as_str()))
            .collect();
        let dataset = resolve(dataset_from_strings(&tuples)).unwrap();
        let summary = validate_all(&dataset);
        prop_assert!(summary.valid_rows <= summary.total_rows);
    }
}
