//! Helpers shared by the integration tests.

use validator_lib::test_utils::dataset_from_strings;
use validator_lib::{resolve, CanonicalDataset, IssueKind, ValidationSummary};

/// Resolves a canonical three-column dataset built from text cells.
pub fn resolved(rows: &[(&str, &str, &str)]) -> CanonicalDataset {
    resolve(dataset_from_strings(rows)).expect("dataset should resolve")
}

/// The issue kinds of a summary, in report order.
pub fn issue_kinds(summary: &ValidationSummary) -> Vec<IssueKind> {
    summary.issues.iter().map(|issue| issue.issue_type).collect()
}
