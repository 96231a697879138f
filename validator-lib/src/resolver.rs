//! Required-column resolution.
//!
//! Every uploaded sheet must provide three logical columns. Matching is
//! case-insensitive and ignores surrounding whitespace, the first header
//! that matches a logical name wins, and matched headers are rewritten to
//! their canonical spelling so downstream code addresses columns by one
//! name. There is deliberately no positional fallback: a sheet that does
//! not name its columns is rejected, not guessed at.

use std::fmt;

use thiserror::Error;

use crate::dataset::{DataRow, Dataset};
use crate::utils::header_matches;

/// The three logical columns every sheet must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalColumn {
    ProjectName,
    StartDate,
    EndDate,
}

impl CanonicalColumn {
    pub const ALL: [CanonicalColumn; 3] = [
        CanonicalColumn::ProjectName,
        CanonicalColumn::StartDate,
        CanonicalColumn::EndDate,
    ];

    /// Canonical spelling, as it appears in headers and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            CanonicalColumn::ProjectName => "Project Name",
            CanonicalColumn::StartDate => "Start Date",
            CanonicalColumn::EndDate => "End Date",
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

fn required_columns() -> String {
    let names: Vec<&str> = CanonicalColumn::ALL.iter().map(|c| c.display_name()).collect();
    names.join(", ")
}

fn join_columns(columns: &[CanonicalColumn]) -> String {
    let names: Vec<&str> = columns.iter().map(|c| c.display_name()).collect();
    names.join(", ")
}

/// Structural rejection of a whole sheet, raised before any row-level
/// checks run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    #[error("Excel file is empty")]
    EmptyDataset,

    #[error("Excel file must have at least 3 columns with headers: {}", required_columns())]
    TooFewColumns { found: usize },

    #[error(
        "Missing required columns: {}. File must contain: {}",
        join_columns(.missing),
        required_columns()
    )]
    MissingColumns { missing: Vec<CanonicalColumn> },
}

/// A dataset whose required columns have been located and renamed to
/// their canonical spellings. Only [`resolve`] constructs one.
#[derive(Debug, Clone)]
pub struct CanonicalDataset {
    inner: Dataset,
}

impl CanonicalDataset {
    pub fn headers(&self) -> &[String] {
        self.inner.headers()
    }

    pub fn rows(&self) -> &[DataRow] {
        self.inner.rows()
    }

    pub fn row_count(&self) -> usize {
        self.inner.row_count()
    }
}

/// Locates the required columns and canonicalizes their headers.
///
/// Fails when the sheet has no data rows, has fewer than three columns,
/// or does not carry every required column. Extra columns are kept and
/// stay addressable under their original headers.
pub fn resolve(mut dataset: Dataset) -> Result<CanonicalDataset, StructuralError> {
    if dataset.row_count() == 0 {
        return Err(StructuralError::EmptyDataset);
    }
    if dataset.column_count() < CanonicalColumn::ALL.len() {
        return Err(StructuralError::TooFewColumns {
            found: dataset.column_count(),
        });
    }

    let mut mapping: Vec<(String, CanonicalColumn)> = Vec::new();
    let mut missing: Vec<CanonicalColumn> = Vec::new();

    for column in CanonicalColumn::ALL {
        let matched = dataset
            .headers()
            .iter()
            .find(|header| header_matches(header, column.display_name()));
        match matched {
            Some(header) => mapping.push((header.clone(), column)),
            None => missing.push(column),
        }
    }

    if !missing.is_empty() {
        return Err(StructuralError::MissingColumns { missing });
    }

    for (actual, column) in &mapping {
        dataset.rename_column(actual, column.display_name());
    }

    Ok(CanonicalDataset { inner: dataset })
}
