//! Core engine for validating project spreadsheets.
//!
//! The pipeline has three stages: [`workbook::load_dataset`] decodes a
//! file into a [`Dataset`], [`resolver::resolve`] locates the required
//! columns and canonicalizes their headers, and [`rules::validate_all`]
//! runs the row-level rules and aggregates the findings. Structural
//! problems reject the whole file as a [`StructuralError`]; everything
//! row-level comes back as issues in the [`ValidationSummary`], never as
//! an error.

pub mod dataset;
pub mod report;
pub mod resolver;
pub mod rules;
pub mod utils;
pub mod workbook;

#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use dataset::{Cell, DataRow, Dataset};
pub use report::{Issue, IssueKind, Severity, ValidationSummary};
pub use resolver::{resolve, CanonicalColumn, CanonicalDataset, StructuralError};
pub use rules::validate_all;
pub use workbook::{load_dataset, DecodeError};
