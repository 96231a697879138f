//! In-memory tabular model decoupled from the workbook reader.
//!
//! A [`Dataset`] is what the rest of the crate operates on: a header row
//! plus data rows keyed by header name. Row numbers are the 1-based
//! positions from the original file, so the first data row is row 2.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDateTime;

use crate::utils::{excel_serial_to_datetime, parse_date_string};

static EMPTY_CELL: Cell = Cell::Empty;

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// True when the cell carries no usable value: empty, or text that is
    /// only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::String(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Interpret the cell as a calendar date, if it holds one.
    ///
    /// Native datetime cells pass through unchanged, numbers are read as
    /// Excel serial dates and text is tried against the accepted date
    /// formats. Booleans and empty cells never parse.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(value) => Some(*value),
            Cell::String(raw) => parse_date_string(raw),
            Cell::Int(serial) => excel_serial_to_datetime(*serial as f64),
            Cell::Float(serial) => excel_serial_to_datetime(*serial),
            Cell::Bool(_) | Cell::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::String(text) => write!(f, "{text}"),
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Bool(value) => write!(f, "{value}"),
            Cell::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// One data row, keyed by header name.
#[derive(Debug, Clone)]
pub struct DataRow {
    row_number: usize,
    cells: HashMap<String, Cell>,
}

impl DataRow {
    pub fn new(row_number: usize, cells: HashMap<String, Cell>) -> Self {
        DataRow { row_number, cells }
    }

    /// 1-based row position in the original file, counting the header row.
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Cell under the given header. Headers the row does not carry read as
    /// empty, so short rows behave like rows padded with blanks.
    pub fn get(&self, header: &str) -> &Cell {
        self.cells.get(header).unwrap_or(&EMPTY_CELL)
    }

    pub(crate) fn rename(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        if let Some(cell) = self.cells.remove(from) {
            self.cells.insert(to.to_string(), cell);
        }
    }
}

/// A decoded sheet: headers in file order plus the retained data rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<DataRow>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<DataRow>) -> Self {
        Dataset { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Rewrites one header, in the header list and in every row.
    pub(crate) fn rename_column(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        for header in &mut self.headers {
            if header == from {
                *header = to.to_string();
                break;
            }
        }
        for row in &mut self.rows {
            row.rename(from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn blank_detection_covers_whitespace_strings() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::String("   ".to_string()).is_blank());
        assert!(Cell::String("\t".to_string()).is_blank());
        assert!(!Cell::String("x".to_string()).is_blank());
        assert!(!Cell::Int(0).is_blank());
        assert!(!Cell::Bool(false).is_blank());
    }

    #[test]
    fn datetime_cells_pass_through() {
        let when = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(Cell::DateTime(when).to_datetime(), Some(when));
    }

    #[test]
    fn numeric_cells_read_as_excel_serial_dates() {
        // Serial 45292 is 2024-01-01 in the 1900 date system
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Cell::Int(45292).to_datetime(), Some(expected));
        assert_eq!(Cell::Float(45292.0).to_datetime(), Some(expected));
    }

    #[test]
    fn boolean_cells_never_parse_as_dates() {
        assert_eq!(Cell::Bool(true).to_datetime(), None);
        assert_eq!(Cell::Bool(false).to_datetime(), None);
    }

    #[test]
    fn missing_header_reads_as_empty() {
        let row = DataRow::new(2, HashMap::new());
        assert_eq!(row.get("Anything"), &Cell::Empty);
    }
}
