//! Reading spreadsheet files into a [`Dataset`].
//!
//! The first sheet row is the header row. Fully blank rows are dropped,
//! with the surrounding row numbering preserved, so findings always point
//! at the row the user sees in their spreadsheet program.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use crate::dataset::{Cell, DataRow, Dataset};
use crate::utils::{clean_header, excel_serial_to_datetime};

/// Failure to read a file as a tabular spreadsheet at all.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to load Excel file: {0}")]
    Open(#[from] calamine::Error),

    #[error("Failed to read sheet '{name}': {source}")]
    Sheet {
        name: String,
        source: calamine::Error,
    },

    #[error("The workbook contains no sheets")]
    NoSheets,
}

/// Loads one sheet of a workbook. `sheet` defaults to the first sheet in
/// the file. The format is detected from the file extension.
pub fn load_dataset(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<Dataset, DecodeError> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(DecodeError::NoSheets)?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| DecodeError::Sheet {
            name: sheet_name.clone(),
            source,
        })?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<DataRow> = Vec::new();

    for (row_index, row) in range.rows().enumerate() {
        if row_index == 0 {
            headers = row.iter().map(|cell| clean_header(&cell.to_string())).collect();
            continue;
        }

        let is_blank_row = row.iter().all(|cell| match cell {
            Data::Empty => true,
            Data::String(text) => text.trim().is_empty(),
            Data::Error(_) => true,
            _ => false,
        });
        if is_blank_row {
            continue;
        }

        // Duplicate headers bind their first column
        let mut cells: HashMap<String, Cell> = HashMap::new();
        for (column_index, cell) in row.iter().enumerate() {
            if column_index < headers.len() {
                cells
                    .entry(headers[column_index].clone())
                    .or_insert_with(|| convert_cell(cell));
            }
        }

        // Sheet indices are 0-based and include the header, file rows are
        // 1-based, so the first data row lands on row 2.
        rows.push(DataRow::new(row_index + 1, cells));
    }

    Ok(Dataset::new(headers, rows))
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(text) => Cell::String(text.clone()),
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) => Cell::Float(*value),
        Data::Bool(value) => Cell::Bool(*value),
        // Error cells carry no usable value
        Data::Error(_) => Cell::Empty,
        Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
            Some(parsed) => Cell::DateTime(parsed),
            None => Cell::Float(dt.as_f64()),
        },
        Data::DateTimeIso(text) => Cell::String(text.clone()),
        Data::DurationIso(text) => Cell::String(text.clone()),
    }
}
