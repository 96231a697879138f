//! Shared builders for unit and integration tests.
//!
//! Only compiled with the `test` feature, which the dev-dependency on
//! this crate turns on automatically during testing.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::dataset::{Cell, DataRow, Dataset};

/// The canonical header row.
pub fn project_headers() -> Vec<String> {
    vec![
        "Project Name".to_string(),
        "Start Date".to_string(),
        "End Date".to_string(),
    ]
}

/// Builds a dataset with the given headers and positional rows. Rows are
/// numbered from 2, like data rows decoded from a file.
pub fn dataset_with_headers(headers: &[&str], rows: Vec<Vec<Cell>>) -> Dataset {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let data_rows = rows
        .into_iter()
        .enumerate()
        .map(|(index, cells)| {
            let mut by_header = HashMap::new();
            for (column, cell) in cells.into_iter().enumerate() {
                if column < headers.len() {
                    by_header.insert(headers[column].clone(), cell);
                }
            }
            DataRow::new(index + 2, by_header)
        })
        .collect();
    Dataset::new(headers, data_rows)
}

/// Builds a canonical three-column dataset from text cells. An empty
/// string stands for an empty cell.
pub fn dataset_from_strings(rows: &[(&str, &str, &str)]) -> Dataset {
    let cell = |value: &str| {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::String(value.to_string())
        }
    };
    let rows = rows
        .iter()
        .map(|(name, start, end)| vec![cell(name), cell(start), cell(end)])
        .collect();
    let headers = project_headers();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    dataset_with_headers(&header_refs, rows)
}

/// Builds a minimal single-sheet `.xlsx` in memory, with every cell as an
/// inline string. An empty string leaves the cell out, and a row of empty
/// strings leaves the whole row out, producing a blank row in the sheet.
pub fn xlsx_bytes(rows: &[&[&str]]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", WORKBOOK.to_string()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];

    for (name, content) in parts {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(name, options).expect("zip entry");
        zip.write_all(content.as_bytes()).expect("zip write");
    }

    zip.finish().expect("zip finish").into_inner()
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn sheet_xml(rows: &[&[&str]]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (row_index, cells) in rows.iter().enumerate() {
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let row_number = row_index + 1;
        xml.push_str(&format!(r#"<row r="{row_number}">"#));
        for (column_index, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            xml.push_str(&format!(
                r#"<c r="{}{row_number}" t="inlineStr"><is><t>{}</t></is></c>"#,
                column_ref(column_index),
                xml_escape(cell)
            ));
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn column_ref(index: usize) -> char {
    assert!(index < 26, "sheet builder only covers columns A through Z");
    char::from(b'A' + index as u8)
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
