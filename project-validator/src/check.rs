//! The `check` subcommand: validate a local file and print the report.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Args;
use validator_lib::{load_dataset, resolve, validate_all};

use crate::response::ValidationResponse;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the .xlsx or .xls file to validate
    #[arg(short, long)]
    pub file: String,

    /// Sheet name to validate (if not specified, validates the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Write the JSON report to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Runs one validation and prints or writes the JSON report. Row-level
/// findings are part of a successful run; only structural rejections and
/// IO problems surface as errors.
pub fn run(args: &CheckArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(&args.file, args.sheet.as_deref())?;
    let canonical = resolve(dataset)?;
    let summary = validate_all(&canonical);

    let file_name = Path::new(&args.file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.clone());
    let report = ValidationResponse::new(summary, file_name);

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write report to {path}"))?;
            println!("✅ Report written to {path}");
        }
        None => println!("{json}"),
    }

    if report.valid_rows == report.total_rows {
        eprintln!("✅ All {} rows passed validation", report.total_rows);
    } else {
        eprintln!(
            "❌ {} of {} rows have issues ({} findings)",
            report.total_rows - report.valid_rows,
            report.total_rows,
            report.issues.len()
        );
    }

    Ok(())
}
