//! Handler for the spreadsheet validation endpoint.

use std::io::Write;
use std::path::Path;

use axum::extract::Multipart;
use axum::Json;
use validator_lib::{load_dataset, resolve, validate_all, ValidationSummary};

use crate::error::{AppError, AppResult};
use crate::response::ValidationResponse;

/// Upload extensions accepted for validation.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// POST /api/validate
///
/// Accept a multipart upload carrying one spreadsheet under the `file`
/// field, validate it, and return the full report. Structural rejections
/// come back as 400 with the reason; row-level findings are part of the
/// 200 response, not errors.
pub async fn validate_upload(mut multipart: Multipart) -> AppResult<Json<ValidationResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // The extension gate runs before the body is pulled in
        let file_name = field.file_name().unwrap_or("").to_string();
        let Some(extension) = allowed_extension(&file_name) else {
            return Err(AppError::InvalidFileType);
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        tracing::info!(file_name = %file_name, bytes = data.len(), "Validating upload");
        let summary = run_validation(data, extension).await?;
        return Ok(Json(ValidationResponse::new(summary, file_name)));
    }

    Err(AppError::BadRequest(
        "No file received in multipart upload".to_string(),
    ))
}

/// Spill the upload to a temp file and run the engine off the async
/// runtime. The temp file is removed when the closure returns, on the
/// error paths included.
async fn run_validation(
    data: axum::body::Bytes,
    extension: String,
) -> Result<ValidationSummary, AppError> {
    let summary = tokio::task::spawn_blocking(move || -> Result<ValidationSummary, AppError> {
        let mut spooled = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&format!(".{extension}"))
            .tempfile()
            .map_err(|e| AppError::InternalError(format!("Failed to create temp file: {e}")))?;
        spooled
            .write_all(&data)
            .map_err(|e| AppError::InternalError(format!("Failed to spool upload: {e}")))?;

        let dataset = load_dataset(spooled.path(), None)?;
        let canonical = resolve(dataset)?;
        Ok(validate_all(&canonical))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Validation task failed: {e}")))??;

    Ok(summary)
}

fn allowed_extension(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())?
        .to_lowercase();
    ALLOWED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}
