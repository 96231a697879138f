use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use validator_lib::{DecodeError, StructuralError};

/// Application-level error type for HTTP handlers.
///
/// Wraps the engine's structural and decode errors and adds the
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The upload does not carry an accepted spreadsheet extension.
    #[error("Invalid file type. Please upload an Excel file (.xlsx or .xls)")]
    InvalidFileType,

    /// The sheet was rejected as a whole before row validation.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// The bytes could not be read as a spreadsheet.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidFileType => (
                StatusCode::BAD_REQUEST,
                "INVALID_FILE_TYPE",
                self.to_string(),
            ),
            AppError::Structural(err) => {
                (StatusCode::BAD_REQUEST, "STRUCTURAL_ERROR", err.to_string())
            }
            AppError::Decode(err) => (StatusCode::BAD_REQUEST, "DECODE_ERROR", err.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
