//! Shared helpers for reading multipart form parts.

use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;

use vidio_core::error::AppError;
use vidio_service::forms::UploadedFile;

/// Read a text part.
pub(crate) async fn text(field: Field<'_>, file_field: &str, max_bytes: u64) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| multipart_error(e, file_field, max_bytes))
}

/// Read a file part.
pub(crate) async fn file(
    field: Field<'_>,
    file_field: &str,
    max_bytes: u64,
) -> Result<UploadedFile, AppError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| multipart_error(e, file_field, max_bytes))?;
    Ok(UploadedFile { file_name, data })
}

/// An oversized body is blamed on the form's file input.
pub(crate) fn multipart_error(err: MultipartError, file_field: &str, max_bytes: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::invalid_field(
            file_field,
            format!("File exceeds maximum upload size of {max_bytes} bytes."),
        )
    } else {
        AppError::validation(format!("Malformed upload: {}", err.body_text()))
    }
}
