//! Audio listing, upload, deletion, and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use vidio_core::error::AppError;
use vidio_core::types::pagination::PageResponse;
use vidio_entity::audio::AudioFile;
use vidio_service::forms::UploadForm;

use crate::dto::response::{ApiResponse, FormDescriptor};
use crate::error::ApiError;
use crate::extractors::multipart::{file, multipart_error, text};
use crate::extractors::{AuthUser, Pagination, parse_audio_id};
use crate::state::AppState;

/// GET /audio_list/?page=N
pub async fn list_audio(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
) -> Result<Json<ApiResponse<PageResponse<AudioFile>>>, ApiError> {
    let result = state.listing_service.list(page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /upload/
pub async fn upload_form(_auth: AuthUser) -> Json<ApiResponse<FormDescriptor>> {
    Json(ApiResponse::ok(FormDescriptor::upload()))
}

/// POST /upload/ (multipart)
pub async fn upload_audio(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let max = state.config.storage.max_upload_size_bytes;
    let form = read_upload_form(multipart, max).await?;
    state.upload_service.upload(auth.context(), form).await?;
    Ok(Redirect::to("/audio_list/"))
}

/// POST /delete-audio/{id}/
pub async fn delete_audio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = parse_audio_id(&id)?;
    state.audio_service.delete(auth.context(), id).await?;
    Ok(Redirect::to("/audio_list/"))
}

/// GET /audio/{id}/file
pub async fn download_audio(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_audio_id(&id)?;
    let result = state.download_service.download(id).await?;

    let disposition = format!(
        "inline; filename=\"{}\"",
        result.filename.replace(['"', '\\'], "_")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, result.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Body::from_stream(result.stream),
    )
        .into_response())
}

/// Collect the upload form fields from a multipart body. Unknown parts are skipped.
async fn read_upload_form(mut multipart: Multipart, max_bytes: u64) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "audio", max_bytes))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = text(field, "audio", max_bytes).await?,
            "description" => form.description = text(field, "audio", max_bytes).await?,
            "village" => form.village = Some(text(field, "audio", max_bytes).await?),
            "audio" => form.file = Some(file(field, "audio", max_bytes).await?),
            other => debug!(field = other, "Ignoring unknown upload field"),
        }
    }

    Ok(form)
}
