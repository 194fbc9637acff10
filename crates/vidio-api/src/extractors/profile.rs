//! Profile edit form extractor.

use axum::Form;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use tracing::debug;

use vidio_core::error::AppError;
use vidio_service::forms::ProfileForm;

use super::multipart::{file, multipart_error, text};
use crate::error::ApiError;
use crate::state::AppState;

/// The submitted profile form.
///
/// Accepts a urlencoded body, or a multipart body that may also carry a
/// new picture in its `avatar` part. An empty `avatar` part keeps the
/// current picture.
#[derive(Debug, Clone)]
pub struct ProfileSubmission(pub ProfileForm);

impl FromRequest<AppState> for ProfileSubmission {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<ProfileForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            return Ok(Self(form));
        }

        let max_bytes = state.config.storage.max_upload_size_bytes;
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let mut form = ProfileForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "avatar", max_bytes))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "username" => form.username = text(field, "avatar", max_bytes).await?,
                "email" => form.email = text(field, "avatar", max_bytes).await?,
                "bio" => form.bio = text(field, "avatar", max_bytes).await?,
                "avatar" => {
                    let upload = file(field, "avatar", max_bytes).await?;
                    if !(upload.file_name.is_empty() && upload.data.is_empty()) {
                        form.avatar = Some(upload);
                    }
                }
                other => debug!(field = other, "Ignoring unknown profile field"),
            }
        }
        Ok(Self(form))
    }
}
