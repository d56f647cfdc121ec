//! POST /upload — accepts a celebrity photo.
//!
//! Validates that the payload is an image and acknowledges receipt. The
//! celebrity-recognition step itself runs outside this service; the
//! recognized name is what clients later send to `POST /ask`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::upload::upload_response::UploadResponse,
};

/// Field name the upload form uses for the photo.
const IMAGE_FIELD: &str = "image";

/// Handler: POST /upload
///
/// Expects `multipart/form-data` with an `image` field. Oversized bodies
/// answer 413 with a friendly message; payloads that do not look like an
/// image answer 400.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return Err(map_multipart_error(err, &state)),
        };

        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|err| map_multipart_error(err, &state))?;

        let content_type = sniff_image(&data).ok_or_else(|| {
            AppError::BadRequest("uploaded file does not look like an image".into())
        })?;

        return Ok(Json(UploadResponse {
            file_name,
            content_type: content_type.to_string(),
            size_bytes: data.len(),
        }));
    }

    Err(AppError::BadRequest(format!(
        "multipart field `{IMAGE_FIELD}` is missing"
    )))
}

/// Maps multipart read failures, keeping the body-limit case on 413 with
/// the user-facing message.
fn map_multipart_error(err: MultipartError, state: &AppState) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge(state.upload_limit_mb)
    } else {
        AppError::BadRequest(err.to_string())
    }
}

/// Sniffs the image format from magic bytes.
fn sniff_image(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}
