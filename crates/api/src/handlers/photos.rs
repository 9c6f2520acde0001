//! Handlers for event photo uploads.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecoconnect_core::error::CoreError;
use ecoconnect_core::types::DbId;
use ecoconnect_core::validation::validate_photo;
use ecoconnect_db::models::photo::PhotoUpload;
use ecoconnect_db::repositories::{EventRepo, PhotoRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Parsed multipart fields for an upload request.
#[derive(Default)]
struct UploadForm {
    event_id: Option<DbId>,
    caption: Option<String>,
    image: Option<Vec<u8>>,
}

/// POST /api/v1/interaction/upload
///
/// Multipart upload: `event_id` (text), optional `caption` (text), and
/// `image` (file). The image is validated (size, format, dimensions) before
/// anything touches the disk.
pub async fn upload(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<PhotoUpload>>)> {
    let form = read_form(multipart).await?;

    let event_id = form
        .event_id
        .ok_or_else(|| AppError::BadRequest("event_id field is required".into()))?;
    let bytes = form
        .image
        .ok_or_else(|| AppError::Core(CoreError::Validation("No image data received".into())))?;

    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let info = validate_photo(&bytes)?;

    // Everything past this point is an unexpected failure; report it as a
    // generic message rather than leaking paths or io details.
    let file_name = format!("{}.{}", Uuid::new_v4(), info.extension);
    let media_dir = std::path::Path::new(&state.config.media_dir);
    let save = async {
        tokio::fs::create_dir_all(media_dir).await?;
        tokio::fs::write(media_dir.join(&file_name), &bytes).await
    };
    if let Err(e) = save.await {
        tracing::error!(error = %e, event_id, "Photo save failed");
        return Err(AppError::InternalError("Failed to save photo".into()));
    }

    let photo = PhotoRepo::create(
        &state.pool,
        event.id,
        auth.user_id,
        &file_name,
        form.caption.as_deref().filter(|c| !c.trim().is_empty()),
    )
    .await?;

    tracing::info!(
        photo_id = photo.id,
        event_id,
        user_id = auth.user_id,
        width = info.width,
        height = info.height,
        "Photo uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// GET /api/v1/events/{id}/photos
///
/// List an event's photos, newest first.
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PhotoUpload>>>> {
    if EventRepo::find_by_id(&state.pool, event_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    let photos = PhotoRepo::list_for_event(&state.pool, event_id).await?;

    Ok(Json(DataResponse { data: photos }))
}

/// Drain the multipart stream into an [`UploadForm`].
async fn read_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("event_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid event_id field: {e}")))?;
                let id = text
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest("event_id must be an integer".into()))?;
                form.event_id = Some(id);
            }
            Some("caption") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid caption field: {e}")))?;
                form.caption = Some(text);
            }
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid image field: {e}")))?;
                form.image = Some(bytes.to_vec());
            }
            _ => {} // Unknown fields are ignored.
        }
    }

    Ok(form)
}
