use axum::{
    Json,
    extract::{
        Multipart, Path, State,
        multipart::MultipartRejection,
    },
    http::StatusCode,
};

use crate::{
    adapters::inbound::http::{
        dto::{
            DeleteResponseDto, DownloadLinkResponseDto, ListFilesResponseDto, UploadResponseDto,
        },
        error::ApiError,
        router::AppState,
    },
    domain::{
        models::UploadRequest,
        value_objects::ObjectKey,
    },
};

/// Multipart field that carries the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Pull the `file` part out of a multipart body.
///
/// Parts with another name, and a `file` part without a file name, are
/// ignored. Returns `None` when no usable file part exists.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<UploadRequest>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        return Ok(Some(UploadRequest {
            file_name,
            content_type,
            data,
        }));
    }

    Ok(None)
}

/// Handle file upload
pub async fn upload_file(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponseDto>), ApiError> {
    let mut multipart = multipart?;

    let request = read_upload(&mut multipart)
        .await?
        .ok_or_else(ApiError::missing_file)?;

    let stored = app_state.file_service.upload_file(request).await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// Handle file listing
pub async fn list_files(
    State(app_state): State<AppState>,
) -> Result<Json<ListFilesResponseDto>, ApiError> {
    let files = app_state.file_service.list_files().await?;

    Ok(Json(files.into()))
}

/// Handle signed download link generation
pub async fn download_file(
    State(app_state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DownloadLinkResponseDto>, ApiError> {
    let key = ObjectKey::new(filename)?;

    let link = app_state.file_service.create_download_link(&key).await?;

    Ok(Json(link.into()))
}

/// Handle file deletion
pub async fn delete_file(
    State(app_state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    let key = ObjectKey::new(filename)?;

    app_state.file_service.delete_file(&key).await?;

    Ok(Json(DeleteResponseDto::deleted(key.as_str())))
}
