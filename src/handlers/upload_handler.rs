//! File upload handler.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::models::UploadResponse;
use crate::services::FileService;

/// Upload a file
///
/// Streams the multipart part named `file` to the upload directory under the
/// configured size ceiling. A file with the same name is replaced.
#[utoipa::path(
    post,
    path = "/upload-file/",
    tag = "Files",
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Part named 'file'"),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Missing file part or invalid file name", body = crate::models::ErrorBody),
        (status = 413, description = "File exceeds the size ceiling", body = crate::models::ErrorBody)
    )
)]
pub async fn upload_file(
    file_service: web::Data<FileService>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let path = file_service.save_upload(&mut payload).await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        file_path: path.display().to_string(),
    }))
}
