//! Multipart extraction for the analyze endpoint.

use axum::extract::Multipart;
use freshcheck_core::{AppError, UploadedImage};

/// Extract the `image` field from a multipart form. The whole upload is
/// buffered in memory for the lifetime of the request.
///
/// Rejections mirror the browser upload flow: a missing part means the
/// form had no image input; an empty filename means the user submitted
/// without selecting a file.
pub async fn extract_image_field(mut multipart: Multipart) -> Result<UploadedImage, AppError> {
    let mut upload: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s: &str| s.to_string())
            .unwrap_or_default();
        let content_type = field
            .content_type()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read image data: {}", e)))?;

        upload = Some(UploadedImage {
            data: data.to_vec(),
            filename,
            content_type,
        });
    }

    let upload = upload.ok_or_else(|| AppError::InvalidInput("No image provided".to_string()))?;

    if upload.filename.is_empty() {
        return Err(AppError::InvalidInput("No selected image".to_string()));
    }

    Ok(upload)
}
