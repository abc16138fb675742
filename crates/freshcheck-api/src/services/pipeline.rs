//! Intake pipeline: gate → validate → normalize → relay → shape.
//!
//! Strict forward flow for one upload. A rejection at the extension gate
//! or validation stage ends the request with a 400-class error; a relay
//! failure ends it with the classified transport error; normalization
//! never fails the request (fail-open). Each request runs its own pass
//! through a shared, stateless pipeline instance.

use std::time::Duration;

use anyhow::Result;
use freshcheck_core::{AnalysisResult, AppError, Config, UploadedImage};
use freshcheck_processing::{ImageNormalizer, ImageValidator};
use freshcheck_relay::{AnalysisClient, ResponseNormalizer};
use uuid::Uuid;

/// Extensions accepted at intake, matched on the final dot-suffix.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub struct IntakePipeline {
    validator: ImageValidator,
    normalizer: ImageNormalizer,
    client: AnalysisClient,
}

impl IntakePipeline {
    pub fn new(config: &Config) -> Result<Self> {
        let client = AnalysisClient::new(
            config.webhook_url.clone(),
            Duration::from_secs(config.webhook_timeout_secs),
        )?;

        Ok(Self {
            validator: ImageValidator::new(),
            normalizer: ImageNormalizer::new(),
            client,
        })
    }

    /// Run one upload through the full pipeline and produce the final
    /// analysis result, or the first classified error encountered.
    #[tracing::instrument(
        skip(self, upload),
        fields(
            filename = %upload.filename,
            content_type = %upload.content_type,
            size_bytes = upload.data.len(),
            operation = "analyze_upload"
        )
    )]
    pub async fn run(&self, upload: UploadedImage) -> Result<AnalysisResult, AppError> {
        if !has_allowed_extension(&upload.filename) {
            return Err(AppError::InvalidInput(
                "Invalid file type. Allowed types: png, jpg, jpeg".to_string(),
            ));
        }

        // Used both as the outbound `filename` field and as `image_source`
        // in the final result.
        let outbound_name =
            sanitize_filename(&format!("{}_{}", Uuid::new_v4(), upload.filename));

        let UploadedImage {
            data, content_type, ..
        } = upload;

        // Image decode is CPU-bound; run off the async pool to avoid
        // blocking other requests.
        let validator = self.validator.clone();
        let normalizer = self.normalizer.clone();
        let (validation, normalized) = tokio::task::spawn_blocking(move || {
            let validation = validator.validate(&data);
            if !validation.valid {
                return (validation, Vec::new());
            }
            let normalized = normalizer.normalize(&data);
            (validation, normalized)
        })
        .await
        .map_err(|e| AppError::Internal(format!("Image processing task failed: {}", e)))?;

        if !validation.valid {
            return Err(AppError::InvalidInput(validation.message));
        }

        let reply = self
            .client
            .send(&normalized, &outbound_name, &content_type)
            .await?;

        tracing::info!(image_source = %outbound_name, "Analysis completed");

        Ok(ResponseNormalizer::normalize(&reply, &outbound_name))
    }
}

/// True when the filename has a dot and its final suffix is an accepted
/// image extension (case-insensitive).
fn has_allowed_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

fn sanitize_filename(filename: &str) -> String {
    const MAX: usize = 255;
    let path = std::path::Path::new(filename);
    let base = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    if base.contains("..") {
        return "invalid_filename".to_string();
    }
    let s: String = base
        .chars()
        .take(MAX)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if s.trim().is_empty() || s.len() < 3 {
        "file".to_string()
    } else {
        s
    }
}
