//! Image normalization for outbound transmission.
//!
//! Flattens transparency, downsizes oversized images, and re-encodes
//! everything to baseline JPEG so the webhook always receives one
//! canonical format. Fail-open: if any step errors, the original bytes
//! pass through unchanged; the upload already survived validation.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ImageReader, RgbImage};

/// Largest edge allowed before downscaling kicks in.
pub const MAX_EDGE: u32 = 1500;
/// JPEG quality for the canonical re-encode.
pub const JPEG_QUALITY: u8 = 85;

/// Normalizes uploads to bounded, opaque, JPEG-encoded images.
#[derive(Clone)]
pub struct ImageNormalizer {
    max_edge: u32,
    quality: u8,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageNormalizer {
    pub fn new() -> Self {
        Self {
            max_edge: MAX_EDGE,
            quality: JPEG_QUALITY,
        }
    }

    /// Normalize an image, falling back to the original bytes on any
    /// internal error. Never fails outward.
    pub fn normalize(&self, data: &[u8]) -> Vec<u8> {
        match self.try_normalize(data) {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    size_bytes = data.len(),
                    "Image normalization failed, passing original bytes through"
                );
                data.to_vec()
            }
        }
    }

    fn try_normalize(&self, data: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()?;

        // Flatten any alpha channel into opaque RGB.
        let mut rgb: RgbImage = img.to_rgb8();

        let (width, height) = rgb.dimensions();
        if width > self.max_edge || height > self.max_edge {
            let ratio = f64::min(
                self.max_edge as f64 / width as f64,
                self.max_edge as f64 / height as f64,
            );
            let new_width = ((width as f64 * ratio) as u32).max(1);
            let new_height = ((height as f64 * ratio) as u32).max(1);
            tracing::debug!(width, height, new_width, new_height, "Downscaling image");
            rgb = image::imageops::resize(&rgb, new_width, new_height, FilterType::Lanczos3);
        }

        let mut out = Vec::with_capacity(data.len());
        let mut encoder = JpegEncoder::new_with_quality(&mut out, self.quality);
        encoder.encode_image(&rgb)?;

        Ok(out)
    }
}
