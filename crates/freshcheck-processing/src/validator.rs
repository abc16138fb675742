//! Image validation: decodability and dimension bounds.

use std::io::Cursor;

use image::ImageReader;

/// Minimum accepted width/height in pixels.
pub const MIN_DIMENSION: u32 = 100;
/// Maximum accepted width/height in pixels.
pub const MAX_DIMENSION: u32 = 4000;

/// Outcome of validating an upload.
///
/// Invariant: `valid == false` always carries a non-empty message suitable
/// for returning to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: "Image validation successful".to_string(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validates that uploaded bytes decode as an image within dimension bounds.
#[derive(Clone)]
pub struct ImageValidator {
    min_dimension: u32,
    max_dimension: u32,
}

impl Default for ImageValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageValidator {
    pub fn new() -> Self {
        Self {
            min_dimension: MIN_DIMENSION,
            max_dimension: MAX_DIMENSION,
        }
    }

    /// Validate an upload. Reads the slice only; the caller's buffer is
    /// untouched and can be re-read by later stages.
    pub fn validate(&self, data: &[u8]) -> ValidationResult {
        let decoded = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(anyhow::Error::from)
            .and_then(|reader| reader.decode().map_err(anyhow::Error::from));

        let img = match decoded {
            Ok(img) => img,
            Err(e) => return ValidationResult::rejected(format!("Invalid image file: {}", e)),
        };

        let (width, height) = (img.width(), img.height());

        if width < self.min_dimension || height < self.min_dimension {
            return ValidationResult::rejected(format!(
                "Image is too small. Minimum dimensions: {}x{} pixels.",
                self.min_dimension, self.min_dimension
            ));
        }

        if width > self.max_dimension || height > self.max_dimension {
            return ValidationResult::rejected(format!(
                "Image is too large. Maximum dimensions: {}x{} pixels.",
                self.max_dimension, self.max_dimension
            ));
        }

        ValidationResult::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([120, 180, 60]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_accepts_in_bounds_image() {
        let validator = ImageValidator::new();
        let result = validator.validate(&png_bytes(200, 200));
        assert!(result.valid);
        assert_eq!(result.message, "Image validation successful");
    }

    #[test]
    fn test_accepts_boundary_dimensions() {
        let validator = ImageValidator::new();
        assert!(validator.validate(&png_bytes(100, 100)).valid);
        assert!(validator.validate(&png_bytes(100, 4000)).valid);
    }

    #[test]
    fn test_rejects_too_small() {
        let validator = ImageValidator::new();
        let result = validator.validate(&png_bytes(50, 50));
        assert!(!result.valid);
        assert_eq!(
            result.message,
            "Image is too small. Minimum dimensions: 100x100 pixels."
        );
    }

    #[test]
    fn test_rejects_one_small_dimension() {
        let validator = ImageValidator::new();
        let result = validator.validate(&png_bytes(99, 500));
        assert!(!result.valid);
        assert!(result.message.contains("too small"));
    }

    #[test]
    fn test_rejects_too_large() {
        let validator = ImageValidator::new();
        let result = validator.validate(&png_bytes(4001, 100));
        assert!(!result.valid);
        assert_eq!(
            result.message,
            "Image is too large. Maximum dimensions: 4000x4000 pixels."
        );
    }

    #[test]
    fn test_rejects_non_image_bytes() {
        let validator = ImageValidator::new();
        let result = validator.validate(b"definitely not an image");
        assert!(!result.valid);
        assert!(result.message.starts_with("Invalid image file: "));
    }

    #[test]
    fn test_invalid_always_has_reason() {
        let validator = ImageValidator::new();
        for data in [&b""[..], b"\x89PNG\r\n\x1a\n", b"GIF89a"] {
            let result = validator.validate(data);
            assert!(!result.valid);
            assert!(!result.message.is_empty());
        }
    }

    #[test]
    fn test_input_is_rereadable_after_validation() {
        let validator = ImageValidator::new();
        let data = png_bytes(200, 200);
        assert!(validator.validate(&data).valid);
        // Same buffer decodes again from the start.
        assert!(validator.validate(&data).valid);
    }
}
