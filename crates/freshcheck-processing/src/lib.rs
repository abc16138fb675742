//! Image intake processing
//!
//! Validation (decodability + dimension bounds) and normalization
//! (alpha flattening, bounded downscale, canonical JPEG re-encode) for
//! uploaded food photographs. Both stages operate on in-memory byte
//! slices; nothing touches disk.

pub mod normalizer;
pub mod validator;

pub use normalizer::ImageNormalizer;
pub use validator::{ImageValidator, ValidationResult};
