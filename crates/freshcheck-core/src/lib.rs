//! Core types for the FreshCheck service
//!
//! Configuration, the application error taxonomy, and the stable output
//! models shared by the processing, relay, and API crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, LogLevel};
pub use models::{AnalysisResult, UploadedImage};
