//! Outbound relay to the external analysis webhook
//!
//! `AnalysisClient` delivers a normalized image to the configured n8n
//! webhook and classifies transport failures. `ResponseNormalizer` maps
//! the webhook's loosely-typed reply into the stable `AnalysisResult`
//! schema.

pub mod client;
pub mod response;

pub use client::{AnalysisClient, RelayError};
pub use response::ResponseNormalizer;
