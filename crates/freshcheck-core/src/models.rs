//! Output models
//!
//! `AnalysisResult` is the stable schema the frontend consumes. Every field
//! has a default so the struct is always fully populated, however sparse or
//! malformed the upstream reply turns out to be.

use serde::{Deserialize, Serialize};

/// A raw upload as received from the multipart form. Lives for the duration
/// of a single request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// Final analysis result returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub timestamp: String,
    /// Generated server-side filename; also sent upstream as `filename`.
    pub image_source: String,
    pub identified_food: String,
    pub visual_assessment: String,
    pub key_visual_indicators: String,
    pub estimated_remaining_freshness_days: String,
    pub assessment_confidence: String,
    pub disclaimer: String,
    /// Always empty at this stage; reserved for a later review step.
    pub user_verification_notes: String,
    /// Full upstream reply, embedded for traceability.
    pub raw_response: serde_json::Value,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            timestamp: String::new(),
            image_source: String::new(),
            identified_food: "Unknown".to_string(),
            visual_assessment: "Unknown".to_string(),
            key_visual_indicators: String::new(),
            estimated_remaining_freshness_days: "0".to_string(),
            assessment_confidence: "Low".to_string(),
            disclaimer: String::new(),
            user_verification_notes: String::new(),
            raw_response: serde_json::Value::Null,
        }
    }
}
