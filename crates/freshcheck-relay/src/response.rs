//! Reply shaping for the frontend.
//!
//! The webhook's reply is a loosely-typed document whose shape may drift,
//! so every lookup falls back to a documented default. The analysis fields
//! are nested under `output`.

use freshcheck_core::AnalysisResult;
use serde_json::Value;

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Map an upstream reply into the stable output schema. Total: missing
    /// or mistyped fields fall back to defaults, never to an error.
    pub fn normalize(reply: &Value, image_source: &str) -> AnalysisResult {
        let output = reply.get("output");

        AnalysisResult {
            timestamp: text_or(reply.get("timestamp"), ""),
            image_source: image_source.to_string(),
            identified_food: text_or(nested(output, "identifiedFood"), "Unknown"),
            visual_assessment: text_or(nested(output, "visualAssessment"), "Unknown"),
            key_visual_indicators: text_or(nested(output, "keyIndicators"), ""),
            estimated_remaining_freshness_days: text_or(
                nested(output, "estimatedFreshnessDays"),
                "0",
            ),
            assessment_confidence: text_or(nested(output, "confidence"), "Low"),
            disclaimer: text_or(nested(output, "importantDisclaimer"), ""),
            user_verification_notes: String::new(),
            raw_response: reply.clone(),
        }
    }
}

fn nested<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent.and_then(|v| v.get(key))
}

/// Extract a string-ish value. Numbers and booleans are stringified rather
/// than dropped; anything else takes the default.
fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}
