//! Food analysis endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use freshcheck_core::AnalysisResult;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_image_field;

/// Analyze a food photograph.
///
/// Accepts a multipart form with a single `image` field, relays the
/// normalized image to the analysis webhook, and returns the shaped
/// result. All rejection and failure cases render through
/// [`HttpAppError`](crate::error::HttpAppError).
#[tracing::instrument(skip(state, multipart), fields(operation = "analyze_food"))]
pub async fn analyze_food(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, HttpAppError> {
    let upload = extract_image_field(multipart).await?;

    let result = state.pipeline.run(upload).await?;

    Ok(Json(result))
}
