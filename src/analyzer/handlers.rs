use axum::{Json, extract::State};

use crate::analyzer;
use crate::analyzer::dtos::{AnalyzeRequest, AnalyzeResponse};
use crate::app_state::AppState;

/// `POST /analyze`. Pipeline outcomes, including failures, are always
/// HTTP 200 with a structured body; callers look at the `error` field.
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    Json(analyzer::analyze(state.markup_source.as_ref(), &payload.url).await)
}
