//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::pipeline::run_evaluation;
use crate::models::evaluation::{EvaluationResult, Recommendation};
use crate::state::AppState;
use crate::web::upload::EvaluationForm;

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub id: Uuid,
    pub result: EvaluationResult,
    pub recommendation: Recommendation,
    /// `"{match_percentage}%"`, as shown on the result view
    pub match_display: String,
}

/// POST /api/v1/evaluations
///
/// Multipart form with `job_description` and `resume` (PDF or DOCX).
/// Runs extraction → generation → parsing → persistence and returns the stored result.
pub async fn handle_create_evaluation(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationResponse>, AppError> {
    let (job_description, upload) = EvaluationForm::read(multipart).await?.validate()?;

    let outcome = run_evaluation(
        state.generator.as_ref(),
        state.store.as_ref(),
        job_description,
        upload,
    )
    .await?;

    Ok(Json(EvaluationResponse {
        id: outcome.id,
        match_display: outcome.result.display_percentage(),
        result: outcome.result,
        recommendation: outcome.recommendation,
    }))
}
