//! Evaluation pipeline: one run per submission:
//! Extracting → Generating → Parsing → Persisting, then the caller displays the outcome.
//!
//! Every stage is fatal on error and nothing is retried. A run either stores exactly one
//! document and returns it, or stores nothing.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::parser::parse_model_output;
use crate::evaluation::prompts::build_prompt;
use crate::evaluation::store::ResultStore;
use crate::extraction::{extract_text_blocking, DocumentKind};
use crate::llm_client::TextGenerator;
use crate::models::evaluation::{EvaluationRequest, EvaluationResult, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extracting,
    Generating,
    Parsing,
    Persisting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extracting => "extracting",
            Stage::Generating => "generating",
            Stage::Parsing => "parsing",
            Stage::Persisting => "persisting",
        };
        f.write_str(name)
    }
}

/// A resume file whose type has already been checked.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub kind: DocumentKind,
    pub data: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutcome {
    pub id: Uuid,
    pub result: EvaluationResult,
    pub recommendation: Recommendation,
}

/// Runs the whole pipeline for one uploaded resume.
pub async fn run_evaluation(
    generator: &dyn TextGenerator,
    store: &dyn ResultStore,
    job_description: String,
    upload: ResumeUpload,
) -> Result<EvaluationOutcome, AppError> {
    info!(
        stage = %Stage::Extracting,
        file = %upload.file_name,
        mime = upload.kind.mime(),
        bytes = upload.data.len(),
        "Evaluation started"
    );
    let resume_text = extract_text_blocking(upload.data, upload.kind)
        .await
        .inspect_err(|e| error!(stage = %Stage::Extracting, "Evaluation failed: {e}"))?;

    let request = EvaluationRequest {
        resume_text,
        job_description,
    };
    score_and_store(generator, store, request).await
}

/// Generation, parsing and persistence for already-extracted resume text.
pub async fn score_and_store(
    generator: &dyn TextGenerator,
    store: &dyn ResultStore,
    request: EvaluationRequest,
) -> Result<EvaluationOutcome, AppError> {
    info!(
        stage = %Stage::Generating,
        resume_chars = request.resume_text.chars().count(),
        jd_chars = request.job_description.chars().count()
    );
    let prompt = build_prompt(&request.resume_text, &request.job_description);
    let raw = generator
        .generate(&prompt)
        .await
        .inspect_err(|e| error!(stage = %Stage::Generating, "Evaluation failed: {e}"))?;

    info!(stage = %Stage::Parsing, output_chars = raw.chars().count());
    let record = parse_model_output(&raw)
        .inspect_err(|e| error!(stage = %Stage::Parsing, "Evaluation failed: {e}"))?;

    let result = EvaluationResult::new(request, record);

    info!(stage = %Stage::Persisting, match_percentage = result.match_percentage);
    let id = store
        .insert(&result)
        .await
        .inspect_err(|e| error!(stage = %Stage::Persisting, "Evaluation failed: {e}"))?;

    let recommendation = result.recommendation();
    info!(%id, %recommendation, "Evaluation complete");

    Ok(EvaluationOutcome {
        id,
        result,
        recommendation,
    })
}
