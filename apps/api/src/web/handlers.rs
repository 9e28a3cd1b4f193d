//! Axum route handlers for the HTML views.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::pipeline::run_evaluation;
use crate::state::AppState;
use crate::web::upload::EvaluationForm;
use crate::web::views::{ErrorPage, EvaluatePage, HomePage, ResultPage, APP_TITLE};

/// GET /
pub async fn handle_home() -> Result<Html<String>, AppError> {
    Ok(Html(HomePage { title: APP_TITLE }.render()?))
}

/// GET /evaluate
pub async fn handle_evaluate_form() -> Result<Html<String>, AppError> {
    Ok(Html(EvaluatePage::new("", None).render()?))
}

/// POST /evaluate
///
/// Input problems re-render the form with a visible notice and the pipeline never runs.
/// Pipeline failures render the error view; nothing has been stored in that case.
pub async fn handle_evaluate_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let form = match EvaluationForm::read(multipart).await {
        Ok(form) => form,
        Err(err @ (AppError::Validation(_) | AppError::PayloadTooLarge(_))) => {
            info!("Evaluation form unreadable: {err}");
            return render_form_notice("", err);
        }
        Err(err) => return render_failure(err),
    };
    let job_description = form.job_description.clone();

    let (job_description, upload) = match form.validate() {
        Ok(valid) => valid,
        Err(err @ (AppError::Validation(_) | AppError::UnsupportedMediaType(_))) => {
            info!("Evaluation form rejected: {err}");
            return render_form_notice(&job_description, err);
        }
        Err(err) => return render_failure(err),
    };

    let outcome = match run_evaluation(
        state.generator.as_ref(),
        state.store.as_ref(),
        job_description,
        upload,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(err) => return render_failure(err),
    };

    match ResultPage::new(&outcome).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

fn render_form_notice(job_description: &str, err: AppError) -> Response {
    let (status, _, message) = err.parts();
    match EvaluatePage::new(job_description, Some(message.as_str())).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

fn render_failure(err: AppError) -> Response {
    let (status, _, message) = err.parts();
    let page = ErrorPage {
        title: APP_TITLE,
        status: status.as_u16(),
        message: &message,
    };
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}
