pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as api;
use crate::state::AppState;
use crate::web::handlers as web;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML views
        .route("/", get(web::handle_home))
        .route(
            "/evaluate",
            get(web::handle_evaluate_form).post(web::handle_evaluate_submit),
        )
        // JSON API
        .route("/api/v1/evaluations", post(api::handle_create_evaluation))
        .layer(body_limit)
        .with_state(state)
}
