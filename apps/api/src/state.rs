use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::store::ResultStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Where finished evaluations go. Default: `PgResultStore`.
    pub store: Arc<dyn ResultStore>,
    pub config: Config,
}
