//! Result Store: append-only persistence of finished evaluations.
//!
//! `AppState` holds an `Arc<dyn ResultStore>`. Production uses [`PgResultStore`].
//! Documents are insert-only: no read, update or delete path exists in this service.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::evaluation::EvaluationResult;

/// Collection (table) every evaluation is written to.
pub const COLLECTION: &str = "evaluation_results";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Inserts one immutable document and returns its id.
    async fn insert(&self, result: &EvaluationResult) -> Result<Uuid, StoreError>;

    /// Releases the underlying connection. Called once, after the server has stopped.
    async fn close(&self);
}

pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn insert(&self, result: &EvaluationResult) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        let statement = format!(
            r#"
            INSERT INTO {COLLECTION}
                (id, job_description, resume_text, match_percentage,
                 missing_keywords, candidate_summary, experience, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#
        );

        sqlx::query(&statement)
            .bind(id)
            .bind(&result.job_description)
            .bind(&result.resume_text)
            .bind(result.match_percentage)
            .bind(&result.missing_keywords)
            .bind(&result.candidate_summary)
            .bind(&result.experience)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        info!("Stored evaluation {id} in {COLLECTION}");
        Ok(id)
    }

    async fn close(&self) {
        info!("Closing PostgreSQL connection pool");
        self.pool.close().await;
    }
}
