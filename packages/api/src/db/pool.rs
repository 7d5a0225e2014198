//! Database connection pool using OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::error::ApiError;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// The configured `DATABASE_URL`, if any. Blank values count as unset.
pub fn database_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Get or initialize the database connection pool.
/// A missing `DATABASE_URL` is reported as [`ApiError::MissingConfig`] and
/// retried on the next call.
pub async fn get_pool() -> Result<&'static PgPool, ApiError> {
    POOL.get_or_try_init(|| async {
        let database_url = database_url().ok_or(ApiError::MissingConfig("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;
        Ok::<_, ApiError>(pool)
    })
    .await
}
