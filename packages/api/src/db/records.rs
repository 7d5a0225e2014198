//! Collection storage in the `records` table.
//!
//! Every record is one row keyed by `(collection, id)` with its body in a
//! JSONB `payload`. `position` keeps the order in which a collection was
//! saved so reads return it unchanged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;

use store::{Developer, Lead, TrainingModule, User};

use crate::error::ApiError;

pub const USERS: &str = "users";
pub const LEADS: &str = "leads";
pub const DEVELOPERS: &str = "developers";
pub const TRAINING: &str = "training";

/// A model stored as one row.
pub trait Record: Serialize {
    fn record_id(&self) -> &str;
}

impl Record for User {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Lead {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Developer {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for TrainingModule {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Read a whole collection in saved order.
pub async fn fetch_all<T>(pool: &PgPool, collection: &str) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned + Send + Unpin + 'static,
{
    let rows: Vec<(Json<T>,)> = sqlx::query_as(
        "SELECT payload FROM records WHERE collection = $1 ORDER BY position, id",
    )
    .bind(collection)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(Json(item),)| item).collect())
}

/// Replace a whole collection atomically.
pub async fn replace_all<T: Record + Sync>(
    pool: &PgPool,
    collection: &str,
    items: &[T],
) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM records WHERE collection = $1")
        .bind(collection)
        .execute(&mut *tx)
        .await?;

    for (position, item) in items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO records (collection, id, position, payload) VALUES ($1, $2, $3, $4)",
        )
        .bind(collection)
        .bind(item.record_id())
        .bind(position as i64)
        .bind(Json(item))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(collection, count = items.len(), "collection replaced");
    Ok(())
}

/// Insert or update a single record, appending new ones at the end.
pub async fn upsert<T: Record + Sync>(
    pool: &PgPool,
    collection: &str,
    item: &T,
) -> Result<(), ApiError> {
    sqlx::query(
        "INSERT INTO records (collection, id, position, payload) \
         VALUES ($1, $2, (SELECT COUNT(*) FROM records WHERE collection = $1), $3) \
         ON CONFLICT (collection, id) DO UPDATE SET payload = EXCLUDED.payload, updated_at = now()",
    )
    .bind(collection)
    .bind(item.record_id())
    .bind(Json(item))
    .execute(pool)
    .await?;
    Ok(())
}

/// Round-trip a trivial query to prove the database answers.
pub async fn ping(pool: &PgPool) -> Result<(), ApiError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
