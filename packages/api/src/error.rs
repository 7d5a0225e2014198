//! Server-side error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} is not set")]
    MissingConfig(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("assistant request failed: {0}")]
    Assistant(#[from] reqwest::Error),

    #[error("assistant returned no answer")]
    EmptyReply,
}
