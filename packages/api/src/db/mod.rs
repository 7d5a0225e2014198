//! # Database module: PostgreSQL storage for dashboard collections
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx or Tokio networking code.
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens a pool with up to
//! 5 connections and caches it. When the variable is missing the call fails
//! with [`crate::error::ApiError::MissingConfig`] instead of panicking, which is
//! how the dashboard detects an unconfigured backend.
//!
//! [`records`] holds the queries; migrations live in `packages/api/migrations`.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
pub mod records;

#[cfg(feature = "server")]
pub use pool::{database_url, get_pool};
