//! # API crate: fullstack server functions for PSM Hub
//!
//! Defines every Dioxus server function the web and desktop frontends call.
//! Each public `async fn` here is annotated with `#[get(...)]` or
//! `#[post(...)]` and compiled twice: once with the full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | - | PostgreSQL pool (lazy `OnceCell` singleton) and `records` queries |
//! | [`assistant`] | `server` | Gemini client behind [`ask_assistant`] |
//! | [`error`] | `server` | [`error::ApiError`] |
//!
//! ## Server functions exposed here
//!
//! - **Collections**: `list_users`, `list_leads`, `list_developers`, `list_training`,
//!   `save_user`, `save_leads`, `save_developers`, `save_training`
//! - **Diagnostics**: `test_connection`
//! - **Assistant**: `ask_assistant`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
pub mod assistant;
pub mod db;
#[cfg(feature = "server")]
pub mod error;

pub use store::{CloudDiagnostics, Developer, Lead, TrainingModule, User};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of an assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

/// List all users.
#[cfg(feature = "server")]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::fetch_all(pool, db::records::USERS)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    Ok(Vec::new())
}

/// List all leads.
#[cfg(feature = "server")]
#[get("/api/leads")]
pub async fn list_leads() -> Result<Vec<Lead>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::fetch_all(pool, db::records::LEADS)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/leads")]
pub async fn list_leads() -> Result<Vec<Lead>, ServerFnError> {
    Ok(Vec::new())
}

/// List all developer folders.
#[cfg(feature = "server")]
#[get("/api/developers")]
pub async fn list_developers() -> Result<Vec<Developer>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::fetch_all(pool, db::records::DEVELOPERS)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/developers")]
pub async fn list_developers() -> Result<Vec<Developer>, ServerFnError> {
    Ok(Vec::new())
}

/// List all training modules.
#[cfg(feature = "server")]
#[get("/api/training")]
pub async fn list_training() -> Result<Vec<TrainingModule>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::fetch_all(pool, db::records::TRAINING)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/training")]
pub async fn list_training() -> Result<Vec<TrainingModule>, ServerFnError> {
    Ok(Vec::new())
}

/// Insert or update one user.
#[cfg(feature = "server")]
#[post("/api/users/save")]
pub async fn save_user(user: User) -> Result<(), ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::upsert(pool, db::records::USERS, &user)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/users/save")]
pub async fn save_user(user: User) -> Result<(), ServerFnError> {
    Ok(())
}

/// Replace the lead collection.
#[cfg(feature = "server")]
#[post("/api/leads/save")]
pub async fn save_leads(leads: Vec<Lead>) -> Result<(), ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::replace_all(pool, db::records::LEADS, &leads)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/leads/save")]
pub async fn save_leads(leads: Vec<Lead>) -> Result<(), ServerFnError> {
    Ok(())
}

/// Replace the developer collection.
#[cfg(feature = "server")]
#[post("/api/developers/save")]
pub async fn save_developers(developers: Vec<Developer>) -> Result<(), ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::replace_all(pool, db::records::DEVELOPERS, &developers)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/developers/save")]
pub async fn save_developers(developers: Vec<Developer>) -> Result<(), ServerFnError> {
    Ok(())
}

/// Replace the training collection.
#[cfg(feature = "server")]
#[post("/api/training/save")]
pub async fn save_training(modules: Vec<TrainingModule>) -> Result<(), ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    db::records::replace_all(pool, db::records::TRAINING, &modules)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/training/save")]
pub async fn save_training(modules: Vec<TrainingModule>) -> Result<(), ServerFnError> {
    Ok(())
}

/// Report which backend features are configured and whether the database
/// answers. Never fails because of the database itself: an unreachable
/// database is reported as offline.
#[cfg(feature = "server")]
#[get("/api/diagnostics")]
pub async fn test_connection() -> Result<CloudDiagnostics, ServerFnError> {
    use store::{BackendFlags, CloudStatus};

    let config = BackendFlags {
        has_url: db::database_url().is_some(),
        has_ai: assistant::api_key().is_some(),
    };

    let status = if config.has_url {
        let probe = match db::get_pool().await {
            Ok(pool) => db::records::ping(pool).await,
            Err(e) => Err(e),
        };
        match probe {
            Ok(()) => CloudStatus::Online,
            Err(e) => {
                tracing::warn!("database probe failed: {e}");
                CloudStatus::Offline
            }
        }
    } else {
        CloudStatus::Offline
    };

    Ok(CloudDiagnostics { status, config })
}

#[cfg(not(feature = "server"))]
#[get("/api/diagnostics")]
pub async fn test_connection() -> Result<CloudDiagnostics, ServerFnError> {
    Ok(CloudDiagnostics::offline())
}

/// Ask the assistant. `context` carries the lead handed over from the lead
/// detail screen, if any.
#[cfg(feature = "server")]
#[post("/api/assistant")]
pub async fn ask_assistant(
    messages: Vec<ChatMessage>,
    context: Option<String>,
) -> Result<String, ServerFnError> {
    assistant::ask(&messages, context.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("assistant error: {e}");
            server_error(e)
        })
}

#[cfg(not(feature = "server"))]
#[post("/api/assistant")]
pub async fn ask_assistant(
    messages: Vec<ChatMessage>,
    context: Option<String>,
) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
