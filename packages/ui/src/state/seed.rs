//! Pushing the bundled data set into an empty backend.

use store::defaults::{default_developers, default_leads, default_training};
use store::{DataService, StoreError, User};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configure the cloud backend first (DATABASE_URL on the server).")]
    NotConfigured,
    #[error("There is no user to seed.")]
    NoUsers,
    #[error("Seeding failed: {0}")]
    Store(#[from] StoreError),
}

/// Write the first user plus the bundled leads, developers and training to
/// `service`. Nothing is called when the service is not configured.
pub async fn seed_backend<S: DataService>(service: &S, users: &[User]) -> Result<(), SeedError> {
    if !service.is_configured() {
        return Err(SeedError::NotConfigured);
    }
    let user = users.first().ok_or(SeedError::NoUsers)?;

    service.save_user(user).await?;
    service.save_leads(&default_leads()).await?;
    service.save_developers(&default_developers()).await?;
    service.save_training(&default_training()).await?;

    tracing::info!("seeded backend as {}", user.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{Collection, ScriptedService};
    use store::defaults::default_users;

    #[tokio::test]
    async fn test_unconfigured_backend_is_never_called() {
        let service = ScriptedService::new().unconfigured();
        let result = seed_backend(&service, &default_users()).await;
        assert!(matches!(result, Err(SeedError::NotConfigured)));
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_seed_writes_every_collection() {
        let service = ScriptedService::new();
        seed_backend(&service, &default_users()).await.unwrap();
        assert_eq!(service.calls(), 4);
        assert_eq!(service.saved_users(), vec![default_users()[0].clone()]);
    }

    #[tokio::test]
    async fn test_seed_without_users() {
        let service = ScriptedService::new();
        let result = seed_backend(&service, &[]).await;
        assert!(matches!(result, Err(SeedError::NoUsers)));
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_store_error_message_is_kept() {
        let service = ScriptedService::new().failing(Collection::Leads);
        let err = seed_backend(&service, &default_users()).await.unwrap_err();
        assert!(err.to_string().contains("leads unavailable"), "{err}");
    }
}
