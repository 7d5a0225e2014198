use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::models::{Developer, Lead, TrainingModule, User};
use crate::service::{Collections, DataService};

/// In-memory DataService for testing and as a last-resort fallback.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    data: Arc<Mutex<Collections>>,
    configured: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            data: Arc::default(),
            configured: true,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that reports itself as not configured, standing in for a
    /// missing remote backend.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::default()
        }
    }

    /// Start with the given collections already stored.
    pub fn with_collections(collections: Collections) -> Self {
        Self {
            data: Arc::new(Mutex::new(collections)),
            configured: true,
        }
    }

    fn data(&self) -> MutexGuard<'_, Collections> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DataService for MemoryStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.data().users.clone())
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(self.data().leads.clone())
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, StoreError> {
        Ok(self.data().developers.clone())
    }

    async fn get_training(&self) -> Result<Vec<TrainingModule>, StoreError> {
        Ok(self.data().training.clone())
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        upsert_user(&mut self.data().users, user);
        Ok(())
    }

    async fn save_leads(&self, leads: &[Lead]) -> Result<(), StoreError> {
        self.data().leads = leads.to_vec();
        Ok(())
    }

    async fn save_developers(&self, developers: &[Developer]) -> Result<(), StoreError> {
        self.data().developers = developers.to_vec();
        Ok(())
    }

    async fn save_training(&self, modules: &[TrainingModule]) -> Result<(), StoreError> {
        self.data().training = modules.to_vec();
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Replace the user with the same id, or append it.
pub(crate) fn upsert_user(users: &mut Vec<User>, user: &User) {
    match users.iter_mut().find(|u| u.id == user.id) {
        Some(existing) => *existing = user.clone(),
        None => users.push(user.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[tokio::test]
    async fn test_empty_store_returns_empty_collections() {
        let store = MemoryStore::new();

        assert!(store.get_users().await.unwrap().is_empty());
        assert!(store.get_leads().await.unwrap().is_empty());
        assert!(store.get_developers().await.unwrap().is_empty());
        assert!(store.get_training().await.unwrap().is_empty());
        assert!(store.is_configured());
    }

    #[tokio::test]
    async fn test_save_user_upserts_by_id() {
        let store = MemoryStore::new();
        let mut user = defaults::default_users().remove(0);

        store.save_user(&user).await.unwrap();
        user.name = "Renamed".to_string();
        store.save_user(&user).await.unwrap();

        let users = store.get_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_save_leads_replaces_collection() {
        let store = MemoryStore::new();
        let leads = defaults::default_leads();

        store.save_leads(&leads).await.unwrap();
        store.save_leads(&leads[..1]).await.unwrap();

        let stored = store.get_leads().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], leads[0]);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();

        store
            .save_training(&defaults::default_training())
            .await
            .unwrap();

        assert_eq!(
            other.get_training().await.unwrap(),
            defaults::default_training()
        );
    }

    #[test]
    fn test_unconfigured_store() {
        assert!(!MemoryStore::unconfigured().is_configured());
    }
}
