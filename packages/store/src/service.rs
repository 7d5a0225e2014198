//! # Data service: per-collection access to dashboard data
//!
//! [`DataService`] is the seam between the application and wherever the data
//! actually lives. Every backend exposes the same get/save pair for each of
//! the four core collections:
//!
//! | Collection | Read | Write |
//! |------------|------|-------|
//! | users | [`get_users`](DataService::get_users) | [`save_user`](DataService::save_user) (single upsert) |
//! | leads | [`get_leads`](DataService::get_leads) | [`save_leads`](DataService::save_leads) |
//! | developers | [`get_developers`](DataService::get_developers) | [`save_developers`](DataService::save_developers) |
//! | training | [`get_training`](DataService::get_training) | [`save_training`](DataService::save_training) |
//!
//! A read that returns an empty vector means "nothing stored yet"; callers keep
//! their bundled defaults in that case.
//!
//! [`HybridService`] routes every call to a remote service when it reports
//! itself configured and to a local store otherwise.

use std::future::Future;

use crate::error::StoreError;
use crate::models::{Developer, Lead, TrainingModule, User};

/// Async access to the four core collections.
pub trait DataService {
    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, StoreError>>;
    fn get_leads(&self) -> impl Future<Output = Result<Vec<Lead>, StoreError>>;
    fn get_developers(&self) -> impl Future<Output = Result<Vec<Developer>, StoreError>>;
    fn get_training(&self) -> impl Future<Output = Result<Vec<TrainingModule>, StoreError>>;

    /// Insert or replace one user, matched by id.
    fn save_user(&self, user: &User) -> impl Future<Output = Result<(), StoreError>>;
    fn save_leads(&self, leads: &[Lead]) -> impl Future<Output = Result<(), StoreError>>;
    fn save_developers(
        &self,
        developers: &[Developer],
    ) -> impl Future<Output = Result<(), StoreError>>;
    fn save_training(
        &self,
        modules: &[TrainingModule],
    ) -> impl Future<Output = Result<(), StoreError>>;

    /// Whether the backend behind this service is set up to accept calls.
    fn is_configured(&self) -> bool;
}

/// The four collections the dashboard loads at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collections {
    pub users: Vec<User>,
    pub leads: Vec<Lead>,
    pub developers: Vec<Developer>,
    pub training: Vec<TrainingModule>,
}

impl Collections {
    /// Overlay fetched data: each non-empty collection replaces the current
    /// one entirely, empty ones leave it untouched.
    pub fn apply(&mut self, fetched: Collections) {
        if !fetched.users.is_empty() {
            self.users = fetched.users;
        }
        if !fetched.leads.is_empty() {
            self.leads = fetched.leads;
        }
        if !fetched.developers.is_empty() {
            self.developers = fetched.developers;
        }
        if !fetched.training.is_empty() {
            self.training = fetched.training;
        }
    }
}

/// Remote-first service with a local fallback.
#[derive(Clone, Debug)]
pub struct HybridService<R, L> {
    remote: R,
    local: L,
}

impl<R: DataService, L: DataService> HybridService<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    fn use_remote(&self) -> bool {
        let remote = self.remote.is_configured();
        if !remote {
            tracing::debug!("remote backend not configured, using local store");
        }
        remote
    }
}

impl<R: DataService, L: DataService> DataService for HybridService<R, L> {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        if self.use_remote() {
            self.remote.get_users().await
        } else {
            self.local.get_users().await
        }
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, StoreError> {
        if self.use_remote() {
            self.remote.get_leads().await
        } else {
            self.local.get_leads().await
        }
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, StoreError> {
        if self.use_remote() {
            self.remote.get_developers().await
        } else {
            self.local.get_developers().await
        }
    }

    async fn get_training(&self) -> Result<Vec<TrainingModule>, StoreError> {
        if self.use_remote() {
            self.remote.get_training().await
        } else {
            self.local.get_training().await
        }
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        if self.use_remote() {
            self.remote.save_user(user).await
        } else {
            self.local.save_user(user).await
        }
    }

    async fn save_leads(&self, leads: &[Lead]) -> Result<(), StoreError> {
        if self.use_remote() {
            self.remote.save_leads(leads).await
        } else {
            self.local.save_leads(leads).await
        }
    }

    async fn save_developers(&self, developers: &[Developer]) -> Result<(), StoreError> {
        if self.use_remote() {
            self.remote.save_developers(developers).await
        } else {
            self.local.save_developers(developers).await
        }
    }

    async fn save_training(&self, modules: &[TrainingModule]) -> Result<(), StoreError> {
        if self.use_remote() {
            self.remote.save_training(modules).await
        } else {
            self.local.save_training(modules).await
        }
    }

    /// Configured when either side is; the local store always is.
    fn is_configured(&self) -> bool {
        self.remote.is_configured() || self.local.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use crate::memory::MemoryStore;

    #[test]
    fn test_apply_keeps_defaults_for_empty_collections() {
        let mut current = Collections::bundled();
        let fetched = Collections {
            leads: vec![defaults::default_leads()[0].clone()],
            ..Default::default()
        };

        current.apply(fetched);

        assert_eq!(current.leads.len(), 1);
        assert_eq!(current.users, defaults::default_users());
        assert_eq!(current.developers, defaults::default_developers());
        assert_eq!(current.training, defaults::default_training());
    }

    #[tokio::test]
    async fn test_hybrid_reads_local_when_remote_unconfigured() {
        let remote = MemoryStore::unconfigured();
        let local = MemoryStore::new();
        remote.save_leads(&defaults::default_leads()).await.unwrap();
        local.save_leads(&defaults::default_leads()[..2]).await.unwrap();

        let hybrid = HybridService::new(remote, local);
        assert_eq!(hybrid.get_leads().await.unwrap().len(), 2);
        assert!(hybrid.is_configured());
    }

    #[tokio::test]
    async fn test_hybrid_writes_remote_when_configured() {
        let hybrid = HybridService::new(MemoryStore::new(), MemoryStore::new());

        hybrid
            .save_developers(&defaults::default_developers())
            .await
            .unwrap();

        assert_eq!(
            hybrid.remote().get_developers().await.unwrap(),
            defaults::default_developers()
        );
        assert!(hybrid.local().get_developers().await.unwrap().is_empty());
    }
}
