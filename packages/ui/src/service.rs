//! Platform wiring for the data service, session storage and client config.
//!
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`] and
//!   `localStorage` for the session marker
//! - **Desktop** (native): TOML files under `<data_dir>/psm-hub/`
//!
//! On every platform the cloud side is [`CloudService`], which forwards to the
//! `api` server functions.

use store::{
    CloudDiagnostics, ConnectionProbe, ConnectivityMonitor, DataService, Developer, HubConfig,
    HybridService, Lead, StoreError, TrainingModule, User,
};

use crate::state::SessionStore;

fn remote(e: impl std::fmt::Display) -> StoreError {
    StoreError::Remote(e.to_string())
}

/// [`DataService`] over the server functions. Configured while the latest
/// diagnostics report a database URL on the server.
#[derive(Clone)]
pub struct CloudService {
    monitor: ConnectivityMonitor,
}

impl CloudService {
    pub fn new(monitor: ConnectivityMonitor) -> Self {
        Self { monitor }
    }
}

impl DataService for CloudService {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        api::list_users().await.map_err(remote)
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, StoreError> {
        api::list_leads().await.map_err(remote)
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, StoreError> {
        api::list_developers().await.map_err(remote)
    }

    async fn get_training(&self) -> Result<Vec<TrainingModule>, StoreError> {
        api::list_training().await.map_err(remote)
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        api::save_user(user.clone()).await.map_err(remote)
    }

    async fn save_leads(&self, leads: &[Lead]) -> Result<(), StoreError> {
        api::save_leads(leads.to_vec()).await.map_err(remote)
    }

    async fn save_developers(&self, developers: &[Developer]) -> Result<(), StoreError> {
        api::save_developers(developers.to_vec()).await.map_err(remote)
    }

    async fn save_training(&self, modules: &[TrainingModule]) -> Result<(), StoreError> {
        api::save_training(modules.to_vec()).await.map_err(remote)
    }

    fn is_configured(&self) -> bool {
        self.monitor.snapshot().config.has_url
    }
}

/// Runs the server-side connection test.
#[derive(Clone, Copy, Default)]
pub struct CloudProbe;

impl ConnectionProbe for CloudProbe {
    async fn test_connection(&self) -> Result<CloudDiagnostics, StoreError> {
        api::test_connection().await.map_err(remote)
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type LocalStore = store::IdbStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type LocalStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppSessionStorage = store::LocalSessionStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppSessionStorage = store::FileSessionStorage;

pub type AppService = HybridService<CloudService, LocalStore>;

/// Cloud first, local persistence when the backend is not configured.
pub fn make_service(monitor: ConnectivityMonitor) -> AppService {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let local = store::IdbStore::new();
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let local = store::FileStore::new(data_dir());

    HybridService::new(CloudService::new(monitor), local)
}

pub fn make_session(config: &HubConfig) -> SessionStore<AppSessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let storage = store::LocalSessionStorage::new();
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let storage = store::FileSessionStorage::new(data_dir());

    SessionStore::new(storage, config.session.key.clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("psm-hub")
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    std::path::PathBuf::from("psm-hub")
}

/// Read `psm-hub.toml` from the platform config directory. A missing file
/// gives the defaults; a malformed one is logged and ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> HubConfig {
    let Some(dir) = dirs::config_dir() else {
        return HubConfig::default();
    };
    let path = dir.join("psm-hub").join(HubConfig::filename());
    match std::fs::read_to_string(&path) {
        Ok(text) => HubConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed {}: {e}", path.display());
            HubConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => HubConfig::default(),
        Err(e) => {
            tracing::warn!("could not read {}: {e}", path.display());
            HubConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> HubConfig {
    HubConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seed::{seed_backend, SeedError};
    use store::defaults::default_users;
    use store::{BackendFlags, CloudStatus};

    #[tokio::test]
    async fn test_seeding_without_server_url_is_refused() {
        let service = CloudService::new(ConnectivityMonitor::default());
        assert!(!service.is_configured());

        let result = seed_backend(&service, &default_users()).await;
        assert!(matches!(result, Err(SeedError::NotConfigured)));
    }

    #[test]
    fn test_configured_follows_published_diagnostics() {
        let monitor = ConnectivityMonitor::default();
        let service = CloudService::new(monitor.clone());

        monitor.publish(CloudDiagnostics {
            status: CloudStatus::Offline,
            config: BackendFlags { has_url: true, has_ai: false },
        });
        assert!(service.is_configured());

        monitor.publish(CloudDiagnostics::offline());
        assert!(!service.is_configured());
    }
}
