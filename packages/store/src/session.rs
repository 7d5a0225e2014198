//! Durable client-side key/value storage for the login session marker.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Default storage key holding the signed-in user's id.
pub const SESSION_KEY: &str = "psm_active_session";

/// Small string store that survives restarts.
///
/// Failures are not surfaced: a storage that cannot be read behaves as empty
/// and a failed write leaves the user to sign in again next time.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local storage, for tests and platforms without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

/// One file per key under `<base>/session/`.
#[derive(Clone, Debug)]
pub struct FileSessionStorage {
    base: PathBuf,
}

impl FileSessionStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Path of the marker for `key`. Keys must be a single plain file name.
    fn key_path(&self, key: &str) -> Option<PathBuf> {
        let mut components = Path::new(key).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !key.contains(['/', '\\']) => {
                Some(self.base.join("session").join(name))
            }
            _ => {
                tracing::warn!(key, "session key is not a plain file name");
                None
            }
        }
    }

    /// Delete the marker for `key`. A marker that is already gone is fine.
    pub fn remove_marker(&self, key: &str) -> io::Result<()> {
        let path = self.key_path(key).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "invalid session key")
        })?;
        match std::fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        let value = std::fs::read_to_string(self.key_path(key)?).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let Some(path) = self.key_path(key) else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!(key, "failed to persist session: {e}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.remove_marker(key) {
            tracing::warn!(key, "failed to clear session: {e}");
        }
    }
}

/// Browser `localStorage`.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct LocalSessionStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalSessionStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl SessionStorage for LocalSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemorySessionStorage::new();
        assert!(storage.get(SESSION_KEY).is_none());

        storage.set(SESSION_KEY, "u-1");
        assert_eq!(storage.get(SESSION_KEY).as_deref(), Some("u-1"));

        storage.remove(SESSION_KEY);
        assert!(storage.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("psm_hub_session_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        FileSessionStorage::new(dir.clone()).set(SESSION_KEY, "u-42");
        let reopened = FileSessionStorage::new(dir.clone());
        assert_eq!(reopened.get(SESSION_KEY).as_deref(), Some("u-42"));

        reopened.remove(SESSION_KEY);
        assert!(reopened.get(SESSION_KEY).is_none());
        // Removing twice is harmless
        reopened.remove(SESSION_KEY);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_storage_rejects_keys_outside_session_dir() {
        let dir = std::env::temp_dir().join(format!("psm_hub_session_keys_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let storage = FileSessionStorage::new(dir.join("data"));

        for key in ["../escape", "nested/key", "..", "", "/abs"] {
            storage.set(key, "u-1");
            assert!(storage.get(key).is_none(), "{key:?} was accepted");
            assert!(storage.remove_marker(key).is_err());
        }
        assert!(!dir.join("data").join("escape").exists());
        assert!(!dir.join("escape").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_marker_reports_failures() {
        let dir = std::env::temp_dir().join(format!("psm_hub_session_rm_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let storage = FileSessionStorage::new(dir.clone());

        // Nothing stored yet
        assert!(storage.remove_marker(SESSION_KEY).is_ok());

        // A directory in place of the marker cannot be removed as a file
        let marker = dir.join("session").join(SESSION_KEY);
        std::fs::create_dir_all(&marker).unwrap();
        assert!(storage.remove_marker(SESSION_KEY).is_err());
        storage.remove(SESSION_KEY);
        assert!(marker.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
