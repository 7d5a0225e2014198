//! # Filesystem-backed data service
//!
//! [`FileStore`] is a [`DataService`] that keeps each collection in its own
//! TOML document. It is the local store on desktop and mobile and retains data
//! across app restarts when no cloud backend is configured.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users.toml
//! ├── leads.toml
//! ├── developers.toml
//! └── training.toml
//! ```
//!
//! Every document is a single `[[items]]` array of tables. A missing file reads
//! as an empty collection.
//!
//! ## Platform data directories
//!
//! Callers pass `dirs::data_dir()/psm-hub`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/psm-hub/` |
//! | Linux | `~/.local/share/psm-hub/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\psm-hub\` |

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::memory::upsert_user;
use crate::models::{Developer, Lead, TrainingModule, User};
use crate::service::DataService;

const USERS_FILE: &str = "users.toml";
const LEADS_FILE: &str = "leads.toml";
const DEVELOPERS_FILE: &str = "developers.toml";
const TRAINING_FILE: &str = "training.toml";

#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Document<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Filesystem-backed DataService for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.base.join(file)
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.path(file);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let doc: Document<T> = toml::from_str(&text)?;
        Ok(doc.items)
    }

    fn write<T: Serialize + Clone>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let doc = Document {
            items: items.to_vec(),
        };
        let text = toml::to_string_pretty(&doc)?;
        std::fs::write(self.path(file), text)?;
        tracing::debug!(file, count = items.len(), "collection written");
        Ok(())
    }
}

impl DataService for FileStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        self.read(USERS_FILE)
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, StoreError> {
        self.read(LEADS_FILE)
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, StoreError> {
        self.read(DEVELOPERS_FILE)
    }

    async fn get_training(&self) -> Result<Vec<TrainingModule>, StoreError> {
        self.read(TRAINING_FILE)
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users: Vec<User> = self.read(USERS_FILE)?;
        upsert_user(&mut users, user);
        self.write(USERS_FILE, &users)
    }

    async fn save_leads(&self, leads: &[Lead]) -> Result<(), StoreError> {
        self.write(LEADS_FILE, leads)
    }

    async fn save_developers(&self, developers: &[Developer]) -> Result<(), StoreError> {
        self.write(DEVELOPERS_FILE, developers)
    }

    async fn save_training(&self, modules: &[TrainingModule]) -> Result<(), StoreError> {
        self.write(TRAINING_FILE, modules)
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("psm_hub_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let store = FileStore::new(dir.clone());
        store.save_leads(&defaults::default_leads()).await.unwrap();
        store
            .save_training(&defaults::default_training())
            .await
            .unwrap();

        // Re-open from same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(store2.get_leads().await.unwrap(), defaults::default_leads());
        assert_eq!(
            store2.get_training().await.unwrap(),
            defaults::default_training()
        );
        assert!(store2.get_developers().await.unwrap().is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_save_user_keeps_other_users() {
        let dir = temp_dir("users");
        let store = FileStore::new(dir.clone());

        let mut users = defaults::default_users();
        let mut second = users[0].clone();
        second.id = "u-second".to_string();
        second.name = "Second".to_string();
        users.push(second.clone());
        for user in &users {
            store.save_user(user).await.unwrap();
        }

        second.is_active = false;
        store.save_user(&second).await.unwrap();

        let stored = store.get_users().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored[0].is_active);
        assert!(!stored[1].is_active);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = temp_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(LEADS_FILE), "items = 3").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(matches!(
            store.get_leads().await,
            Err(StoreError::Decode(_))
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
