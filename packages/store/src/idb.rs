//! # IndexedDB data service: browser-side persistence
//!
//! [`IdbStore`] is the [`DataService`] used as the local store on the **web
//! platform**. It keeps each collection in the browser's IndexedDB via the
//! [`rexie`] crate, so the dashboard keeps working (and keeps edits) when no
//! cloud backend is configured.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"psm-hub"` (version 1) with one object
//! store per collection. Each store holds the whole collection under the key
//! `"all"`, serialised with `serde_wasm_bindgen`.
//!
//! | IndexedDB store | Value |
//! |-----------------|-------|
//! | `"users"` | `Vec<User>` |
//! | `"leads"` | `Vec<Lead>` |
//! | `"developers"` | `Vec<Developer>` |
//! | `"training"` | `Vec<TrainingModule>` |
//!
//! ## Connection management
//!
//! `IdbStore` opens a fresh [`Rexie`] connection on every operation; `Rexie`
//! does not implement `Clone` and the browser caches connections internally.

use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::error::StoreError;
use crate::memory::upsert_user;
use crate::models::{Developer, Lead, TrainingModule, User};
use crate::service::DataService;

const DB_NAME: &str = "psm-hub";
const DB_VERSION: u32 = 1;
const COLLECTION_KEY: &str = "all";

const USERS_STORE: &str = "users";
const LEADS_STORE: &str = "leads";
const DEVELOPERS_STORE: &str = "developers";
const TRAINING_STORE: &str = "training";

/// IndexedDB-backed DataService for the web platform.
#[derive(Clone, Debug, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, StoreError> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(USERS_STORE))
            .add_object_store(RexieObjectStore::new(LEADS_STORE))
            .add_object_store(RexieObjectStore::new(DEVELOPERS_STORE))
            .add_object_store(RexieObjectStore::new(TRAINING_STORE))
            .build()
            .await
            .map_err(unavailable)
    }

    async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[name], TransactionMode::ReadOnly)
            .map_err(unavailable)?;
        let store = tx.store(name).map_err(unavailable)?;

        let value = store
            .get(JsValue::from_str(COLLECTION_KEY))
            .await
            .map_err(unavailable)?;
        let Some(js_val) = value else {
            return Ok(Vec::new());
        };
        serde_wasm_bindgen::from_value(js_val).map_err(unavailable)
    }

    async fn write<T: Serialize>(&self, name: &str, items: &[T]) -> Result<(), StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[name], TransactionMode::ReadWrite)
            .map_err(unavailable)?;
        let store = tx.store(name).map_err(unavailable)?;

        let key = JsValue::from_str(COLLECTION_KEY);
        let value = serde_wasm_bindgen::to_value(items).map_err(unavailable)?;
        store.put(&value, Some(&key)).await.map_err(unavailable)?;
        tx.done().await.map_err(unavailable)?;
        Ok(())
    }
}

fn unavailable(e: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

impl DataService for IdbStore {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        self.read(USERS_STORE).await
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, StoreError> {
        self.read(LEADS_STORE).await
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, StoreError> {
        self.read(DEVELOPERS_STORE).await
    }

    async fn get_training(&self) -> Result<Vec<TrainingModule>, StoreError> {
        self.read(TRAINING_STORE).await
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users: Vec<User> = self.read(USERS_STORE).await?;
        upsert_user(&mut users, user);
        self.write(USERS_STORE, &users).await
    }

    async fn save_leads(&self, leads: &[Lead]) -> Result<(), StoreError> {
        self.write(LEADS_STORE, leads).await
    }

    async fn save_developers(&self, developers: &[Developer]) -> Result<(), StoreError> {
        self.write(DEVELOPERS_STORE, developers).await
    }

    async fn save_training(&self, modules: &[TrainingModule]) -> Result<(), StoreError> {
        self.write(TRAINING_STORE, modules).await
    }

    fn is_configured(&self) -> bool {
        true
    }
}
