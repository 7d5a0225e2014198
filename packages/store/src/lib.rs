pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod service;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use config::HubConfig;
pub use diagnostics::{BackendFlags, CloudDiagnostics, CloudStatus, ConnectionProbe, ConnectivityMonitor};
pub use error::StoreError;
pub use models::{
    Developer, ExamQuestion, ExamScore, Lead, LeadStatus, Lesson, Notification, Project, Role,
    TrainingModule, User,
};
pub use service::{Collections, DataService, HybridService};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session::LocalSessionStorage;
pub use session::{FileSessionStorage, MemorySessionStorage, SessionStorage, SESSION_KEY};
