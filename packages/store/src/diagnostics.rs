//! # Connectivity status: live backend diagnostics for the UI
//!
//! The service layer learns about backend health by running a
//! [`ConnectionProbe`] (the `test_connection` server function in production).
//! The result, a [`CloudDiagnostics`] snapshot, is published through a
//! [`ConnectivityMonitor`]: a single-writer `tokio::sync::watch` channel that
//! any number of components can subscribe to.
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `status` | [`CloudStatus::Online`] when the database answered the probe |
//! | `config.has_url` | the server has a database URL configured |
//! | `config.has_ai` | the server has an assistant API key configured |
//!
//! A probe that fails outright publishes [`CloudDiagnostics::offline`].

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::StoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloudStatus {
    Online,
    #[default]
    Offline,
}

impl CloudStatus {
    pub fn label(self) -> &'static str {
        match self {
            CloudStatus::Online => "ONLINE",
            CloudStatus::Offline => "OFFLINE",
        }
    }
}

/// Which backend features the server has credentials for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendFlags {
    pub has_url: bool,
    pub has_ai: bool,
}

/// Snapshot of backend connectivity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudDiagnostics {
    pub status: CloudStatus,
    pub config: BackendFlags,
}

impl CloudDiagnostics {
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn is_online(&self) -> bool {
        self.status == CloudStatus::Online
    }
}

/// Something that can check the backend and report its state.
pub trait ConnectionProbe {
    fn test_connection(&self) -> impl Future<Output = Result<CloudDiagnostics, StoreError>>;
}

/// Shared, observable holder of the latest [`CloudDiagnostics`].
#[derive(Clone, Debug)]
pub struct ConnectivityMonitor {
    tx: Arc<watch::Sender<CloudDiagnostics>>,
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(CloudDiagnostics::offline())
    }
}

impl ConnectivityMonitor {
    pub fn new(initial: CloudDiagnostics) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> CloudDiagnostics {
        *self.tx.borrow()
    }

    /// Receiver notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<CloudDiagnostics> {
        self.tx.subscribe()
    }

    pub fn publish(&self, diagnostics: CloudDiagnostics) {
        self.tx.send_replace(diagnostics);
    }

    /// Run `probe` and publish what it reports.
    pub async fn refresh<P: ConnectionProbe>(&self, probe: &P) -> CloudDiagnostics {
        let snapshot = match probe.test_connection().await {
            Ok(diagnostics) => diagnostics,
            Err(e) => {
                tracing::warn!("connection test failed: {e}");
                CloudDiagnostics::offline()
            }
        };
        tracing::info!(
            status = snapshot.status.label(),
            has_url = snapshot.config.has_url,
            has_ai = snapshot.config.has_ai,
            "connectivity refreshed"
        );
        self.publish(snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(Result<CloudDiagnostics, String>);

    impl ConnectionProbe for FixedProbe {
        async fn test_connection(&self) -> Result<CloudDiagnostics, StoreError> {
            self.0.clone().map_err(StoreError::Remote)
        }
    }

    fn online() -> CloudDiagnostics {
        CloudDiagnostics {
            status: CloudStatus::Online,
            config: BackendFlags {
                has_url: true,
                has_ai: false,
            },
        }
    }

    #[test]
    fn test_starts_offline() {
        let monitor = ConnectivityMonitor::default();
        assert_eq!(monitor.snapshot(), CloudDiagnostics::offline());
        assert!(!monitor.snapshot().config.has_url);
    }

    #[tokio::test]
    async fn test_refresh_notifies_subscribers() {
        let monitor = ConnectivityMonitor::default();
        let mut rx = monitor.subscribe();
        assert!(!rx.has_changed().unwrap());

        let published = monitor.refresh(&FixedProbe(Ok(online()))).await;

        assert_eq!(published, online());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), online());
        assert_eq!(monitor.snapshot(), online());
    }

    #[tokio::test]
    async fn test_failed_probe_publishes_offline() {
        let monitor = ConnectivityMonitor::new(online());
        let clone = monitor.clone();

        monitor
            .refresh(&FixedProbe(Err("connection refused".into())))
            .await;

        assert_eq!(clone.snapshot(), CloudDiagnostics::offline());
    }
}
