//! Connectivity context: mirrors the [`ConnectivityMonitor`] into a signal so
//! components re-render when a new diagnostics snapshot is published.

use dioxus::prelude::*;
use store::{CloudDiagnostics, ConnectivityMonitor};

use crate::service::CloudProbe;

const RECHECK_SECS: u64 = 60;

/// Latest diagnostics snapshot.
pub fn use_diagnostics() -> Signal<CloudDiagnostics> {
    use_context::<Signal<CloudDiagnostics>>()
}

pub fn use_monitor() -> ConnectivityMonitor {
    use_context::<ConnectivityMonitor>()
}

/// Provide `monitor` and its mirrored signal to every descendant.
pub fn use_connectivity_provider(monitor: ConnectivityMonitor) -> Signal<CloudDiagnostics> {
    let mut diagnostics = use_signal(|| monitor.snapshot());
    use_context_provider(|| diagnostics);
    use_context_provider(|| monitor.clone());

    use_effect(move || {
        let mut rx = monitor.subscribe();
        spawn(async move {
            diagnostics.set(*rx.borrow_and_update());
            while rx.changed().await.is_ok() {
                let snapshot = *rx.borrow_and_update();
                diagnostics.set(snapshot);
            }
        });
    });

    diagnostics
}

/// Re-run the connection test periodically.
pub fn use_periodic_recheck(monitor: ConnectivityMonitor) {
    use_effect(move || {
        let monitor = monitor.clone();
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(RECHECK_SECS)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(RECHECK_SECS)).await;

                let before = monitor.snapshot();
                let after = monitor.refresh(&CloudProbe).await;
                if before.status != after.status {
                    tracing::info!("cloud went {}", after.status.label());
                }
            }
        });
    });
}
