//! Cloud status strip above the main area.

use dioxus::prelude::*;
use store::CloudDiagnostics;

use crate::connectivity::use_diagnostics;
use crate::icons::{FaCloud, FaCloudArrowUp, FaHardDrive};
use crate::Icon;

/// Tells the user where their data goes.
///
/// - **Backend configured + reachable**: green cloud ("Cloud connection OK")
/// - **Backend configured + unreachable**: orange cloud; reads and writes still
///   target the cloud, so only the bundled data is shown and edits are lost
/// - **No backend**: safe mode, everything stays on this device
#[component]
pub fn CloudStatusBar(on_open_settings: EventHandler<()>) -> Element {
    let diagnostics = use_diagnostics();
    let snapshot = diagnostics();

    let message = status_message(&snapshot);

    match (snapshot.config.has_url, snapshot.is_online()) {
        (true, true) => rsx! {
            div {
                class: "status-bar status-bar--online",
                Icon { icon: FaCloud, width: 12, height: 12 }
                span { "{message}" }
            }
        },
        (true, false) => rsx! {
            div {
                class: "status-bar status-bar--offline",
                Icon { icon: FaCloudArrowUp, width: 12, height: 12 }
                span { "{message}" }
            }
        },
        (false, _) => rsx! {
            div {
                class: "status-bar status-bar--local",
                Icon { icon: FaHardDrive, width: 12, height: 12 }
                span { "{message}" }
                button {
                    class: "status-bar-link",
                    onclick: move |_| on_open_settings.call(()),
                    "How to enable the cloud"
                }
            }
        },
    }
}

/// Strip text for `snapshot`.
pub fn status_message(snapshot: &CloudDiagnostics) -> &'static str {
    match (snapshot.config.has_url, snapshot.is_online()) {
        (true, true) => "Cloud connection OK",
        (true, false) => "Cloud unreachable: showing bundled data, changes will not be saved",
        (false, _) => "Safe mode: everything is saved on this device",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{BackendFlags, CloudStatus};

    fn snapshot(status: CloudStatus, has_url: bool) -> CloudDiagnostics {
        CloudDiagnostics {
            status,
            config: BackendFlags { has_url, has_ai: false },
        }
    }

    #[test]
    fn test_unreachable_cloud_does_not_claim_local_storage() {
        let message = status_message(&snapshot(CloudStatus::Offline, true));
        assert!(!message.contains("local"));
        assert!(!message.contains("device"));
        assert!(message.contains("not be saved"));
    }

    #[test]
    fn test_messages_per_state() {
        assert_eq!(
            status_message(&snapshot(CloudStatus::Online, true)),
            "Cloud connection OK"
        );
        for status in [CloudStatus::Online, CloudStatus::Offline] {
            assert!(status_message(&snapshot(status, false)).starts_with("Safe mode"));
        }
    }
}
