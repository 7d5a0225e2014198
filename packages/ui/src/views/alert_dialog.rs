use dioxus::prelude::*;

use super::ModalOverlay;

/// Shared handle to the one pending alert message.
#[derive(Clone, Copy, PartialEq)]
pub struct Alert(Signal<Option<String>>);

impl Alert {
    pub fn show(&self, message: impl Into<String>) {
        let mut inner = self.0;
        inner.set(Some(message.into()));
    }

    pub fn dismiss(&self) {
        let mut inner = self.0;
        inner.set(None);
    }

    pub fn message(&self) -> Option<String> {
        self.0.read().clone()
    }
}

pub fn use_alert_provider() -> Alert {
    let message = use_signal(|| Option::<String>::None);
    use_context_provider(|| Alert(message))
}

pub fn use_alert() -> Alert {
    use_context::<Alert>()
}

/// Modal that shows the pending alert until it is acknowledged.
#[component]
pub fn AlertDialog() -> Element {
    let alert = use_alert();
    let Some(message) = alert.message() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| alert.dismiss(),
            div {
                class: "alert-dialog",
                role: "alertdialog",
                p { class: "alert-dialog-message", "{message}" }
                div {
                    class: "alert-dialog-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| alert.dismiss(),
                        "OK"
                    }
                }
            }
        }
    }
}
