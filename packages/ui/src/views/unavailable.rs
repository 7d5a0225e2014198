use dioxus::prelude::*;

use crate::state::Screen;

/// Shown for screens that exist in the navigation but have no view yet.
#[component]
pub fn UnavailableView(screen: Screen, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h2 { class: "empty-state-title", "{screen.title()}" }
            p { class: "view-muted", "This area is not available yet." }
            button {
                class: "btn btn-outline",
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}
