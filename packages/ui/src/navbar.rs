use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaBell};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn Navbar(
    title: String,
    show_back: bool,
    unread: usize,
    on_back: EventHandler<()>,
    on_notifications: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            if show_back {
                button {
                    class: "navbar-icon",
                    title: "Back",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                }
            }
            h1 { class: "navbar-title", "{title}" }
            button {
                class: "navbar-icon navbar-bell",
                title: "Notifications",
                onclick: move |_| on_notifications.call(()),
                Icon { icon: FaBell, width: 14, height: 14 }
                if unread > 0 {
                    span { class: "navbar-badge", "{unread}" }
                }
            }
        }
    }
}
