use dioxus::prelude::*;
use store::User;

use crate::icons::{FaBolt, FaBuilding, FaBullseye, FaGear, FaGraduationCap};
use crate::state::{Screen, NAV_ITEMS};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[component]
pub fn AppSidebar(user: User, current: Screen, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",

            // User header
            div {
                class: "sidebar-user",
                if let Some(ref photo) = user.photo_url {
                    img {
                        class: "sidebar-user-avatar",
                        src: "{photo}",
                        alt: "Avatar",
                    }
                } else {
                    span { class: "sidebar-user-initial", "{user.initial()}" }
                }
                div {
                    class: "sidebar-user-text",
                    span { class: "sidebar-user-name", "{user.name}" }
                    span { class: "sidebar-user-role", "{user.role.label()}" }
                }
            }

            div {
                class: "sidebar-items",
                for item in NAV_ITEMS {
                    button {
                        key: "{item.label}",
                        class: if current.is_within(item.screen) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item.screen),
                        NavIcon { screen: item.screen }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavIcon(screen: Screen) -> Element {
    match screen {
        Screen::LeadsList => rsx! { Icon { icon: FaBullseye, width: 14, height: 14 } },
        Screen::Developers => rsx! { Icon { icon: FaBuilding, width: 14, height: 14 } },
        Screen::Training => rsx! { Icon { icon: FaGraduationCap, width: 14, height: 14 } },
        Screen::Settings => rsx! { Icon { icon: FaGear, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaBolt, width: 14, height: 14 } },
    }
}
