use dioxus::prelude::*;
use store::Developer;

use crate::icons::{FaBuilding, FaFolderOpen, FaFolderTree};
use crate::state::Screen;
use crate::Icon;

/// Developer folders. Sales heads also get the drive curator entry.
#[component]
pub fn DevelopersView(
    developers: Vec<Developer>,
    elevated: bool,
    on_open_developer: EventHandler<Developer>,
    on_navigate: EventHandler<Screen>,
) -> Element {
    rsx! {
        div {
            class: "view-page",
            if elevated {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_navigate.call(Screen::DriveCurator),
                    Icon { icon: FaFolderTree, width: 14, height: 14 }
                    " Drive curator"
                }
            }
            if developers.is_empty() {
                p { class: "view-muted", "No folders yet." }
            }
            div {
                class: "card-grid",
                for developer in developers.iter() {
                    button {
                        key: "{developer.id}",
                        class: "card folder-card",
                        onclick: {
                            let developer = developer.clone();
                            move |_| on_open_developer.call(developer.clone())
                        },
                        if let Some(ref logo) = developer.logo_url {
                            img { class: "folder-logo", src: "{logo}", alt: "{developer.name}" }
                        } else {
                            Icon { icon: FaBuilding, width: 28, height: 28 }
                        }
                        strong { "{developer.name}" }
                        span { class: "view-muted", "{developer.projects.len()} projects" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FolderView(developer: Developer, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "view-page",
            div {
                class: "card",
                h1 { class: "view-title", "{developer.name}" }
                if !developer.description.is_empty() {
                    p { "{developer.description}" }
                }
                if let Some(ref drive) = developer.drive_url {
                    a {
                        class: "btn btn-outline",
                        href: "{drive}",
                        target: "_blank",
                        rel: "noopener",
                        Icon { icon: FaFolderOpen, width: 14, height: 14 }
                        " Open sales material"
                    }
                }
            }

            h2 { class: "view-section-title", "Projects" }
            if developer.projects.is_empty() {
                p { class: "view-muted", "No projects listed." }
            }
            div {
                class: "list",
                for project in developer.projects.iter() {
                    div {
                        key: "{project.name}",
                        class: "list-row",
                        div {
                            class: "list-row-main",
                            span { class: "list-row-title", "{project.name}" }
                            span { class: "view-muted", "{project.neighborhood}" }
                        }
                        div {
                            class: "list-row-side",
                            span { class: "badge", "{project.status}" }
                            if let Some(price) = project.starting_price {
                                span { class: "view-muted", "from {price}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-outline",
                onclick: move |_| on_back.call(()),
                "Back to folders"
            }
        }
    }
}
