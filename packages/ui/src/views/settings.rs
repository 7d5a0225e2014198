use dioxus::prelude::*;
use store::User;

use crate::auth::LogoutButton;
use crate::connectivity::{use_diagnostics, use_monitor};
use crate::icons::{FaCheck, FaDatabase, FaRobot, FaXmark};
use crate::service::CloudProbe;
use crate::state::Screen;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Profile header, cloud diagnostics, seeding and account actions.
///
/// Seeding belongs to the dashboard root; this view only offers the button
/// (to sales heads) and reports nothing itself.
#[component]
pub fn SettingsView(
    user: User,
    on_navigate: EventHandler<Screen>,
    on_logout: EventHandler<()>,
    on_seed: EventHandler<()>,
) -> Element {
    let diagnostics = use_diagnostics();
    let monitor = use_monitor();
    let mut is_testing = use_signal(|| false);

    let handle_retest = move |_| {
        let monitor = monitor.clone();
        spawn(async move {
            is_testing.set(true);
            monitor.refresh(&CloudProbe).await;
            is_testing.set(false);
        });
    };

    let snapshot = diagnostics();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            // Profile header
            div {
                class: "settings-profile",
                if let Some(ref photo) = user.photo_url {
                    img { class: "avatar avatar-lg", src: "{photo}", alt: "Avatar" }
                } else {
                    span { class: "avatar avatar-lg", "{user.initial()}" }
                }
                div {
                    h2 { class: "view-section-title", "{user.name}" }
                    p { class: "view-muted", "{user.role.label()} · {user.email}" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_navigate.call(Screen::ProfileEdit),
                    "Edit profile"
                }
            }

            // Diagnostics
            div {
                class: "card",
                h2 { class: "view-section-title", "System diagnostics" }
                div {
                    class: "diag-row",
                    Icon { icon: FaDatabase, width: 14, height: 14 }
                    span { "Cloud database" }
                    DiagBadge { ok: snapshot.config.has_url, yes: "Configured", no: "Not configured" }
                }
                div {
                    class: "diag-row",
                    span { class: "diag-dot" }
                    span { "Connection" }
                    DiagBadge { ok: snapshot.is_online(), yes: "Online", no: "Offline" }
                }
                div {
                    class: "diag-row",
                    Icon { icon: FaRobot, width: 14, height: 14 }
                    span { "Vera assistant" }
                    DiagBadge { ok: snapshot.config.has_ai, yes: "Ready", no: "No API key" }
                }
                button {
                    class: "btn btn-outline",
                    disabled: is_testing(),
                    onclick: handle_retest,
                    if is_testing() { "Testing..." } else { "Re-test connection" }
                }
            }

            if !snapshot.config.has_url {
                SetupGuide {}
            }

            if user.role.is_elevated() {
                div {
                    class: "card",
                    h2 { class: "view-section-title", "Activate database" }
                    p {
                        class: "view-muted",
                        "Copies the bundled leads, folders and training modules, plus your account, into the cloud database."
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_seed.call(()),
                        "Seed cloud database"
                    }
                }
            }

            div {
                class: "settings-actions",
                LogoutButton { class: "btn btn-danger", on_logout: on_logout }
            }
        }
    }
}

#[component]
fn DiagBadge(ok: bool, yes: &'static str, no: &'static str) -> Element {
    if ok {
        rsx! {
            span {
                class: "badge badge-ok",
                Icon { icon: FaCheck, width: 10, height: 10 }
                "{yes}"
            }
        }
    } else {
        rsx! {
            span {
                class: "badge badge-off",
                Icon { icon: FaXmark, width: 10, height: 10 }
                "{no}"
            }
        }
    }
}

#[component]
fn SetupGuide() -> Element {
    rsx! {
        div {
            class: "card card-highlight",
            h2 { class: "view-section-title", "Enable the cloud" }
            p {
                class: "view-muted",
                "Right now everything is stored on this device. To share data across the team:"
            }
            ol {
                class: "setup-steps",
                li { "Create a PostgreSQL database and set " code { "DATABASE_URL" } " for the server." }
                li { "Optionally set " code { "GEMINI_API_KEY" } " to enable the Vera assistant." }
                li {
                    "On desktop, point the app at the server with "
                    code { "[backend] server_url" }
                    " in "
                    code { "psm-hub.toml" }
                    "."
                }
                li { "Restart, press \"Re-test connection\", then seed the database." }
            }
        }
    }
}
