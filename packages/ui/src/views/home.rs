use dioxus::prelude::*;
use store::{Developer, Lead, User};

use crate::icons::{FaBell, FaBuilding, FaBullseye, FaRobot};
use crate::state::Screen;
use crate::Icon;

const RECENT_LEADS: usize = 3;

#[component]
pub fn HomeView(
    user: User,
    leads: Vec<Lead>,
    developers: Vec<Developer>,
    unread: usize,
    on_open_lead: EventHandler<Lead>,
    on_navigate: EventHandler<Screen>,
    on_ask_assistant: EventHandler<()>,
) -> Element {
    let open_leads = leads.iter().filter(|l| l.status.is_open()).count();
    let recent: Vec<Lead> = leads.iter().take(RECENT_LEADS).cloned().collect();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Hello, {user.name}" }

            div {
                class: "stat-grid",
                button {
                    class: "stat-card",
                    onclick: move |_| on_navigate.call(Screen::LeadsList),
                    Icon { icon: FaBullseye, width: 16, height: 16 }
                    span { class: "stat-value", "{open_leads}" }
                    span { class: "stat-label", "open leads" }
                }
                button {
                    class: "stat-card",
                    onclick: move |_| on_navigate.call(Screen::Developers),
                    Icon { icon: FaBuilding, width: 16, height: 16 }
                    span { class: "stat-value", "{developers.len()}" }
                    span { class: "stat-label", "folders" }
                }
                button {
                    class: "stat-card",
                    onclick: move |_| on_navigate.call(Screen::Notifications),
                    Icon { icon: FaBell, width: 16, height: 16 }
                    span { class: "stat-value", "{unread}" }
                    span { class: "stat-label", "unread" }
                }
            }

            button {
                class: "card card-action",
                onclick: move |_| on_ask_assistant.call(()),
                Icon { icon: FaRobot, width: 18, height: 18 }
                div {
                    strong { "Ask Vera" }
                    p { class: "view-muted", "Follow-up scripts, objections, financing questions." }
                }
            }

            h2 { class: "view-section-title", "Recent leads" }
            if recent.is_empty() {
                p { class: "view-muted", "No leads yet." }
            }
            div {
                class: "list",
                for lead in recent.iter() {
                    LeadRow { key: "{lead.id}", lead: lead.clone(), on_open: on_open_lead }
                }
            }
        }
    }
}

/// One line of a lead list.
#[component]
pub fn LeadRow(lead: Lead, on_open: EventHandler<Lead>) -> Element {
    let status_class = format!("badge status-{:?}", lead.status).to_lowercase();
    let interest = lead.interest.clone().unwrap_or_default();

    rsx! {
        button {
            class: "list-row",
            onclick: {
                let lead = lead.clone();
                move |_| on_open.call(lead.clone())
            },
            div {
                class: "list-row-main",
                span { class: "list-row-title", "{lead.name}" }
                span { class: "view-muted", "{lead.source} {interest}" }
            }
            span { class: "{status_class}", "{lead.status.label()}" }
        }
    }
}
