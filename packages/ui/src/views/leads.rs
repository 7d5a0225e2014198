use dioxus::prelude::*;
use store::{Lead, LeadStatus};

use super::home::LeadRow;
use crate::icons::{FaPhone, FaRobot};
use crate::Icon;

const STATUS_FILTERS: [LeadStatus; 6] = [
    LeadStatus::New,
    LeadStatus::Contacted,
    LeadStatus::Visit,
    LeadStatus::Proposal,
    LeadStatus::Won,
    LeadStatus::Lost,
];

#[component]
pub fn LeadsListView(leads: Vec<Lead>, on_open_lead: EventHandler<Lead>) -> Element {
    let mut filter = use_signal(|| Option::<LeadStatus>::None);

    let current = filter();
    let shown: Vec<Lead> = leads
        .iter()
        .filter(|l| current.map_or(true, |status| l.status == status))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "view-page",
            div {
                class: "chip-row",
                button {
                    class: if current.is_none() { "chip active" } else { "chip" },
                    onclick: move |_| filter.set(None),
                    "All ({leads.len()})"
                }
                for status in STATUS_FILTERS {
                    button {
                        key: "{status.label()}",
                        class: if current == Some(status) { "chip active" } else { "chip" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status.label()}"
                    }
                }
            }

            if shown.is_empty() {
                p { class: "view-muted", "No leads with this status." }
            }
            div {
                class: "list",
                for lead in shown.iter() {
                    LeadRow { key: "{lead.id}", lead: lead.clone(), on_open: on_open_lead }
                }
            }
        }
    }
}

#[component]
pub fn LeadDetailView(
    lead: Lead,
    on_back: EventHandler<()>,
    on_ask_assistant: EventHandler<String>,
) -> Element {
    let context = lead.assistant_context();
    let phone_href = format!("tel:{}", lead.phone);

    rsx! {
        div {
            class: "view-page",
            div {
                class: "card",
                h1 { class: "view-title", "{lead.name}" }
                span { class: "badge", "{lead.status.label()}" }

                dl {
                    class: "detail-list",
                    dt { "Phone" }
                    dd {
                        a {
                            href: "{phone_href}",
                            Icon { icon: FaPhone, width: 12, height: 12 }
                            " {lead.phone}"
                        }
                    }
                    if let Some(ref email) = lead.email {
                        dt { "Email" }
                        dd { "{email}" }
                    }
                    dt { "Source" }
                    dd { "{lead.source}" }
                    if let Some(ref interest) = lead.interest {
                        dt { "Interest" }
                        dd { "{interest}" }
                    }
                    if let Some(budget) = lead.budget {
                        dt { "Budget" }
                        dd { "{budget}" }
                    }
                }

                if !lead.notes.is_empty() {
                    h2 { class: "view-section-title", "Notes" }
                    p { class: "detail-notes", "{lead.notes}" }
                }
            }

            div {
                class: "button-row",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_back.call(()),
                    "Back to leads"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_ask_assistant.call(context.clone()),
                    Icon { icon: FaRobot, width: 14, height: 14 }
                    " Ask Vera about this lead"
                }
            }
        }
    }
}
