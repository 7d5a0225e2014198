use dioxus::prelude::*;
use store::Notification;

#[component]
pub fn NotificationsView(notifications: Vec<Notification>, on_mark_read: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "view-page",
            if notifications.is_empty() {
                p { class: "view-muted", "Nothing new." }
            }
            div {
                class: "list",
                for note in notifications.iter() {
                    div {
                        key: "{note.id}",
                        class: if note.read { "list-row" } else { "list-row unread" },
                        div {
                            class: "list-row-main",
                            span { class: "list-row-title", "{note.title}" }
                            span { class: "view-muted", "{note.body}" }
                        }
                        if !note.read {
                            button {
                                class: "btn btn-outline btn-small",
                                onclick: {
                                    let id = note.id.clone();
                                    move |_| on_mark_read.call(id.clone())
                                },
                                "Mark read"
                            }
                        }
                    }
                }
            }
        }
    }
}
