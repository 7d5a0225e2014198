use api::{ChatMessage, ChatRole};
use dioxus::prelude::*;

use crate::connectivity::use_diagnostics;
use crate::icons::{FaPaperPlane, FaXmark};
use crate::Icon;

/// Chat with Vera. `context` is the lead handed over from lead detail; it is
/// sent with every question until cleared.
#[component]
pub fn AssistantChatView(context: Option<String>, on_clear_context: EventHandler<()>) -> Element {
    let diagnostics = use_diagnostics();
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let ctx = context.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft().trim().to_string();
        if text.is_empty() || sending() {
            return;
        }
        draft.set(String::new());
        error.set(None);
        messages.write().push(ChatMessage::user(text));

        let history = messages();
        let context = ctx.clone();
        spawn(async move {
            sending.set(true);
            match api::ask_assistant(history, context).await {
                Ok(reply) => messages.write().push(ChatMessage::assistant(reply)),
                Err(e) => {
                    tracing::error!("assistant request failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        div {
            class: "view-page chat",
            if !diagnostics().config.has_ai {
                p {
                    class: "notice",
                    "Vera is not configured on the server (GEMINI_API_KEY). Questions will fail until it is."
                }
            }

            if let Some(ref ctx) = context {
                div {
                    class: "chat-context",
                    span { class: "chat-context-text", "{ctx}" }
                    button {
                        class: "navbar-icon",
                        title: "Clear context",
                        onclick: move |_| on_clear_context.call(()),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }

            div {
                class: "chat-log",
                if messages.read().is_empty() {
                    p { class: "view-muted", "Ask anything about your leads, objections or financing." }
                }
                for (i, message) in messages.read().iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if message.role == ChatRole::User { "chat-bubble chat-bubble--user" } else { "chat-bubble chat-bubble--assistant" },
                        "{message.text}"
                    }
                }
                if sending() {
                    div { class: "chat-bubble chat-bubble--assistant chat-typing", "..." }
                }
                if let Some(ref msg) = error() {
                    p { class: "form-error", "{msg}" }
                }
            }

            form {
                class: "chat-input",
                onsubmit: onsubmit,
                input {
                    class: "field-input",
                    placeholder: "Type a question",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: sending(),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                }
            }
        }
    }
}
