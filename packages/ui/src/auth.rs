//! Session gate views: the login form and the logout button.

use dioxus::prelude::*;
use store::User;

use crate::state::authenticate;

/// Email and password form checked against `users`.
///
/// Shown instead of the whole dashboard while nobody is signed in.
#[component]
pub fn LoginView(
    users: Vec<User>,
    /// Data is still loading; accounts stored remotely may not be known yet.
    #[props(default)]
    loading: bool,
    on_login: EventHandler<User>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match authenticate(&users, &email(), &password()) {
            Ok(user) => {
                error.set(None);
                password.set(String::new());
                on_login.call(user);
            }
            Err(e) => {
                tracing::info!("login rejected for {}: {e}", email().trim());
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "login-page",
            form {
                class: "login-card",
                onsubmit: onsubmit,
                h1 { class: "login-title", "PSM Hub" }
                p { class: "view-muted", "Sign in with your team account." }

                label { class: "field-label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "field-input",
                    r#type: "email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { class: "field-label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "field-input",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(ref msg) = error() {
                    p { class: "form-error", "{msg}" }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    "Sign in"
                }
                if loading {
                    p { class: "view-muted", "Loading accounts..." }
                }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_logout.call(()),
            "{label}"
        }
    }
}
