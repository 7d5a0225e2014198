use dioxus::prelude::*;
use store::User;

/// Edit the signed-in user's display name and photo.
#[component]
pub fn ProfileEditView(user: User, on_save: EventHandler<User>, on_back: EventHandler<()>) -> Element {
    let mut name = use_signal(|| user.name.clone());
    let mut photo_url = use_signal(|| user.photo_url.clone().unwrap_or_default());
    let mut error = use_signal(|| Option::<&'static str>::None);

    let handle_save = move |_| {
        let trimmed = name().trim().to_string();
        if trimmed.is_empty() {
            error.set(Some("Name cannot be empty."));
            return;
        }
        let photo = photo_url().trim().to_string();
        let updated = User {
            name: trimmed,
            photo_url: (!photo.is_empty()).then_some(photo),
            ..user.clone()
        };
        on_save.call(updated);
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "card",
                label { class: "field-label", r#for: "profile-name", "Name" }
                input {
                    id: "profile-name",
                    class: "field-input",
                    value: "{name}",
                    oninput: move |evt| {
                        name.set(evt.value());
                        error.set(None);
                    },
                }
                label { class: "field-label", r#for: "profile-photo", "Photo URL" }
                input {
                    id: "profile-photo",
                    class: "field-input",
                    r#type: "url",
                    placeholder: "https://",
                    value: "{photo_url}",
                    oninput: move |evt| photo_url.set(evt.value()),
                }
                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }
                div {
                    class: "button-row",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_back.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_save,
                        "Save"
                    }
                }
            }
        }
    }
}
