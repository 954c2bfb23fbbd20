//! Registration page: email/password sign-up.

use dioxus::prelude::*;

use ui::use_session_events;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let events = use_session_events();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let events = events.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p).await {
                Ok(user) => {
                    events.publish(Some(user));
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            header {
                p { class: "auth-subtitle", "Formal Application" }
                h1 { "Register" }
            }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                label { "Identity Email" }
                input {
                    r#type: "email",
                    placeholder: "user@archive.com",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                    required: true,
                }

                label { "Security String" }
                input {
                    r#type: "password",
                    placeholder: "min 8 characters",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                    required: true,
                }

                label { "Confirm" }
                input {
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                    required: true,
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Initializing..." } else { "Create Access" }
                }
            }

            p {
                class: "auth-switch",
                "Already indexed? "
                a { href: "/login", "Login" }
            }
        }
    }
}
