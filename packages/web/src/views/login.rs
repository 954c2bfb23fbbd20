//! Login page: email/password sign-in.

use dioxus::prelude::*;

use ui::use_session_events;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let events = use_session_events();
    let mut return_to = use_context::<Signal<Option<Route>>>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let events = events.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match api::login(email(), password()).await {
                Ok(user) => {
                    events.publish(Some(user));
                    let destination = return_to.write().take().unwrap_or(Route::Home {});
                    nav.replace(destination);
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
                h3 { "Already a user" }
                p { class: "auth-subtitle", "Identity Verification Required" }
            }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                label { "Email" }
                input {
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                    required: true,
                }

                label { "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                    required: true,
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Authenticating..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No access? "
                a { href: "/register", "Request Account" }
            }
        }
    }
}
