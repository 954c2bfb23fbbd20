//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use crate::state::{SessionEvents, SessionState};

/// Get the session store signal. Panics outside an [`AuthProvider`].
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the identity-change bus. Login/register/logout flows publish here.
pub fn use_session_events() -> SessionEvents {
    use_context::<SessionEvents>()
}

/// Provider component that owns the session store and keeps it mirrored to
/// the gateway. Wrap the router with this component.
///
/// Two async flows feed the store, matching the gateway's contract: a one-shot
/// fetch of the current session, and an ongoing subscription to the
/// identity-change bus. The subscription is taken out before the fetch is
/// awaited, so notifications raced against the fetch are queued rather than
/// lost, and it lives inside the resource's future — when the provider is torn
/// down the future is dropped and the subscription handle released with it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);
    let events = use_context_provider(SessionEvents::new);

    let bus = events.clone();
    let _sync = use_resource(move || {
        let bus = bus.clone();
        async move {
            session.write().set_checking();
            let mut subscription = bus.subscribe();

            match api::get_current_user().await {
                Ok(identity) => session.write().set_identity(identity),
                Err(e) => {
                    tracing::error!("initial session check failed: {e}");
                    session.write().set_identity(None);
                }
            }

            while let Some(event) = subscription.recv().await {
                session.write().set_identity(event.identity);
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that signs the current user out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let events = use_session_events();

    let onclick = move |_| {
        let events = events.clone();
        async move {
            match api::logout().await {
                Ok(()) => {
                    // Local clear first, then the gateway-style notification;
                    // both commits land on the same resolved-absent state.
                    session.write().clear();
                    events.publish(None);
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                }
                Err(e) => tracing::error!("logout failed: {e}"),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
