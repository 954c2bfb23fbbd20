//! The editorial masthead bar shown on every page.

use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let identity = session().identity;

    rsx! {
        nav {
            class: "masthead",
            a { class: "masthead-brand", href: "/", "Masthead" }

            ul {
                class: "masthead-links",
                li { a { href: "/", "Home" } }
                if identity.is_some() {
                    li { a { href: "/create", "Enter New Blog" } }
                    li { LogoutButton { class: "masthead-logout" } }
                } else {
                    li { a { class: "masthead-login", href: "/login", "Login" } }
                }
            }

            if let Some(user) = identity {
                span { class: "masthead-user", "User: {user.handle()}" }
            }
        }
    }
}
