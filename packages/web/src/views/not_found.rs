//! Wildcard route.

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "This entry does not exist in the archive." }
        }
    }
}
