//! The archive: a paginated list of posts, newest first.

use dioxus::prelude::*;

use api::PostInfo;
use ui::{use_session, FeedStatus, PostFeed};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut feed = use_context::<Signal<PostFeed>>();
    let session = use_session();
    // The store keeps the page across navigation; the local signal is the
    // fetch trigger (the loader cannot subscribe to the feed it writes to).
    let mut page = use_signal(|| feed.peek().page);

    // Fetch the window on mount and on every page change. A failed fetch is
    // logged and the store left as it was, still loading.
    let _loader = use_resource(move || {
        let current = page();
        async move {
            {
                let mut feed = feed.write();
                feed.set_page(current);
                feed.set_loading();
            }
            match api::list_posts(current as u32).await {
                Ok(posts) => feed.write().replace_page(posts),
                Err(e) => tracing::error!("archive retrieval failed: {e}"),
            }
        }
    });

    let on_delete = move |id: i64| {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let confirmed = web_sys::window()
                    .map(|w| {
                        w.confirm_with_message("Confirm removal from the archive?")
                            .unwrap_or(false)
                    })
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
            }
            match api::delete_post(id).await {
                Ok(()) => feed.write().remove_by_id(id),
                Err(e) => tracing::error!("remove failed: {e}"),
            }
        });
    };

    let snapshot = feed();

    if snapshot.status == FeedStatus::Loading {
        return rsx! {
            div {
                class: "archive-loading",
                "Retrieving Data..."
            }
        };
    }

    let viewer_id = session().identity.map(|u| u.id);

    rsx! {
        div {
            class: "archive",
            header {
                class: "archive-header",
                h1 { "Blogs" }
                p { class: "archive-page-marker", "Page {snapshot.page + 1}" }
            }

            div {
                class: "archive-grid",
                for post in snapshot.items.iter().cloned() {
                    ArchiveEntry {
                        key: "{post.id}",
                        post: post.clone(),
                        owned: viewer_id.as_deref() == Some(post.user_id.as_str()),
                        on_delete: on_delete,
                    }
                }
            }

            footer {
                class: "archive-pagination",
                button {
                    disabled: !snapshot.has_prev(),
                    onclick: move |_| {
                        let current = page();
                        page.set(current.saturating_sub(1));
                    },
                    "← Previous"
                }
                span { class: "archive-page-marker", "Page {snapshot.page + 1}" }
                button {
                    disabled: !snapshot.has_next(),
                    onclick: move |_| page.set(page() + 1),
                    "Next →"
                }
            }
        }
    }
}

#[component]
fn ArchiveEntry(post: PostInfo, owned: bool, on_delete: EventHandler<i64>) -> Element {
    let id = post.id;

    rsx! {
        article {
            class: "archive-entry",
            if let Some(ref image) = post.image_url {
                div {
                    class: "archive-entry-image",
                    img { src: "{image}", alt: "" }
                }
            }
            h2 { "{post.title}" }
            p { class: "archive-entry-body", "{post.content}" }

            div {
                class: "archive-entry-meta",
                span { class: "archive-entry-date", "{post.created_date()}" }
                if owned {
                    div {
                        class: "archive-entry-actions",
                        Link { to: Route::EditPost { id }, "Modify" }
                        button {
                            onclick: move |_| on_delete.call(id),
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}
