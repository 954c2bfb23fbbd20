//! Post creation: local draft with optional image, upload-then-insert.

use dioxus::prelude::*;

use ui::{use_session, PostFeed};

use super::{preview_handle, release_preview};
use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    let session = use_session();
    let mut feed = use_context::<Signal<PostFeed>>();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut pending_file = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut preview = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_file = move |evt: FormEvent| {
        if let Some(file) = evt.files().first().cloned() {
            spawn(async move {
                let name = file.name();
                if let Ok(bytes) = file.read_bytes().await {
                    let bytes = bytes.to_vec();
                    // Swap the preview handle along with the file.
                    if let Some(old) = preview.write().take() {
                        release_preview(&old);
                    }
                    preview.set(preview_handle(&bytes));
                    pending_file.set(Some((name, bytes)));
                }
            });
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // One submission at a time; the button is disabled too.
        if submitting() {
            return;
        }
        spawn(async move {
            error.set(None);
            submitting.set(true);

            // The guard admitted this view, but the identity can have been
            // cleared since it rendered; privileged writes re-check.
            if !session.read().is_authenticated() {
                error.set(Some("You are no longer signed in".to_string()));
                submitting.set(false);
                return;
            }

            // Upload first, then the row write. A failure in between leaves
            // the stored object behind.
            let result = async {
                let image_url = match pending_file() {
                    Some((name, bytes)) => Some(api::upload_image(name, bytes).await?),
                    None => None,
                };
                api::create_post(title(), content(), image_url).await
            }
            .await;

            match result {
                Ok(post) => {
                    // Draft discarded on successful submit, handle included.
                    if let Some(old) = preview.write().take() {
                        release_preview(&old);
                    }
                    feed.write().insert_at_front(post);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "editor-page",
            h2 { "Create New Post" }

            form {
                onsubmit: handle_submit,
                class: "editor-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    placeholder: "Title",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                    required: true,
                }

                textarea {
                    placeholder: "What's on your mind?",
                    value: content(),
                    oninput: move |evt| content.set(evt.value()),
                    required: true,
                }

                div {
                    class: "editor-image-field",
                    label { "Feature Image" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file,
                    }
                    if let Some((ref name, _)) = pending_file() {
                        div {
                            class: "editor-image-pending",
                            if let Some(ref url) = preview() {
                                img { src: "{url}", alt: "Preview" }
                            }
                            span { "Selected: {name}" }
                            button {
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(old) = preview.write().take() {
                                        release_preview(&old);
                                    }
                                    pending_file.set(None);
                                },
                                "✕"
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Publishing..." } else { "Publish Post" }
                }
            }
        }
    }
}
