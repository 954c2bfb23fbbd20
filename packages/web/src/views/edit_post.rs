//! Post editing: loads the row into a draft, keeps the stored image unless a
//! new file is attached.

use dioxus::prelude::*;

use ui::{use_session, PostFeed};

use super::{preview_handle, release_preview};
use crate::Route;

#[component]
pub fn EditPost(id: i64) -> Element {
    let session = use_session();
    let mut feed = use_context::<Signal<PostFeed>>();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut existing_image_url = use_signal(|| Option::<String>::None);
    let mut pending_file = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut preview = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Load the existing row into the draft on mount.
    let _loader = use_resource(move || async move {
        match api::get_post(id).await {
            Ok(post) => {
                title.set(post.title);
                content.set(post.content);
                existing_image_url.set(post.image_url);
            }
            Err(e) => {
                tracing::error!("failed to load post {id}: {e}");
                error.set(Some(e.to_string()));
            }
        }
    });

    let handle_file = move |evt: FormEvent| {
        if let Some(file) = evt.files().first().cloned() {
            spawn(async move {
                let name = file.name();
                if let Ok(bytes) = file.read_bytes().await {
                    let bytes = bytes.to_vec();
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
        if submitting() {
            return;
        }
        spawn(async move {
            error.set(None);
            submitting.set(true);

            if !session.read().is_authenticated() {
                error.set(Some("You are no longer signed in".to_string()));
                submitting.set(false);
                return;
            }

            // A newly attached file replaces the stored address; otherwise the
            // previous address is retained unchanged.
            let result = async {
                let image_url = match pending_file() {
                    Some((name, bytes)) => Some(api::upload_image(name, bytes).await?),
                    None => existing_image_url(),
                };
                api::update_post(id, title(), content(), image_url).await
            }
            .await;

            match result {
                Ok(post) => {
                    if let Some(old) = preview.write().take() {
                        release_preview(&old);
                    }
                    feed.write().replace_by_id(post);
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
            h2 { "Edit Post" }

            form {
                onsubmit: handle_submit,
                class: "editor-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    placeholder: "Post Title",
                    value: title(),
                    oninput: move |evt| title.set(evt.value()),
                    required: true,
                }

                textarea {
                    placeholder: "Content",
                    value: content(),
                    oninput: move |evt| content.set(evt.value()),
                    required: true,
                }

                div {
                    class: "editor-image-field",
                    label { "Post Image" }

                    // New image preview wins over the saved one, like the
                    // address it will replace on submit.
                    if let Some((ref name, _)) = pending_file() {
                        div {
                            class: "editor-image-current",
                            if let Some(ref url) = preview() {
                                img { src: "{url}", alt: "New image preview" }
                            }
                            p { class: "editor-image-caption", "New image: {name}" }
                        }
                    } else if let Some(ref url) = existing_image_url() {
                        div {
                            class: "editor-image-current",
                            img { src: "{url}", alt: "Current saved image" }
                            p { class: "editor-image-caption", "Current saved image" }
                        }
                    }

                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_file,
                    }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}
