mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod create_post;
pub use create_post::CreatePost;

mod edit_post;
pub use edit_post::EditPost;

mod not_found;
pub use not_found::NotFound;

/// Browser-local object URL for a pending upload, so the draft can show the
/// image before it is ever sent anywhere. The handle must be passed back to
/// [`release_preview`] when the draft drops or replaces the file.
#[cfg(target_arch = "wasm32")]
pub(crate) fn preview_handle(bytes: &[u8]) -> Option<String> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).into());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

/// Outside the browser there is no object-URL machinery; the draft falls back
/// to naming the selected file.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn preview_handle(_bytes: &[u8]) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn release_preview(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn release_preview(_url: &str) {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn preview_is_browser_only() {
        // Natively there is no handle to leak, and releasing nothing is safe.
        assert!(preview_handle(b"\x89PNG").is_none());
        release_preview("blob:never-created");
    }
}
