//! # Media store — uploaded post images
//!
//! Masthead stores post images on the server's filesystem and serves them back
//! under the public `/media/` prefix (the web server mounts the directory as
//! static files). Object names are derived from the submission timestamp in
//! milliseconds plus the original file's extension, so two uploads can only
//! collide within the same millisecond.
//!
//! [`object_name`] is pure and unit-tested; [`store_object`] does the disk
//! write and is server-only.

#[cfg(feature = "server")]
use std::path::PathBuf;

/// Public URL prefix the web server serves the media directory under.
pub const MEDIA_URL_PREFIX: &str = "/media";

/// Build the stored object name for an upload: `<millis>.<ext>`.
///
/// The extension is taken from the original file name, lowercased; files with
/// no usable extension get `bin`.
pub fn object_name(original: &str, now_millis: i64) -> String {
    let ext = original
        .rsplit('.')
        .next()
        .filter(|e| !e.is_empty() && *e != original)
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string());
    format!("{now_millis}.{ext}")
}

/// Public address of a stored object.
pub fn public_url(name: &str) -> String {
    format!("{MEDIA_URL_PREFIX}/{name}")
}

/// Errors from the on-disk media store.
#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("failed to create media directory {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("failed to write media object {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Root directory for stored objects: `MEDIA_DIR` env var, default `./media`.
#[cfg(feature = "server")]
pub fn media_root() -> PathBuf {
    std::env::var("MEDIA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("media"))
}

/// Write an object's bytes under the media root, returning its public URL.
#[cfg(feature = "server")]
pub async fn store_object(name: &str, bytes: &[u8]) -> Result<String, MediaError> {
    let root = media_root();
    tokio::fs::create_dir_all(&root)
        .await
        .map_err(|e| MediaError::CreateDir(root.clone(), e))?;

    let path = root.join(name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| MediaError::Write(path.clone(), e))?;

    Ok(public_url(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_name_keeps_extension() {
        assert_eq!(object_name("cover.JPG", 1756_464_000_123), "1756464000123.jpg");
        assert_eq!(object_name("a.b.png", 5), "5.png");
    }

    #[test]
    fn object_name_defaults_extension() {
        assert_eq!(object_name("README", 42), "42.bin");
        assert_eq!(object_name("", 42), "42.bin");
        assert_eq!(object_name("trailing.", 42), "42.bin");
    }

    #[test]
    fn public_url_joins_prefix() {
        assert_eq!(public_url("42.png"), "/media/42.png");
    }
}
