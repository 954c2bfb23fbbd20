//! # Post model
//!
//! [`Post`] is the server-side row from the `posts` table (`sqlx::FromRow`);
//! [`PostInfo`] is its client-safe projection. The split mirrors
//! [`super::User`]/[`super::UserInfo`]: native column types stay on the server,
//! strings cross the WASM boundary.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full post record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Post {
    /// Convert to PostInfo for client consumption.
    pub fn to_info(&self) -> PostInfo {
        PostInfo {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            user_id: self.user_id.to_string(),
            image_url: self.image_url.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Post data safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostInfo {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owning user's id as a string; compared against the session identity to
    /// gate the Modify/Remove controls.
    pub user_id: String,
    pub image_url: Option<String>,
    /// RFC 3339 creation timestamp, assigned by the database.
    pub created_at: String,
}

impl PostInfo {
    /// Calendar date portion of the creation timestamp, for list display.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PostInfo {
        PostInfo {
            id: 7,
            title: "First Issue".into(),
            content: "Body".into(),
            user_id: "u-1".into(),
            image_url: None,
            created_at: "2026-08-29T10:15:00+00:00".into(),
        }
    }

    #[test]
    fn created_date_takes_date_portion() {
        assert_eq!(sample().created_date(), "2026-08-29");
    }

    #[test]
    fn created_date_tolerates_bare_dates() {
        let mut post = sample();
        post.created_at = "2026-08-29".into();
        assert_eq!(post.created_date(), "2026-08-29");
    }
}
