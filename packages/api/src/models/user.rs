//! # User model for authenticated users
//!
//! Two representations of a Masthead account:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries:
//!
//! - `id` — primary key (`UUID v4`), the owner reference stored on every post.
//! - `email` — unique, lowercased at registration time.
//! - `password_hash` — Argon2 PHC string.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! [`User::to_info`] projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! The client-safe subset that crosses the server/client boundary via server
//! functions. It omits the password hash and timestamps and converts the `Uuid`
//! to a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

impl UserInfo {
    /// Short handle shown in the navbar: the part of the email before the `@`.
    pub fn handle(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_strips_domain() {
        let user = UserInfo {
            id: "u-1".into(),
            email: "editor@archive.com".into(),
        };
        assert_eq!(user.handle(), "editor");
    }

    #[test]
    fn handle_falls_back_to_full_string() {
        let user = UserInfo {
            id: "u-1".into(),
            email: "no-at-sign".into(),
        };
        assert_eq!(user.handle(), "no-at-sign");
    }
}
