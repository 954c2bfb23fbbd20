//! Session data types.

/// Key for storing the authenticated user's id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
