//! Data models for the application.

mod post;
mod user;

#[cfg(feature = "server")]
pub use post::Post;
pub use post::PostInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
