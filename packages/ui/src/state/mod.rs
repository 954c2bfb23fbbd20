//! # Client-side state containers
//!
//! The reactive core of the app, kept as plain Rust so it can be unit-tested
//! without a renderer. Each container is a value type with pure reducer
//! methods; view components hold them inside Dioxus signals and call the
//! reducers through `Signal::write`.
//!
//! - [`session`] — the current identity and the auth-check lifecycle.
//! - [`feed`] — the displayed page of posts and its pagination window.
//! - [`guard`] — the admit/redirect decision for restricted routes.
//! - [`events`] — the identity-change notification bus.

pub mod events;
pub mod feed;
pub mod guard;
pub mod session;

pub use events::{SessionEvent, SessionEvents, SessionSubscription};
pub use feed::{FeedStatus, PostFeed};
pub use guard::{route_decision, GuardDecision};
pub use session::{SessionState, SessionStatus};
