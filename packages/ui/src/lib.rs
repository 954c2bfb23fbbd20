//! This crate contains all shared UI for the workspace: the client-side state
//! containers ([`state`]) and the components that wire them to the gateway.

pub mod state;
pub use state::{
    route_decision, FeedStatus, GuardDecision, PostFeed, SessionEvent, SessionEvents,
    SessionState, SessionStatus, SessionSubscription,
};

mod auth;
pub use auth::{use_session, use_session_events, AuthProvider, LogoutButton};

mod navbar;
pub use navbar::Navbar;
