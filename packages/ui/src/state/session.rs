//! Session store: current identity plus the auth-check lifecycle.

use api::UserInfo;

/// Lifecycle stage of the identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No check has started (initial state, and again after an explicit clear).
    Uninitialized,
    /// The one-shot session fetch is in flight; restricted routes must not
    /// admit while here.
    Checking,
    /// At least one identity notification has been committed (possibly with an
    /// absent identity).
    Resolved,
}

/// A pure projection of gateway-reported auth state. No validation of its own;
/// commits are last-write-wins, so the race between the one-shot session fetch
/// and the notification stream is benign.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub identity: Option<UserInfo>,
    pub status: SessionStatus,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            status: SessionStatus::Uninitialized,
        }
    }
}

impl SessionState {
    /// Commit an identity notification. An absent identity still resolves the
    /// check — "we know you are signed out" is a resolved state.
    pub fn set_identity(&mut self, identity: Option<UserInfo>) {
        self.identity = identity;
        self.status = SessionStatus::Resolved;
    }

    /// Mark the check as in flight. The previous identity is kept; it is
    /// replaced (or confirmed) by the next commit.
    pub fn set_checking(&mut self) {
        self.status = SessionStatus::Checking;
    }

    /// Drop the identity and return to the uninitialized state.
    pub fn clear(&mut self) {
        self.identity = None;
        self.status = SessionStatus::Uninitialized;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Resolved && self.identity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn someone() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            email: "editor@archive.com".into(),
        }
    }

    #[test]
    fn starts_uninitialized_without_identity() {
        let state = SessionState::default();
        assert_eq!(state.status, SessionStatus::Uninitialized);
        assert!(state.identity.is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn set_identity_resolves() {
        let mut state = SessionState::default();
        state.set_checking();
        state.set_identity(Some(someone()));
        assert_eq!(state.status, SessionStatus::Resolved);
        assert!(state.is_authenticated());
    }

    #[test]
    fn absent_identity_still_resolves() {
        let mut state = SessionState::default();
        state.set_checking();
        state.set_identity(None);
        assert_eq!(state.status, SessionStatus::Resolved);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn commits_are_last_write_wins() {
        let mut state = SessionState::default();
        // The subscription's initial notification may land before or after the
        // one-shot fetch; either order converges on the same state.
        state.set_identity(Some(someone()));
        state.set_identity(Some(someone()));
        assert_eq!(state.identity, Some(someone()));
        state.set_identity(None);
        assert!(state.identity.is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = SessionState::default();
        state.set_identity(Some(someone()));
        state.clear();
        assert_eq!(state, SessionState::default());
    }
}
