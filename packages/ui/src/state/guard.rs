//! Route guard: the admit/redirect decision for restricted views.

use super::session::{SessionState, SessionStatus};

/// What a restricted route should do for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The identity check is still pending; render a placeholder and wait.
    Verifying,
    /// The check resolved with no identity; send the visitor to login,
    /// remembering where they were headed.
    RedirectToLogin,
    /// The check resolved with an identity; render the wrapped content.
    Admit,
}

/// Pure function of the session store. A `Checking` session never admits, no
/// matter what identity is still cached from before the recheck.
pub fn route_decision(session: &SessionState) -> GuardDecision {
    match session.status {
        SessionStatus::Uninitialized | SessionStatus::Checking => GuardDecision::Verifying,
        SessionStatus::Resolved => {
            if session.identity.is_some() {
                GuardDecision::Admit
            } else {
                GuardDecision::RedirectToLogin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserInfo;

    fn someone() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            email: "editor@archive.com".into(),
        }
    }

    #[test]
    fn checking_never_admits() {
        let mut state = SessionState::default();
        assert_eq!(route_decision(&state), GuardDecision::Verifying);

        // Even with a stale identity present, an in-flight recheck blocks.
        state.set_identity(Some(someone()));
        state.set_checking();
        assert_eq!(route_decision(&state), GuardDecision::Verifying);
    }

    #[test]
    fn resolved_without_identity_redirects() {
        let mut state = SessionState::default();
        state.set_identity(None);
        assert_eq!(route_decision(&state), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn resolved_with_identity_admits() {
        let mut state = SessionState::default();
        state.set_identity(Some(someone()));
        assert_eq!(route_decision(&state), GuardDecision::Admit);
    }
}
