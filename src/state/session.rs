//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Mutated only through the three
//! transitions below; the gateway call that produces a payload happens in the
//! calling page, never here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Authentication state for the current user.
///
/// `is_authenticated` is three-valued: `None` means the session is
/// uninitialized (process start or after logout), `Some(true)` means a
/// session is established. Invariant across all transitions:
/// `is_authenticated == Some(true)` exactly when `user` is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: Option<bool>,
    pub user: Option<SessionUser>,
}

impl SessionState {
    /// Establish a session from a successful login payload.
    pub fn login(&mut self, user: SessionUser) {
        self.is_authenticated = Some(true);
        self.user = Some(user);
    }

    /// Establish a session from a successful registration payload.
    /// Registration signs the user in immediately, so the effect is the same
    /// as [`SessionState::login`].
    pub fn register(&mut self, user: SessionUser) {
        self.login(user);
    }

    /// Drop the session. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.is_authenticated = None;
        self.user = None;
    }

    /// Canonical authenticated predicate, applied uniformly at the route
    /// guard boundary.
    pub fn is_logged_in(&self) -> bool {
        self.is_authenticated == Some(true)
    }
}
