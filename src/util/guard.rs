//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect behavior:
//! `components::require_auth` feeds the current session snapshot and the
//! requested location through [`evaluate`] and acts on the outcome.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Public entry point unauthenticated users are redirected to.
pub const LOGIN_ROUTE: &str = "/login";

/// The location a user attempted to visit before being redirected to login.
/// Carried through the redirect so login can return the user there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub from: String,
}

/// Outcome of a guard evaluation for one requested location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested protected content unchanged.
    Admitted,
    /// Replace the current navigation entry with [`LOGIN_ROUTE`], remembering
    /// where the user was headed.
    Redirected(NavigationIntent),
}

/// Decide whether `requested` may render given the current session snapshot.
pub fn evaluate(session: &SessionState, requested: &str) -> GuardOutcome {
    if session.is_logged_in() {
        GuardOutcome::Admitted
    } else {
        GuardOutcome::Redirected(NavigationIntent {
            from: requested.to_owned(),
        })
    }
}

/// Where to send the user after a successful login: back to the location they
/// originally asked for, or the feed when they came to login directly.
pub fn post_login_destination(intent: Option<&NavigationIntent>) -> &str {
    intent.map_or("/", |i| i.from.as_str())
}
