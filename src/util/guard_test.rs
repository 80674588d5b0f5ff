use super::*;
use crate::net::types::SessionUser;

fn logged_in() -> SessionState {
    let mut state = SessionState::default();
    state.login(SessionUser {
        id: 1,
        email: "a@b.com".to_owned(),
        username: "a".to_owned(),
        access_token: "t".to_owned(),
    });
    state
}

// =============================================================
// Admit / redirect decision
// =============================================================

#[test]
fn admits_when_session_is_established() {
    assert_eq!(evaluate(&logged_in(), "/"), GuardOutcome::Admitted);
}

#[test]
fn redirects_uninitialized_session_with_intent() {
    let outcome = evaluate(&SessionState::default(), "/");
    assert_eq!(
        outcome,
        GuardOutcome::Redirected(NavigationIntent { from: "/".to_owned() })
    );
}

#[test]
fn redirects_after_logout_even_from_established_session() {
    let mut state = logged_in();
    state.logout();
    assert!(matches!(evaluate(&state, "/"), GuardOutcome::Redirected(_)));
}

#[test]
fn admits_exactly_when_canonical_predicate_holds() {
    for state in [SessionState::default(), logged_in()] {
        let admitted = evaluate(&state, "/") == GuardOutcome::Admitted;
        assert_eq!(admitted, state.is_logged_in());
    }
}

#[test]
fn flag_predicate_and_user_presence_agree_on_reachable_states() {
    // The transitions maintain the session invariant, so the two competing
    // truthiness checks cannot disagree at the guard boundary.
    let mut state = SessionState::default();
    assert_eq!(state.is_logged_in(), state.user.is_some());
    state = logged_in();
    assert_eq!(state.is_logged_in(), state.user.is_some());
    state.logout();
    assert_eq!(state.is_logged_in(), state.user.is_some());
}

// =============================================================
// Navigation-intent round trip
// =============================================================

#[test]
fn post_login_destination_returns_to_original_intent() {
    let GuardOutcome::Redirected(intent) = evaluate(&SessionState::default(), "/") else {
        panic!("expected a redirect");
    };
    assert_eq!(post_login_destination(Some(&intent)), "/");
}

#[test]
fn post_login_destination_defaults_to_feed_without_intent() {
    assert_eq!(post_login_destination(None), "/");
}

#[test]
fn intent_preserves_arbitrary_requested_location() {
    let GuardOutcome::Redirected(intent) = evaluate(&SessionState::default(), "/feed/42") else {
        panic!("expected a redirect");
    };
    assert_eq!(post_login_destination(Some(&intent)), "/feed/42");
}
