use super::*;

fn user(id: i64) -> SessionUser {
    SessionUser {
        id,
        email: format!("user{id}@example.com"),
        username: format!("user{id}"),
        access_token: "t".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_uninitialized() {
    let state = SessionState::default();
    assert_eq!(state.is_authenticated, None);
    assert!(state.user.is_none());
}

#[test]
fn session_state_default_is_not_logged_in() {
    assert!(!SessionState::default().is_logged_in());
}

// =============================================================
// login / register transitions
// =============================================================

#[test]
fn login_establishes_session_from_payload() {
    let mut state = SessionState::default();
    state.login(user(1));
    assert_eq!(state.is_authenticated, Some(true));
    assert_eq!(state.user, Some(user(1)));
    assert!(state.is_logged_in());
}

#[test]
fn login_twice_with_same_payload_is_idempotent() {
    let mut once = SessionState::default();
    once.login(user(1));
    let mut twice = SessionState::default();
    twice.login(user(1));
    twice.login(user(1));
    assert_eq!(once, twice);
}

#[test]
fn login_with_new_payload_replaces_user_wholesale() {
    let mut state = SessionState::default();
    state.login(user(1));
    state.login(user(2));
    assert_eq!(state.user, Some(user(2)));
    assert!(state.is_logged_in());
}

#[test]
fn register_has_same_effect_shape_as_login() {
    let mut via_register = SessionState::default();
    via_register.register(user(7));
    let mut via_login = SessionState::default();
    via_login.login(user(7));
    assert_eq!(via_register, via_login);
}

// =============================================================
// logout transition
// =============================================================

#[test]
fn logout_resets_to_initial_state() {
    let mut state = SessionState::default();
    state.login(user(1));
    state.logout();
    assert_eq!(state, SessionState::default());
}

#[test]
fn logout_is_safe_when_already_logged_out() {
    let mut state = SessionState::default();
    state.logout();
    state.logout();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Invariant: authenticated flag tracks user presence
// =============================================================

#[test]
fn flag_and_user_presence_agree_across_all_transitions() {
    let mut state = SessionState::default();
    assert_eq!(state.is_logged_in(), state.user.is_some());
    state.login(user(1));
    assert_eq!(state.is_logged_in(), state.user.is_some());
    state.register(user(2));
    assert_eq!(state.is_logged_in(), state.user.is_some());
    state.logout();
    assert_eq!(state.is_logged_in(), state.user.is_some());
}
