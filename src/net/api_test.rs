use super::*;

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "register failed: 409");
}

#[test]
fn logout_failed_message_formats_status() {
    assert_eq!(logout_failed_message(500), "logout failed: 500");
}

#[test]
fn gateway_error_display_passes_rejection_through() {
    let err = GatewayError::Rejected(login_failed_message(401));
    assert_eq!(err.to_string(), "login failed: 401");
}

#[test]
fn gateway_error_display_prefixes_transport_and_decode() {
    assert_eq!(
        GatewayError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        GatewayError::Decode("missing field `id`".to_owned()).to_string(),
        "invalid response body: missing field `id`"
    );
}
