use super::*;
use crate::testing::{MockGateway, sample_user, sample_user_json};
use futures::executor::block_on;

// =============================================================
// Envelope handling
// =============================================================

#[test]
fn unwrap_envelope_passes_bare_payload_through() {
    let body = serde_json::json!({"user": sample_user_json(), "message": "hi"});
    assert_eq!(unwrap_envelope(body.clone()), body);
}

#[test]
fn unwrap_envelope_lifts_data_and_keeps_outer_message() {
    let body = serde_json::json!({"code": "SUCCESS", "message": "Success", "data": {"user": sample_user_json()}});
    let unwrapped = unwrap_envelope(body);
    assert_eq!(unwrapped["message"], "Success");
    assert_eq!(unwrapped["user"]["email"], "a@b.com");
}

#[test]
fn unwrap_envelope_inner_message_wins() {
    let body = serde_json::json!({"code": "SUCCESS", "message": "outer", "data": {"message": "inner"}});
    assert_eq!(unwrap_envelope(body)["message"], "inner");
}

#[test]
fn unwrap_envelope_null_data_is_null() {
    let body = serde_json::json!({"code": "SUCCESS", "message": "Success", "data": null});
    assert_eq!(unwrap_envelope(body), Value::Null);
}

#[test]
fn decode_current_user_accepts_wrapped_and_bare_identity() {
    let wrapped = serde_json::json!({"user": sample_user_json()});
    assert_eq!(decode_current_user(wrapped).unwrap(), sample_user());

    let enveloped = serde_json::json!({"code": "SUCCESS", "message": "Success", "data": {
        "id": 1, "email": "a@b.com", "name": "A", "socialType": "LOCAL", "profileImageUrl": null
    }});
    assert_eq!(decode_current_user(enveloped).unwrap(), sample_user());
}

#[test]
fn decode_current_user_rejects_empty_body() {
    assert!(matches!(decode_current_user(Value::Null), Err(GatewayError::Decode(_))));
}

#[test]
fn decode_auth_response_null_is_empty_response() {
    assert_eq!(decode_auth_response(Value::Null).unwrap(), AuthResponse::default());
}

// =============================================================
// Endpoint calls
// =============================================================

#[test]
fn login_posts_credentials_to_login_path() {
    let gateway = MockGateway::new();
    gateway.reply(Ok(serde_json::json!({"user": sample_user_json(), "message": "Welcome back"})));
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "password1".to_owned() };

    let response = block_on(login(gateway.as_ref(), &request)).unwrap();

    assert_eq!(response.user, Some(sample_user()));
    assert_eq!(response.message.as_deref(), Some("Welcome back"));
    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].path, AUTH_LOGIN_PATH);
    assert_eq!(calls[0].body, Some(serde_json::json!({"email": "a@b.com", "password": "password1"})));
}

#[test]
fn register_posts_display_name() {
    let gateway = MockGateway::new();
    gateway.reply(Ok(serde_json::json!({"user": sample_user_json()})));
    let request = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "password1".to_owned(),
        display_name: "A".to_owned(),
    };

    block_on(register(gateway.as_ref(), &request)).unwrap();

    let calls = gateway.calls();
    assert_eq!(calls[0].path, AUTH_REGISTER_PATH);
    assert_eq!(calls[0].body.as_ref().unwrap()["displayName"], "A");
}

#[test]
fn fetch_current_user_propagates_unauthorized() {
    let gateway = MockGateway::new();
    gateway.reply(Err(GatewayError::Unauthorized));
    assert_eq!(block_on(fetch_current_user(gateway.as_ref())), Err(GatewayError::Unauthorized));
    assert_eq!(gateway.calls()[0].method, Method::Get);
    assert_eq!(gateway.calls()[0].path, AUTH_ME_PATH);
}

#[test]
fn logout_ignores_body() {
    let gateway = MockGateway::new();
    gateway.reply(Ok(serde_json::json!({"code": "SUCCESS"})));
    assert_eq!(block_on(logout(gateway.as_ref())), Ok(()));
    assert_eq!(gateway.calls()[0].path, AUTH_LOGOUT_PATH);
    assert_eq!(gateway.calls()[0].body, None);
}
