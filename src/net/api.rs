//! Typed helpers for the auth REST endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, GatewayError>`; none of them log or
//! touch session state. Envelope unwrapping tolerates both the bare
//! `{ user, message }` shape and the `{ code, message, data }` wrapper.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::gateway::{GatewayError, HttpGateway, Method};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, UserIdentity};

pub const AUTH_ME_PATH: &str = "/auth/me";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_REGISTER_PATH: &str = "/auth/register";
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout";

/// Fetch the identity behind the current session cookie.
pub async fn fetch_current_user(gateway: &dyn HttpGateway) -> Result<UserIdentity, GatewayError> {
    let body = gateway.send(Method::Get, AUTH_ME_PATH, None).await?;
    decode_current_user(body)
}

/// Sign in with email and password.
pub async fn login(gateway: &dyn HttpGateway, request: &LoginRequest) -> Result<AuthResponse, GatewayError> {
    let payload = serde_json::to_value(request).map_err(|e| GatewayError::Decode(e.to_string()))?;
    let body = gateway.send(Method::Post, AUTH_LOGIN_PATH, Some(payload)).await?;
    decode_auth_response(body)
}

/// Create an account.
pub async fn register(gateway: &dyn HttpGateway, request: &RegisterRequest) -> Result<AuthResponse, GatewayError> {
    let payload = serde_json::to_value(request).map_err(|e| GatewayError::Decode(e.to_string()))?;
    let body = gateway.send(Method::Post, AUTH_REGISTER_PATH, Some(payload)).await?;
    decode_auth_response(body)
}

/// End the server-side session. The reply body is ignored.
pub async fn logout(gateway: &dyn HttpGateway) -> Result<(), GatewayError> {
    gateway.send(Method::Post, AUTH_LOGOUT_PATH, None).await.map(|_| ())
}

/// Strip a `{ code, message, data }` envelope, keeping the outer message
/// when the inner payload is an object without one.
pub(crate) fn unwrap_envelope(body: Value) -> Value {
    let Value::Object(mut outer) = body else {
        return body;
    };
    if !outer.contains_key("code") || !outer.contains_key("data") {
        return Value::Object(outer);
    }
    let message = outer.remove("message");
    match outer.remove("data") {
        Some(Value::Object(mut inner)) => {
            if let Some(message) = message
                && !inner.contains_key("message")
            {
                inner.insert("message".to_owned(), message);
            }
            Value::Object(inner)
        }
        Some(other) => other,
        None => Value::Null,
    }
}

pub(crate) fn decode_auth_response(body: Value) -> Result<AuthResponse, GatewayError> {
    match unwrap_envelope(body) {
        Value::Null => Ok(AuthResponse::default()),
        value => serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string())),
    }
}

pub(crate) fn decode_current_user(body: Value) -> Result<UserIdentity, GatewayError> {
    let mut value = unwrap_envelope(body);
    if let Some(user) = value.get_mut("user").map(Value::take) {
        value = user;
    }
    serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))
}
