//! Outbound HTTP gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call made by the session store goes through an
//! [`HttpGateway`]. The browser implementation sends same-origin-style
//! credentialed requests (`credentials: include`) so the backend's HttpOnly
//! session cookies ride along; no token is ever visible to client code.
//!
//! ERROR HANDLING
//! ==============
//! A 401 is reported as [`GatewayError::Unauthorized`] and never retried.
//! The gateway does not touch session state; callers decide what a failure
//! means.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use futures::future::LocalBoxFuture;
use serde_json::Value;

/// HTTP verbs used by the auth contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Failure of a single gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Sends one request and resolves to the decoded JSON body.
///
/// Futures are `'static` and not `Send`: they run on the single UI thread
/// via `spawn_local`.
pub trait HttpGateway: Send + Sync {
    fn send(&self, method: Method, path: &str, body: Option<Value>) -> LocalBoxFuture<'static, Result<Value, GatewayError>>;
}

/// Map a completed HTTP exchange to the gateway result.
///
/// Empty 2xx bodies decode to `Value::Null` so endpoints like logout do not
/// fail on a bodiless reply.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<Value, GatewayError> {
    if status == 401 {
        return Err(GatewayError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(GatewayError::Status { status, message: extract_message(body) });
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Pull a non-empty top-level `message` string out of an error body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() { None } else { Some(message.to_owned()) }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Gateway backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct BrowserGateway {
    base_url: String,
}

impl BrowserGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HttpGateway for BrowserGateway {
    fn send(&self, method: Method, path: &str, body: Option<Value>) -> LocalBoxFuture<'static, Result<Value, GatewayError>> {
        let url = join_url(&self.base_url, path);
        Box::pin(async move {
            #[cfg(feature = "hydrate")]
            {
                use gloo_net::http::Request;
                use web_sys::RequestCredentials;

                let builder = match method {
                    Method::Get => Request::get(&url),
                    Method::Post => Request::post(&url),
                }
                .credentials(RequestCredentials::Include);
                let request = match body {
                    Some(payload) => builder.json(&payload),
                    None => builder.build(),
                }
                .map_err(|e| GatewayError::Network(e.to_string()))?;

                let resp = request.send().await.map_err(|e| GatewayError::Network(e.to_string()))?;
                let status = resp.status();
                let text = resp.text().await.map_err(|e| GatewayError::Network(e.to_string()))?;
                let result = interpret_response(status, &text);
                if matches!(result, Err(GatewayError::Unauthorized)) {
                    leptos::logging::warn!("{} {url}: unauthorized", method.as_str());
                }
                result
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (method, url, body);
                Err(GatewayError::Network("not available on server".to_owned()))
            }
        })
    }
}
