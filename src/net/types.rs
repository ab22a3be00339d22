//! Wire DTOs for the auth REST contract.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Several backend
//! generations disagree on naming (`name` vs `displayName`, `socialType` vs
//! `provider`), so the identity type accepts both spellings on input and
//! always emits the canonical one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity provider that created the account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthProvider {
    Local,
    Google,
    Naver,
    Kakao,
    Apple,
    #[default]
    Unknown,
}

impl AuthProvider {
    /// Wire spelling (`"LOCAL"`, `"GOOGLE"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Google => "GOOGLE",
            Self::Naver => "NAVER",
            Self::Kakao => "KAKAO",
            Self::Apple => "APPLE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable name for badges and buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "Email",
            Self::Google => "Google",
            Self::Naver => "Naver",
            Self::Kakao => "Kakao",
            Self::Apple => "Apple",
            Self::Unknown => "Unknown",
        }
    }

    /// Case-insensitive parse; anything unrecognized is `Unknown`.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOCAL" => Self::Local,
            "GOOGLE" => Self::Google,
            "NAVER" => Self::Naver,
            "KAKAO" => Self::Kakao,
            "APPLE" => Self::Apple,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for AuthProvider {
    fn from(raw: String) -> Self {
        Self::from_wire(&raw)
    }
}

impl From<AuthProvider> for String {
    fn from(provider: AuthProvider) -> Self {
        provider.as_str().to_owned()
    }
}

/// An authenticated user as returned by `/auth/me`, `/auth/login` and
/// `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Numeric account identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    /// Account email address.
    pub email: String,
    /// Name shown in the UI.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Provider that created the account.
    #[serde(alias = "socialType", default)]
    pub provider: AuthProvider,
    /// Profile image URL, if the provider supplied one.
    #[serde(alias = "profileImageUrl", default)]
    pub avatar_url: Option<String>,
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Success payload of login/register.
///
/// `user` is optional because cookie-only backends may answer with just a
/// status message and expect the client to re-query `/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<UserIdentity>,
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible id"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("id {raw:?} is not numeric"))),
        _ => Err(D::Error::custom("expected number or numeric string id")),
    }
}
