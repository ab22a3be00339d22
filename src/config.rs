//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values come from
//! `option_env!` when the bundle is compiled. Parsing goes through
//! [`ClientConfig::from_lookup`] so tests can supply their own variables.

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_REGISTER_REDIRECT_MS: u64 = 1200;

pub const API_BASE_URL_VAR: &str = "AURA_API_BASE_URL";
pub const STRICT_LOGIN_PASSWORD_VAR: &str = "AURA_STRICT_LOGIN_PASSWORD";
pub const REGISTER_REDIRECT_MS_VAR: &str = "AURA_REGISTER_REDIRECT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be `true` or `false`, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidMillis { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST path, without a trailing `/`.
    pub api_base_url: String,
    /// Enforce the minimum password length on sign-in.
    pub strict_login_password: bool,
    /// Pause between the register success message and the next screen.
    pub register_redirect_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            strict_login_password: true,
            register_redirect_ms: DEFAULT_REGISTER_REDIRECT_MS,
        }
    }
}

impl ClientConfig {
    /// Build from an arbitrary variable source.
    ///
    /// Optional:
    /// - `AURA_API_BASE_URL`: default `/api`
    /// - `AURA_STRICT_LOGIN_PASSWORD`: `true` (default) or `false`
    /// - `AURA_REGISTER_REDIRECT_MS`: default 1200
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(lookup(API_BASE_URL_VAR).as_deref());
        let strict_login_password = parse_bool(STRICT_LOGIN_PASSWORD_VAR, lookup(STRICT_LOGIN_PASSWORD_VAR), true)?;
        let register_redirect_ms =
            parse_millis(REGISTER_REDIRECT_MS_VAR, lookup(REGISTER_REDIRECT_MS_VAR), DEFAULT_REGISTER_REDIRECT_MS)?;
        Ok(Self { api_base_url, strict_login_password, register_redirect_ms })
    }

    /// Build from the variables captured when the crate was compiled,
    /// falling back to defaults if any of them is malformed.
    pub fn from_build_env() -> Self {
        let captured = [
            (API_BASE_URL_VAR, option_env!("AURA_API_BASE_URL")),
            (STRICT_LOGIN_PASSWORD_VAR, option_env!("AURA_STRICT_LOGIN_PASSWORD")),
            (REGISTER_REDIRECT_MS_VAR, option_env!("AURA_REGISTER_REDIRECT_MS")),
        ];
        let lookup = |key: &str| {
            captured.iter().find(|(name, _)| *name == key).and_then(|(_, value)| value.map(str::to_owned))
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            leptos::logging::warn!("invalid build configuration, using defaults: {e}");
            Self::default()
        })
    }

    /// Scheme and host of an absolute API base URL; empty when the API is
    /// served from the page's own origin.
    pub fn api_origin(&self) -> &str {
        let base = self.api_base_url.as_str();
        let Some(scheme_end) = base.find("://") else {
            return "";
        };
        let host_start = scheme_end + 3;
        match base[host_start..].find('/') {
            Some(offset) => &base[..host_start + offset],
            None => base,
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    trimmed.trim_end_matches('/').to_owned()
}

fn parse_bool(var: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

fn parse_millis(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidMillis { var, value })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
