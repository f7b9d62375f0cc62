//! Server configuration parsed from environment variables.

use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE_MAX_AGE_SECS: i64 = 3600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required")]
    Missing { var: &'static str },
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the external backend API, without a trailing slash.
    pub backend_url: String,
    /// `Secure` flag on the OAuth hand-off cookie.
    pub cookie_secure: bool,
    pub session_cookie_max_age_secs: i64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `BACKEND_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: default true; disable only for plain-http local dev
    /// - `SESSION_COOKIE_MAX_AGE_SECS`: default 3600
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a missing `BACKEND_URL` or an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing { var: "BACKEND_URL" })?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", value: backend_url });
        }

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let cookie_secure = match lookup("COOKIE_SECURE") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
        };
        let session_cookie_max_age_secs = parse_or(
            "SESSION_COOKIE_MAX_AGE_SECS",
            lookup("SESSION_COOKIE_MAX_AGE_SECS"),
            DEFAULT_SESSION_COOKIE_MAX_AGE_SECS,
        )?;

        Ok(Self { port, backend_url, cookie_secure, session_cookie_max_age_secs })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
