//! Server configuration parsed from environment variables.

use subtle::{Choice, ConstantTimeEq};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither `ADMIN_API_KEY` nor `ADMIN_PASSWORD` is set and auth is enabled.
    #[error("missing admin credential: set ADMIN_API_KEY or ADMIN_PASSWORD (or ADMIN_AUTH_DISABLED=true)")]
    MissingCredential,

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// Credentials the admin API accepts. Either may be used by the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub api_key: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AdminCredentials {
    /// Whether `presented` matches the API key or the admin password.
    ///
    /// Every configured secret is compared in constant time, whichever
    /// matches first.
    pub fn accepts(&self, presented: &str) -> bool {
        if presented.is_empty() {
            return false;
        }
        let mut matched = Choice::from(0);
        for expected in [self.api_key.as_deref(), self.password.as_deref()].into_iter().flatten() {
            matched |= presented.as_bytes().ct_eq(expected.as_bytes());
        }
        matched.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub credentials: AdminCredentials,
    /// Local development only: every request is treated as authorized.
    pub auth_disabled: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ADMIN_API_KEY`: accepted credential
    /// - `ADMIN_PASSWORD`: accepted credential, alternative to the key
    /// - `ADMIN_AUTH_DISABLED`: `1/true/yes/on` skips the credential check
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT` is invalid or when no credential is
    /// configured while auth is enabled.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let credentials = AdminCredentials {
            api_key: env_non_empty("ADMIN_API_KEY"),
            password: env_non_empty("ADMIN_PASSWORD"),
        };
        let auth_disabled = env_bool("ADMIN_AUTH_DISABLED").unwrap_or(false);

        if !auth_disabled && credentials.api_key.is_none() && credentials.password.is_none() {
            return Err(ConfigError::MissingCredential);
        }

        Ok(Self { port, credentials, auth_disabled })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
