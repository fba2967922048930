//! Configuration management for the Freshdesk client.
//!
//! Configuration can be built directly with [`Config::new`] or loaded from
//! environment variables with [`Config::from_env`]. Both paths run the same
//! validation.

use std::env;
use std::fmt;

use url::Url;

use crate::error::FreshdeskError;

/// Default client-side quota when none is configured.
pub const DEFAULT_MAX_REQUESTS_PER_MINUTE: u32 = 50;

/// Password sent alongside an API key. Freshdesk ignores it but requires one.
pub const API_KEY_PASSWORD: &str = "X";

/// Configuration for connecting to a Freshdesk account.
///
/// The username and password are never logged; the `Debug` impl redacts them.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the account (e.g., `https://acme.freshdesk.com`).
    pub base_url: String,

    /// Basic auth username, usually the agent's API key.
    username: String,

    /// Basic auth password.
    password: String,

    /// Client-side ceiling on outbound requests per minute.
    pub max_requests_per_minute: u32,
}

impl Config {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if the base URL is not an absolute
    /// http(s) URL, the username is empty, or the request limit is zero.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        max_requests_per_minute: u32,
    ) -> Result<Self, FreshdeskError> {
        let base_url = Self::validate_base_url(base_url.into())?;
        let username = username.into();
        if username.trim().is_empty() {
            return Err(FreshdeskError::invalid_config("username must not be empty"));
        }
        if max_requests_per_minute == 0 {
            return Err(FreshdeskError::invalid_config(
                "max_requests_per_minute must be positive",
            ));
        }

        Ok(Config {
            base_url,
            username,
            password: password.into(),
            max_requests_per_minute,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FRESHDESK_BASE_URL` (required): account URL
    /// - `FRESHDESK_API_KEY` (required): agent API key, used as the username
    /// - `FRESHDESK_PASSWORD` (optional): defaults to `X`
    /// - `FRESHDESK_MAX_REQUESTS_PER_MINUTE` (optional): defaults to 50
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, FreshdeskError> {
        let base_url = Self::get_required_env("FRESHDESK_BASE_URL")?;
        let api_key = Self::get_required_env("FRESHDESK_API_KEY")?;
        Self::validate_api_key(&api_key)?;

        let password =
            env::var("FRESHDESK_PASSWORD").unwrap_or_else(|_| API_KEY_PASSWORD.to_string());

        let max_requests_per_minute = match env::var("FRESHDESK_MAX_REQUESTS_PER_MINUTE") {
            Ok(raw) => Self::parse_limit(&raw)?,
            Err(_) => DEFAULT_MAX_REQUESTS_PER_MINUTE,
        };

        Self::new(base_url, api_key, password, max_requests_per_minute)
    }

    /// Returns the Basic auth username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the Basic auth password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshdeskError> {
        env::var(name)
            .map_err(|_| FreshdeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshdeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, FreshdeskError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url)
            .map_err(|e| FreshdeskError::invalid_config(format!("invalid base URL: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FreshdeskError::invalid_config(
                "base URL must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    /// Rejects obvious placeholder API keys copied from sample `.env` files.
    fn validate_api_key(key: &str) -> Result<(), FreshdeskError> {
        let key_lower = key.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreshdeskError::invalid_config(
                    "FRESHDESK_API_KEY appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }

    fn parse_limit(raw: &str) -> Result<u32, FreshdeskError> {
        match raw.trim().parse::<u32>() {
            Ok(limit) if limit > 0 => Ok(limit),
            _ => Err(FreshdeskError::invalid_config(format!(
                "FRESHDESK_MAX_REQUESTS_PER_MINUTE must be a positive integer, got {:?}",
                raw
            ))),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .field("max_requests_per_minute", &self.max_requests_per_minute)
            .finish()
    }
}
