//! Error types for the Freshdesk client.
//!
//! This module defines `FreshdeskError`, the unified error type returned by
//! every operation. Two kinds dominate in practice: transport failures,
//! where no response was received, and API failures, where the server
//! answered with a status other than the one the operation expects.
//!
//! # Security
//!
//! Credentials are never part of an error message. Use `sanitize_message()`
//! before logging text that may have passed through the request pipeline.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all Freshdesk operations.
#[derive(Error, Debug)]
pub enum FreshdeskError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status other than the expected one.
    ///
    /// The display form is the raw response body, which usually holds
    /// Freshdesk's structured error JSON.
    #[error("{body}")]
    Api {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// A success response carried a body that did not match the target type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

impl FreshdeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshdeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshdeskError::Config(message.into())
    }

    /// Creates an API error from a status code and raw body.
    pub fn api(status: StatusCode, body: impl Into<String>) -> Self {
        FreshdeskError::Api {
            status,
            body: body.into(),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        FreshdeskError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshdeskError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if no response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FreshdeskError::Transport(_))
    }

    /// Returns true if the server reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true if the server rejected the call for exceeding its quota.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    /// Returns true if the failure is transient and worth retrying.
    ///
    /// The client never retries on its own; this is a hint for callers.
    /// Transient failures are:
    /// - Timeouts and connection errors
    /// - HTTP 429 (rate limit)
    /// - HTTP 5xx server errors
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            FreshdeskError::Transport(e) => e.is_timeout() || e.is_connect(),
            FreshdeskError::Api { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            _ => false,
        }
    }

    /// Sanitizes a message by replacing every occurrence of a secret.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `secret` - The API key or password to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the secret replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}
