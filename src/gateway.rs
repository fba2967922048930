//! Rate-limited HTTP gateway to the Freshdesk API.
//!
//! Every operation in the crate goes through [`Gateway`]. It owns the
//! authenticated `reqwest::Client` and the client-side [`RateLimiter`], and
//! implements one request contract:
//!
//! 1. Wait for a rate limit token.
//! 2. Send the request with `Content-Type: application/json` and the Basic
//!    auth header.
//! 3. If no response arrives, fail with [`FreshdeskError::Transport`].
//! 4. If the status is not the one the operation expects, fail with
//!    [`FreshdeskError::Api`] carrying the raw body.
//! 5. Otherwise decode the body, failing with [`FreshdeskError::Decode`].
//!
//! There is no retry. Failures go straight back to the caller.
//!
//! # Security
//!
//! The Authorization header is marked sensitive and credentials are never
//! logged.

use std::num::NonZeroU32;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::FreshdeskError;
use crate::rate_limit::RateLimiter;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared request pipeline for all resource clients.
///
/// Cloning is cheap: clones share the connection pool and the rate limiter.
#[derive(Clone)]
pub struct Gateway {
    /// The underlying HTTP client with the auth header preinstalled.
    http: Client,

    /// Account base URL without a trailing slash.
    base_url: String,

    /// Client-side quota, shared by every clone.
    limiter: RateLimiter,

    /// Basic auth username, kept only to scrub it from log output.
    api_key: String,
}

impl Gateway {
    /// Creates a gateway with its own rate limiter sized from the config.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if the request limit is zero and
    /// `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshdeskError> {
        let max_requests_per_minute = NonZeroU32::new(config.max_requests_per_minute)
            .ok_or_else(|| {
                FreshdeskError::invalid_config("max_requests_per_minute must be positive")
            })?;

        Self::with_rate_limiter(config, RateLimiter::new(max_requests_per_minute))
    }

    /// Creates a gateway that draws from an existing rate limiter.
    ///
    /// Use this when several clients talk to the same account and must
    /// share one quota.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn with_rate_limiter(config: &Config, limiter: RateLimiter) -> Result<Self, FreshdeskError> {
        let mut auth = HeaderValue::from_str(&basic_auth_value(
            config.username(),
            config.password(),
        ))
        .map_err(|_| FreshdeskError::invalid_config("credentials are not valid header text"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(FreshdeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter,
            api_key: config.username().to_string(),
        })
    }

    /// Returns the rate limiter, e.g. to hand it to another client.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// GET `path`, expecting 200.
    pub async fn get<T>(&self, path: &str) -> Result<T, FreshdeskError>
    where
        T: DeserializeOwned,
    {
        self.execute::<T, ()>(Method::GET, path, None, StatusCode::OK)
            .await
    }

    /// POST `body` to `path`, expecting 201.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, FreshdeskError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body), StatusCode::CREATED)
            .await
    }

    /// PUT `body` to `path`, expecting 200.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, FreshdeskError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, path, Some(body), StatusCode::OK)
            .await
    }

    /// DELETE `path`, expecting 204. The empty body is not decoded.
    pub async fn delete(&self, path: &str) -> Result<(), FreshdeskError> {
        self.send::<()>(Method::DELETE, path, None, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Runs one request and decodes the response into `T`.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - API path, with any query string already embedded
    /// * `body` - Optional JSON body
    /// * `expected` - The single status code that signals success
    pub async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<T, FreshdeskError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body, expected).await?;
        let text = response.text().await.map_err(FreshdeskError::Transport)?;

        tracing::trace!(body = %text, "Freshdesk API response");

        serde_json::from_str(&text).map_err(FreshdeskError::Decode)
    }

    /// Sends a request and checks its status, leaving the body unread.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<Response, FreshdeskError>
    where
        B: Serialize + ?Sized,
    {
        self.limiter.acquire().await;

        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(method = %method, path = %path, "Making Freshdesk API request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let json = serde_json::to_vec(body).map_err(FreshdeskError::Serialization)?;
            req = req.body(json);
        }

        let response = req.send().await.map_err(|e| {
            tracing::debug!(
                method = %method,
                path = %path,
                error = %FreshdeskError::sanitize_message(&e.to_string(), &self.api_key),
                "Freshdesk API request failed before a response"
            );
            FreshdeskError::Transport(e)
        })?;

        let status = response.status();
        if status != expected {
            let body = response.text().await.map_err(FreshdeskError::Transport)?;
            tracing::warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                expected = expected.as_u16(),
                "Unexpected status from Freshdesk API"
            );
            return Err(FreshdeskError::api(status, body));
        }

        Ok(response)
    }
}

/// Builds the `Authorization` value for HTTP Basic auth.
fn basic_auth_value(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", username, password))
    )
}
