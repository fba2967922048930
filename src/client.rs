//! Entry point tying the gateway and the resource clients together.

use crate::config::Config;
use crate::error::FreshdeskError;
use crate::gateway::Gateway;
use crate::models::Ticket;
use crate::rate_limit::RateLimiter;
use crate::resources::{Companies, Contacts, Tickets};

/// Client for one Freshdesk account.
///
/// Hands out resource clients that all share this client's gateway, and
/// so its connection pool and rate limiter.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = FreshdeskClient::new(&config)?;
///
/// let ticket = client.tickets().get(17).await?;
/// println!("#{}: {}", ticket.id, ticket.display_subject());
/// ```
#[derive(Clone)]
pub struct FreshdeskClient {
    gateway: Gateway,
}

impl FreshdeskClient {
    /// Creates a client with its own rate limiter.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable or the HTTP client
    /// fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshdeskError> {
        Ok(Self {
            gateway: Gateway::new(config)?,
        })
    }

    /// Creates a client that shares an existing rate limiter.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn with_rate_limiter(config: &Config, limiter: RateLimiter) -> Result<Self, FreshdeskError> {
        Ok(Self {
            gateway: Gateway::with_rate_limiter(config, limiter)?,
        })
    }

    /// Ticket operations.
    pub fn tickets(&self) -> Tickets {
        Tickets::new(self.gateway.clone())
    }

    /// Contact operations.
    pub fn contacts(&self) -> Contacts {
        Contacts::new(self.gateway.clone())
    }

    /// Company operations.
    pub fn companies(&self) -> Companies {
        Companies::new(self.gateway.clone())
    }

    /// Returns the shared rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        self.gateway.rate_limiter()
    }

    /// Tests connectivity and credentials.
    ///
    /// Fetches a single ticket listing entry, which any agent may read.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::ConnectionTest` with a hint about the most
    /// likely misconfiguration.
    pub async fn test_connection(&self) -> Result<(), FreshdeskError> {
        tracing::debug!("Testing connection to Freshdesk");

        let result: Result<Vec<Ticket>, FreshdeskError> =
            self.gateway.get("/api/v2/tickets?per_page=1").await;

        match result {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(e) if matches!(e.status().map(|s| s.as_u16()), Some(401) | Some(403)) => {
                Err(FreshdeskError::connection_test(
                    "Authentication failed - verify FRESHDESK_API_KEY is correct",
                ))
            }
            Err(FreshdeskError::Transport(e)) => Err(FreshdeskError::connection_test(format!(
                "HTTP error: {} - verify FRESHDESK_BASE_URL is correct and reachable",
                e
            ))),
            Err(e) => Err(FreshdeskError::connection_test(e.to_string())),
        }
    }
}
