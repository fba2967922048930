//! Freshdesk connection check.
//!
//! Loads the client configuration, verifies that the account is reachable
//! with the configured credentials, and reports basic account facts.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHDESK_BASE_URL`: Account URL
//! - `FRESHDESK_API_KEY`: Agent API key
//! - `FRESHDESK_MAX_REQUESTS_PER_MINUTE` (optional)
//!
//! # Usage
//!
//! ```bash
//! FRESHDESK_BASE_URL=https://acme.freshdesk.com FRESHDESK_API_KEY=xxx ./freshdesk
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use freshdesk::{config, FreshdeskClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshdesk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Freshdesk client v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(
        base_url = %config.base_url,
        max_requests_per_minute = config.max_requests_per_minute,
        "Configuration loaded"
    );

    let client = FreshdeskClient::new(&config).context("Failed to create Freshdesk client")?;

    tracing::info!("Testing connection to Freshdesk...");
    client
        .test_connection()
        .await
        .context("Freshdesk is not reachable with this configuration")?;

    let companies = client
        .companies()
        .list()
        .await
        .context("Failed to list companies")?;

    tracing::info!(
        companies = companies.len(),
        capacity = client.rate_limiter().capacity(),
        "Connection OK"
    );

    Ok(())
}
