//! # Freshdesk
//!
//! A typed, rate-limited client for the Freshdesk helpdesk API (v2),
//! covering tickets, contacts, and companies.
//!
//! ## Features
//!
//! - **Typed entities**: read shapes plus omit-if-empty create and update payloads
//! - **Client-side quota**: every request waits for a token bucket sized from
//!   the configured requests-per-minute limit, plus a burst allowance
//! - **Plain errors**: a status other than the expected one surfaces the
//!   server's raw response body; nothing is retried behind your back
//! - **Security**: credentials are never logged or included in errors
//!
//! Every operation is an `async fn` on tokio. There is no blocking API; a
//! call held back by the quota suspends its task rather than the thread.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - The unified [`FreshdeskError`](error::FreshdeskError) type
//! - [`rate_limit`] - Token bucket shared by every request
//! - [`gateway`] - The request pipeline every operation goes through
//! - [`resources`] - One client per entity: tickets, contacts, companies
//! - [`models`] - Request and response shapes
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `FRESHDESK_BASE_URL`: Account URL, e.g. `https://acme.freshdesk.com`
//! - `FRESHDESK_API_KEY`: Agent API key
//! - `FRESHDESK_PASSWORD` (optional): defaults to `X`
//! - `FRESHDESK_MAX_REQUESTS_PER_MINUTE` (optional): defaults to 50
//!
//! ## Example
//!
//! ```ignore
//! use freshdesk::config::Config;
//! use freshdesk::models::{ticket_status, TicketUpdatePayload};
//! use freshdesk::FreshdeskClient;
//!
//! async fn example() -> Result<(), freshdesk::error::FreshdeskError> {
//!     let config = Config::new("https://acme.freshdesk.com", "api-key", "X", 100)?;
//!     let client = FreshdeskClient::new(&config)?;
//!
//!     // Resolve every open ticket on the first page for company 42
//!     for ticket in client.tickets().list_by_company(42, 30, 1).await? {
//!         if ticket.is_open() {
//!             let resolve = TicketUpdatePayload {
//!                 status: Some(ticket_status::RESOLVED),
//!                 ..Default::default()
//!             };
//!             client.tickets().update(ticket.id, &resolve).await?;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod rate_limit;
pub mod resources;

pub use client::FreshdeskClient;
