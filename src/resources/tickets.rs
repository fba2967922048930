//! Ticket operations.

use crate::error::FreshdeskError;
use crate::gateway::Gateway;
use crate::models::{Ticket, TicketCreatePayload, TicketUpdatePayload};

const TICKETS_PATH: &str = "/api/v2/tickets";

/// Client for `/api/v2/tickets`.
#[derive(Clone)]
pub struct Tickets {
    gateway: Gateway,
}

impl Tickets {
    /// Creates a ticket client on top of a gateway.
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Fetches one ticket.
    pub async fn get(&self, id: u64) -> Result<Ticket, FreshdeskError> {
        self.gateway.get(&format!("{}/{}", TICKETS_PATH, id)).await
    }

    /// Lists tickets using the server's default filter and page size.
    pub async fn list(&self) -> Result<Vec<Ticket>, FreshdeskError> {
        self.gateway.get(TICKETS_PATH).await
    }

    /// Fetches one page of a company's tickets.
    ///
    /// Returns exactly what the server sent for that page; the caller walks
    /// further pages if it needs them. Pages are 1-based.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let page = client.tickets().list_by_company(42, 10, 2).await?;
    /// // GET /api/v2/tickets?company_id=42&per_page=10&page=2
    /// ```
    pub async fn list_by_company(
        &self,
        company_id: u64,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Ticket>, FreshdeskError> {
        let path = format!(
            "{}?company_id={}&per_page={}&page={}",
            TICKETS_PATH, company_id, per_page, page
        );
        self.gateway.get(&path).await
    }

    /// Creates a ticket.
    pub async fn create(&self, payload: &TicketCreatePayload) -> Result<Ticket, FreshdeskError> {
        self.gateway.post(TICKETS_PATH, payload).await
    }

    /// Applies a partial update to a ticket and returns the new state.
    pub async fn update(
        &self,
        id: u64,
        payload: &TicketUpdatePayload,
    ) -> Result<Ticket, FreshdeskError> {
        self.gateway
            .put(&format!("{}/{}", TICKETS_PATH, id), payload)
            .await
    }

    /// Moves a ticket to the trash.
    pub async fn delete(&self, id: u64) -> Result<(), FreshdeskError> {
        self.gateway
            .delete(&format!("{}/{}", TICKETS_PATH, id))
            .await
    }
}
