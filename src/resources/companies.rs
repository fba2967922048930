//! Company operations.

use crate::error::FreshdeskError;
use crate::gateway::Gateway;
use crate::models::{Company, CompanyCreatePayload, CompanyUpdatePayload};

const COMPANIES_PATH: &str = "/api/v2/companies";

/// Client for `/api/v2/companies`.
#[derive(Clone)]
pub struct Companies {
    gateway: Gateway,
}

impl Companies {
    /// Creates a company client on top of a gateway.
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Fetches one company.
    pub async fn get(&self, id: u64) -> Result<Company, FreshdeskError> {
        self.gateway.get(&format!("{}/{}", COMPANIES_PATH, id)).await
    }

    /// Lists companies using the server's default page size.
    pub async fn list(&self) -> Result<Vec<Company>, FreshdeskError> {
        self.gateway.get(COMPANIES_PATH).await
    }

    /// Creates a company.
    pub async fn create(&self, payload: &CompanyCreatePayload) -> Result<Company, FreshdeskError> {
        self.gateway.post(COMPANIES_PATH, payload).await
    }

    /// Applies a partial update to a company and returns the new state.
    pub async fn update(
        &self,
        id: u64,
        payload: &CompanyUpdatePayload,
    ) -> Result<Company, FreshdeskError> {
        self.gateway
            .put(&format!("{}/{}", COMPANIES_PATH, id), payload)
            .await
    }

    /// Deletes a company. Its contacts are kept but unlinked.
    pub async fn delete(&self, id: u64) -> Result<(), FreshdeskError> {
        self.gateway
            .delete(&format!("{}/{}", COMPANIES_PATH, id))
            .await
    }
}
