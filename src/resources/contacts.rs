//! Contact operations.

use crate::error::FreshdeskError;
use crate::gateway::Gateway;
use crate::models::{Contact, ContactCreatePayload, ContactUpdatePayload};

const CONTACTS_PATH: &str = "/api/v2/contacts";

/// Client for `/api/v2/contacts`.
#[derive(Clone)]
pub struct Contacts {
    gateway: Gateway,
}

impl Contacts {
    /// Creates a contact client on top of a gateway.
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Fetches one contact.
    pub async fn get(&self, id: u64) -> Result<Contact, FreshdeskError> {
        self.gateway.get(&format!("{}/{}", CONTACTS_PATH, id)).await
    }

    /// Lists contacts using the server's default filter and page size.
    pub async fn list(&self) -> Result<Vec<Contact>, FreshdeskError> {
        self.gateway.get(CONTACTS_PATH).await
    }

    /// Creates a contact.
    pub async fn create(&self, payload: &ContactCreatePayload) -> Result<Contact, FreshdeskError> {
        self.gateway.post(CONTACTS_PATH, payload).await
    }

    /// Applies a partial update to a contact and returns the new state.
    pub async fn update(
        &self,
        id: u64,
        payload: &ContactUpdatePayload,
    ) -> Result<Contact, FreshdeskError> {
        self.gateway
            .put(&format!("{}/{}", CONTACTS_PATH, id), payload)
            .await
    }

    /// Soft deletes a contact.
    ///
    /// The server marks the contact deleted but keeps it, along with its
    /// tickets, so it can be restored.
    pub async fn soft_delete(&self, id: u64) -> Result<(), FreshdeskError> {
        self.gateway
            .delete(&format!("{}/{}", CONTACTS_PATH, id))
            .await
    }

    /// Permanently deletes a contact.
    ///
    /// This purges the contact and cannot be undone. It is never called
    /// implicitly; callers opt in by invoking it.
    pub async fn permanently_delete(&self, id: u64) -> Result<(), FreshdeskError> {
        tracing::info!(contact_id = id, "Permanently deleting contact");
        self.gateway
            .delete(&format!("{}/{}/hard_delete", CONTACTS_PATH, id))
            .await
    }
}
