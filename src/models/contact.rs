//! Contact (customer) models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A contact as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique contact ID.
    pub id: u64,

    /// Full name.
    #[serde(default)]
    pub name: Option<String>,

    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Landline number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,

    /// Twitter handle.
    #[serde(default)]
    pub twitter_id: Option<String>,

    /// Caller-assigned identifier, unique per account.
    #[serde(default)]
    pub unique_external_id: Option<String>,

    /// Primary company.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Whether the contact can see every ticket of their company.
    #[serde(default)]
    pub view_all_tickets: bool,

    /// Additional company associations, passed through untouched.
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_companies: Vec<serde_json::Value>,

    /// Secondary email addresses.
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_emails: Vec<String>,

    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,

    /// Avatar descriptor, passed through untouched.
    #[serde(default)]
    pub avatar: Option<serde_json::Value>,

    /// Account-defined custom fields.
    #[serde(default)]
    pub custom_fields: Option<serde_json::Value>,

    /// Free-form notes about the contact.
    #[serde(default)]
    pub description: Option<String>,

    /// Job title.
    #[serde(default)]
    pub job_title: Option<String>,

    /// Preferred language code (e.g., `en`).
    #[serde(default)]
    pub language: Option<String>,

    /// Time zone name (e.g., `Eastern Time (US & Canada)`).
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Free-form labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// False until the contact verifies their email, and after a soft delete.
    #[serde(default)]
    pub active: bool,

    /// Set once the contact has been soft deleted.
    #[serde(default)]
    pub deleted: bool,

    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a create-contact call.
///
/// The server requires `name` and one of `email`, `phone`, `mobile`,
/// `twitter_id` or `unique_external_id`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactCreatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_companies: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Body of an update-contact call. Only the fields that are set change.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_companies: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}
