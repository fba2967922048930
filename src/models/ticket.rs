//! Ticket models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Built-in ticket status codes.
///
/// Accounts may define further statuses, so [`Ticket::status`] stays a
/// plain integer.
pub mod ticket_status {
    /// Open.
    pub const OPEN: u32 = 2;
    /// Pending.
    pub const PENDING: u32 = 3;
    /// Resolved.
    pub const RESOLVED: u32 = 4;
    /// Closed.
    pub const CLOSED: u32 = 5;
}

/// Ticket priority codes.
pub mod ticket_priority {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
    /// Urgent.
    pub const URGENT: u32 = 4;
}

/// Channel through which a ticket was raised.
pub mod ticket_source {
    /// Email.
    pub const EMAIL: u32 = 1;
    /// Customer portal.
    pub const PORTAL: u32 = 2;
    /// Phone.
    pub const PHONE: u32 = 3;
    /// Chat.
    pub const CHAT: u32 = 7;
    /// Feedback widget.
    pub const FEEDBACK_WIDGET: u32 = 9;
    /// Outbound email.
    pub const OUTBOUND_EMAIL: u32 = 10;
}

/// A ticket as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Status code, see [`ticket_status`].
    #[serde(default)]
    pub status: Option<u32>,

    /// Priority code, see [`ticket_priority`].
    #[serde(default)]
    pub priority: Option<u32>,

    /// Source code, see [`ticket_source`].
    #[serde(default)]
    pub source: Option<u32>,

    /// Ticket type, as configured on the account.
    #[serde(rename = "type", default)]
    pub ticket_type: Option<String>,

    /// HTML body.
    #[serde(default)]
    pub description: Option<String>,

    /// Plain-text body.
    #[serde(default)]
    pub description_text: Option<String>,

    /// Contact who raised the ticket.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Agent the ticket is assigned to.
    #[serde(default)]
    pub responder_id: Option<u64>,

    /// Company the ticket belongs to.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Group the ticket is assigned to.
    #[serde(default)]
    pub group_id: Option<u64>,

    /// Product the ticket is filed under.
    #[serde(default)]
    pub product_id: Option<u64>,

    /// Mailbox the ticket arrived through.
    #[serde(default)]
    pub email_config_id: Option<u64>,

    /// Requester name.
    #[serde(default)]
    pub name: Option<String>,

    /// Requester email.
    #[serde(default)]
    pub email: Option<String>,

    /// Requester phone.
    #[serde(default)]
    pub phone: Option<String>,

    /// Requester Facebook ID.
    #[serde(default)]
    pub facebook_id: Option<String>,

    /// Requester Twitter handle.
    #[serde(default)]
    pub twitter_id: Option<String>,

    /// Free-form labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Addresses copied on the ticket.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cc_emails: Vec<String>,

    /// Addresses the ticket was forwarded to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fwd_emails: Vec<String>,

    /// Addresses copied on replies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reply_cc_emails: Vec<String>,

    /// Addresses the original email was sent to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_emails: Vec<String>,

    /// Attachment descriptors, passed through untouched.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<serde_json::Value>,

    /// Account-defined custom fields.
    #[serde(default)]
    pub custom_fields: Option<serde_json::Value>,

    /// Whether the ticket is in the trash.
    #[serde(default)]
    pub deleted: bool,

    /// Whether the ticket was marked as spam.
    #[serde(default)]
    pub spam: bool,

    /// Whether the resolution deadline was missed.
    #[serde(default)]
    pub is_escalated: bool,

    /// Whether the first-response deadline was missed.
    #[serde(default)]
    pub fr_escalated: bool,

    /// Resolution deadline.
    #[serde(default)]
    pub due_by: Option<DateTime<Utc>>,

    /// First-response deadline.
    #[serde(default)]
    pub fr_due_by: Option<DateTime<Utc>>,

    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }

    /// Returns true if the ticket is neither resolved nor closed.
    pub fn is_open(&self) -> bool {
        !matches!(
            self.status,
            Some(ticket_status::RESOLVED) | Some(ticket_status::CLOSED)
        )
    }
}

/// Body of a create-ticket call.
///
/// The server needs a requester (one of `requester_id`, `email`,
/// `facebook_id`, `phone`, `twitter_id` or `unique_external_id`) and
/// rejects the call otherwise; the client does not check.
///
/// Fields mirror [`Ticket`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketCreatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_group_id: Option<u64>,
}

/// Body of an update-ticket call. Only the fields that are set change.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_group_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_update_with_only_status_serializes_one_key() {
        let payload = TicketUpdatePayload {
            status: Some(ticket_status::RESOLVED),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"status":4}"#);
    }

    #[test]
    fn test_empty_payloads_serialize_to_empty_object() {
        assert_eq!(serde_json::to_value(TicketCreatePayload::default()).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(TicketUpdatePayload::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_create_payload_renames_type() {
        let payload = TicketCreatePayload {
            email: Some("jane@example.com".to_string()),
            subject: Some("Printer on fire".to_string()),
            ticket_type: Some("Incident".to_string()),
            priority: Some(ticket_priority::URGENT),
            tags: Some(vec!["hardware".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "email": "jane@example.com",
                "subject": "Printer on fire",
                "type": "Incident",
                "priority": 4,
                "tags": ["hardware"]
            })
        );
    }

    #[test]
    fn test_explicit_zero_is_sent() {
        let payload = TicketUpdatePayload {
            group_id: Some(0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"group_id": 0}));
    }

    #[test]
    fn test_ticket_deserializes_with_nulls() {
        let ticket: Ticket = serde_json::from_value(json!({
            "id": 17,
            "subject": "Cannot log in",
            "status": 2,
            "priority": 1,
            "type": null,
            "cc_emails": null,
            "tags": ["login"],
            "custom_fields": {"cf_region": "EU"},
            "attachments": [],
            "due_by": "2024-03-01T10:00:00Z",
            "created_at": "2024-02-27T09:15:00Z",
            "updated_at": null
        }))
        .unwrap();

        assert_eq!(ticket.id, 17);
        assert_eq!(ticket.display_subject(), "Cannot log in");
        assert!(ticket.is_open());
        assert!(ticket.ticket_type.is_none());
        assert!(ticket.cc_emails.is_empty());
        assert_eq!(ticket.tags, vec!["login"]);
        assert_eq!(ticket.custom_fields, Some(json!({"cf_region": "EU"})));
        assert!(ticket.due_by.is_some());
        assert!(ticket.updated_at.is_none());
    }

    #[test]
    fn test_ticket_is_open() {
        let mut ticket: Ticket = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(ticket.is_open());
        ticket.status = Some(ticket_status::CLOSED);
        assert!(!ticket.is_open());
    }
}
