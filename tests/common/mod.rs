//! Shared helpers for integration tests against a wiremock server.

#![allow(dead_code)]

use freshdesk::config::Config;
use freshdesk::FreshdeskClient;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Basic auth header for `test-key:X`.
pub const AUTH_HEADER: &str = "Basic dGVzdC1rZXk6WA==";

/// Starts a mock server and a client pointed at it.
///
/// The quota is generous so tests never wait on the limiter.
pub async fn setup() -> (MockServer, FreshdeskClient) {
    let server = MockServer::start().await;
    let config = Config::new(server.uri(), "test-key", "X", 600).unwrap();
    let client = FreshdeskClient::new(&config).unwrap();
    (server, client)
}

pub fn ticket_json(id: u64) -> Value {
    json!({
        "id": id,
        "subject": "Printer on fire",
        "status": 2,
        "priority": 4,
        "source": 1,
        "type": "Incident",
        "description": "<div>It is on fire.</div>",
        "description_text": "It is on fire.",
        "requester_id": 5001,
        "responder_id": null,
        "company_id": 42,
        "group_id": 7,
        "tags": ["hardware", "urgent"],
        "cc_emails": [],
        "fwd_emails": [],
        "reply_cc_emails": [],
        "to_emails": null,
        "attachments": [],
        "custom_fields": {"cf_floor": 3},
        "deleted": false,
        "spam": false,
        "is_escalated": false,
        "fr_escalated": false,
        "due_by": "2024-03-01T10:00:00Z",
        "fr_due_by": "2024-02-28T10:00:00Z",
        "created_at": "2024-02-27T09:15:00Z",
        "updated_at": "2024-02-27T09:20:00Z"
    })
}

pub fn contact_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+45 1234 5678",
        "mobile": null,
        "company_id": 42,
        "view_all_tickets": true,
        "other_companies": [{"company_id": 43, "view_all_tickets": false}],
        "other_emails": ["jane.doe@example.org"],
        "avatar": {"avatar_url": "https://cdn.example.com/jane.png"},
        "custom_fields": {"cf_tier": "gold"},
        "job_title": "Office Manager",
        "language": "en",
        "time_zone": "Copenhagen",
        "tags": ["vip"],
        "active": true,
        "deleted": false,
        "created_at": "2023-11-02T08:00:00Z",
        "updated_at": "2024-01-10T12:30:00Z"
    })
}

pub fn company_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Acme",
        "description": "Makes everything",
        "note": null,
        "domains": ["acme.com"],
        "health_score": "Happy",
        "account_tier": "Premium",
        "renewal_date": "2025-06-30T00:00:00Z",
        "industry": "Manufacturing",
        "custom_fields": {},
        "created_at": "2020-05-01T00:00:00Z",
        "updated_at": "2024-02-01T00:00:00Z"
    })
}
