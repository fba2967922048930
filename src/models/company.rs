//! Company models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A company as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company ID.
    pub id: u64,

    /// Company name, unique per account.
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Internal note.
    #[serde(default)]
    pub note: Option<String>,

    /// Email domains used to associate contacts automatically.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<String>,

    /// Customer health label (e.g., "Happy", "At risk").
    #[serde(default)]
    pub health_score: Option<String>,

    /// Account tier label (e.g., "Premium").
    #[serde(default)]
    pub account_tier: Option<String>,

    /// Contract renewal date.
    #[serde(default)]
    pub renewal_date: Option<DateTime<Utc>>,

    /// Industry label.
    #[serde(default)]
    pub industry: Option<String>,

    /// Account-defined custom fields.
    #[serde(default)]
    pub custom_fields: Option<serde_json::Value>,

    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a create-company call. The server requires `name`.
///
/// `renewal_date` is sent as given (`YYYY-MM-DD`).
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyCreatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

/// Body of an update-company call. Only the fields that are set change.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_update_with_only_health_score() {
        let payload = CompanyUpdatePayload {
            health_score: Some("At risk".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"health_score":"At risk"}"#
        );
    }

    #[test]
    fn test_company_deserializes() {
        let company: Company = serde_json::from_value(json!({
            "id": 42,
            "name": "Acme",
            "domains": ["acme.com", "acme.io"],
            "health_score": "Happy",
            "account_tier": "Premium",
            "renewal_date": "2025-06-30T00:00:00Z",
            "note": null,
            "custom_fields": {}
        }))
        .unwrap();

        assert_eq!(company.id, 42);
        assert_eq!(company.domains, vec!["acme.com", "acme.io"]);
        assert!(company.note.is_none());
        assert!(company.renewal_date.is_some());
        assert_eq!(company.custom_fields, Some(json!({})));
    }
}
