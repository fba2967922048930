//! Helpers shared across Freshdesk models.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// Freshdesk sends `null` for list fields it has no data for (for example
/// `cc_emails` on tickets created through the portal). `#[serde(default)]`
/// alone covers a missing key but not an explicit `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
