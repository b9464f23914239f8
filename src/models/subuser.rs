//! Subuser profile models.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder SendGrid accepts for profile fields that were not given.
pub const PROFILE_PLACEHOLDER: &str = "-";

/// One entry of the `customer.profile.json` lookup response.
///
/// SendGrid is loose about types here (a ZIP code may come back as a
/// number), so every field accepts strings and numbers alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubuserProfile {
    /// Username
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    /// Email address
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Mail domain
    #[serde(default, deserialize_with = "lenient_string")]
    pub mail_domain: Option<String>,
    /// First name
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    /// Street address
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    /// City
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    /// State or region
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, deserialize_with = "lenient_string")]
    pub zip: Option<String>,
    /// Country
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    /// Phone number
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    /// Website
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_value(&Value::deserialize(deserializer)?))
}

/// Scalar JSON value as a string; `None` for null, arrays and objects.
pub(crate) fn lenient_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
