//! Wire DTOs for the sign-up endpoint.
//!
//! DESIGN
//! ======
//! The endpoint echoes the submitted body back with an `id` and `createdAt`.
//! `id` arrives as either a JSON string or number depending on the backend, so
//! it is normalized to a string on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// JSON body posted on submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub tos: bool,
}

/// A created user as returned by the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier, if the response carried one.
    #[serde(default, deserialize_with = "deserialize_optional_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Creation timestamp (ISO 8601) when the endpoint reports it.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserRecord {
    /// Password rendered as one bullet per character.
    pub fn masked_password(&self) -> String {
        "\u{2022}".repeat(self.password.chars().count())
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) => Ok(Some(id)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number id")),
    }
}
