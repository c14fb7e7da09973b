//! Typed records and the decoder turning raw JSON objects into them.
//!
//! Ids arrive as numbers in the source files but are compared as strings by
//! the index, so `_id` is coerced to its decimal string form on decode.
//! Foreign keys stay numeric (and optional) until a join normalizes them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::RawRecord;
use crate::schema::entity::EntityKind;

/// A decodable record type backing one collection.
pub trait Record: DeserializeOwned + Clone + PartialEq + std::fmt::Debug {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

/// Decode one raw record into its typed form. Unknown keys are ignored,
/// missing fields take zero values; a value that cannot be coerced to the
/// declared field type fails the record.
pub fn decode<T: Record>(raw: RawRecord) -> Result<T> {
    serde_json::from_value(Value::Object(raw)).map_err(|err| {
        Error::new(
            ErrorKind::Decode,
            format!("cannot decode {} record: {}", T::KIND.as_str(), err),
        )
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Organization {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub shared_tickets: bool,
}

impl Record for Organization {
    const KIND: EntityKind = EntityKind::Organization;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type", default)]
    pub ticket_type: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "foreign_key")]
    pub submitter_id: Option<u64>,
    #[serde(default, deserialize_with = "foreign_key")]
    pub assignee_id: Option<u64>,
    #[serde(default, deserialize_with = "foreign_key")]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub has_incidents: bool,
    #[serde(default)]
    pub due_at: String,
    #[serde(default)]
    pub via: String,
}

impl Record for Ticket {
    const KIND: EntityKind = EntityKind::Ticket;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub last_login_at: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default, deserialize_with = "foreign_key")]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub suspended: bool,
    #[serde(default)]
    pub role: String,
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Accept a JSON number or string for `_id`, normalizing to a decimal string.
fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for _id, got {}",
            other
        ))),
    }
}

/// Foreign keys are numeric ids that may be absent or null.
fn foreign_key<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_u64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("foreign key out of range: {}", number))),
        Value::String(text) => text
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("non-numeric foreign key: {}", text))),
        other => Err(serde::de::Error::custom(format!(
            "expected number for foreign key, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn decodes_numeric_id_as_string() {
        let organization: Organization = decode(raw(json!({
            "_id": 104,
            "name": "Xylar",
            "domain_names": ["anixang.com"],
            "shared_tickets": false,
            "tags": ["Hendricks"]
        })))
        .unwrap();
        assert_eq!(organization.id, "104");
        assert_eq!(organization.name, "Xylar");
        assert_eq!(organization.domain_names, vec!["anixang.com"]);
        assert!(!organization.shared_tickets);
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let user: User = decode(raw(json!({ "_id": 7 }))).unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.name, "");
        assert!(!user.active);
        assert!(user.tags.is_empty());
        assert_eq!(user.organization_id, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let ticket: Ticket = decode(raw(json!({
            "_id": 3,
            "subject": "A Problem in Morocco",
            "rating": "five stars"
        })))
        .unwrap();
        assert_eq!(ticket.subject, "A Problem in Morocco");
    }

    #[test]
    fn null_foreign_key_is_unset() {
        let ticket: Ticket = decode(raw(json!({
            "_id": 3,
            "assignee_id": null,
            "submitter_id": 9
        })))
        .unwrap();
        assert_eq!(ticket.assignee_id, None);
        assert_eq!(ticket.submitter_id, Some(9));
    }

    #[test]
    fn uncoercible_value_fails_the_record() {
        let result: Result<User> = decode(raw(json!({
            "_id": 7,
            "active": "maybe"
        })));
        assert_eq!(result.unwrap_err().kind, ErrorKind::Decode);
    }
}
