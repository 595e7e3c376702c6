use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::id::{marker::UserMarker, Id};
use crate::types::Timestamp;
use crate::util::Sensitive;

/// A registered account.
///
/// This is a plain value: fields are mutated directly by whoever holds
/// the record and nothing here validates them. `id` stays [`None`]
/// until the document store assigns a key on first save, so it is
/// omitted from serialized output for records that were never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<UserMarker>>,
    pub name: String,
    pub email: String,
    pub password_hash: Sensitive<String>,
    pub created_at: Timestamp,
}

/// Input for [`User::new`].
///
/// The credential must already be hashed by the caller; records never
/// hold recoverable plaintext.
#[derive(Debug)]
pub struct CreateUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: Sensitive<&'a str>,
}

impl User {
    #[must_use]
    pub fn new(input: CreateUser<'_>) -> Self {
        Self {
            id: None,
            name: input.name.to_string(),
            email: input.email.to_string(),
            password_hash: input.password_hash.into_string().into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, SerializeUserError> {
        serde_json::to_string(self).map_err(SerializeUserError)
    }

    pub fn from_json(input: &str) -> Result<Self, ParseUserError> {
        serde_json::from_str(input).map_err(ParseUserError)
    }
}

#[derive(Debug, Error)]
#[error("Failed to serialize user record")]
pub struct SerializeUserError(#[source] pub(crate) serde_json::Error);

#[derive(Debug, Error)]
#[error("Failed to parse user record")]
pub struct ParseUserError(#[source] pub(crate) serde_json::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(User: Debug, Clone, PartialEq, Send, Sync);

    fn alice() -> User {
        User::new(CreateUser {
            name: "Alice",
            email: "alice@example.com",
            password_hash: "s3cret-hash".into(),
        })
    }

    #[test]
    fn test_new_reads_back_inputs() {
        let user = alice();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash.as_str(), "s3cret-hash");
        assert!(user.id.is_none());
    }

    #[test]
    fn test_new_sets_created_at() {
        let user = alice();
        let rendered = user.created_at.to_string();
        assert!(!rendered.is_empty());
        assert!(Timestamp::parse(&rendered).is_ok());
    }

    #[test]
    fn test_new_accepts_empty_fields() {
        let user = User::new(CreateUser {
            name: "",
            email: "",
            password_hash: "".into(),
        });
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_field_mutation_is_last_write_wins() {
        let mut user = alice();
        user.email = "alice@rosterhq.dev".to_string();
        user.email = "alice.cooper@example.com".to_string();
        assert_eq!(user.email, "alice.cooper@example.com");

        let moment = Timestamp::parse("2023-11-17T23:52:48.293Z").expect("valid timestamp");
        user.created_at = moment;
        assert_eq!(user.created_at, moment);
    }

    #[test]
    fn test_debug_redacts_credential() {
        let rendered = format!("{:?}", alice());
        assert!(!rendered.contains("s3cret-hash"));
        assert!(rendered.contains("<hidden>"));
    }

    #[test]
    fn test_to_json_contains_field_values() {
        let user = alice();
        let json = user.to_json().expect("serializable user");
        assert!(json.contains("Alice"));
        assert!(json.contains("alice@example.com"));
        assert!(json.contains("s3cret-hash"));

        // never persisted, so no key in the output
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_json_round_trip() {
        let mut user = alice();
        let parsed = User::from_json(&user.to_json().expect("serializable user"))
            .expect("parsable user");
        assert_eq!(user, parsed);

        user.id = Some(Id::new("652f2e1bd1f2aa77cd5a2b4e"));
        let parsed = User::from_json(&user.to_json().expect("serializable user"))
            .expect("parsable user");
        assert_eq!(user, parsed);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(User::from_json("{}").is_err());
        assert!(User::from_json("not a document").is_err());
    }
}
