use serde_json::Value;

use super::CollectionSpec;
use crate::models::user::{ParseUserError, SerializeUserError, User};

/// Mapping of [`User`] records onto the `user` collection.
pub const USER: CollectionSpec = CollectionSpec {
  collection: "user",
  id_field: "id",
  fields: &["id", "name", "email", "password_hash", "created_at"],
};

#[tracing::instrument(skip(user), fields(user.name = "<hidden>"))]
pub fn to_document(user: &User) -> Result<Value, SerializeUserError> {
  serde_json::to_value(user).map_err(SerializeUserError)
}

#[tracing::instrument(skip(document))]
pub fn from_document(document: Value) -> Result<User, ParseUserError> {
  serde_json::from_value(document).map_err(ParseUserError)
}
