pub mod user;

/// Describes how an entity maps onto a named collection in the
/// document store.
///
/// The store glue owns everything past this description: key
/// assignment on first save, indexes and query behavior. Entities
/// themselves carry no mapping metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
  /// Name of the collection holding the records.
  pub collection: &'static str,
  /// Field designated as the external-identity key.
  pub id_field: &'static str,
  /// Every field a serialized record may carry.
  pub fields: &'static [&'static str],
}

impl CollectionSpec {
  #[must_use]
  pub fn has_field(&self, name: &str) -> bool {
    self.fields.iter().any(|field| *field == name)
  }
}
