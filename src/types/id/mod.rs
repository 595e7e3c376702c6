use once_cell::sync::Lazy;
use serde::de::{Error as DeError, Unexpected};
use std::{
  fmt::{Debug, Display},
  hash::Hash,
  marker::PhantomData,
};

use self::marker::Marker;

pub mod marker;

/// An opaque document key assigned by the document store once the
/// record is first persisted. Keys are never empty.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Id<T: Marker> {
  value: Box<str>,
  phantom: PhantomData<T>,
}

impl<T: Marker> Id<T> {
  /// # Panics
  ///
  /// It will panic if the key is empty.
  #[must_use]
  #[track_caller]
  pub fn new(value: impl Into<String>) -> Self {
    if let Some(id) = Self::new_checked(value) {
      id
    } else {
      panic!("document key is empty")
    }
  }

  #[must_use]
  pub fn new_checked(value: impl Into<String>) -> Option<Self> {
    let value = value.into();
    if value.is_empty() {
      None
    } else {
      Some(Self {
        value: value.into_boxed_str(),
        phantom: PhantomData,
      })
    }
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.value
  }

  #[must_use]
  pub fn into_string(self) -> String {
    self.value.into_string()
  }

  #[must_use]
  pub fn cast<M: Marker>(self) -> Id<M> {
    Id {
      value: self.value,
      phantom: PhantomData,
    }
  }
}

impl<T: Marker> Debug for Id<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // Shortens marker type paths so telemetry output stays readable.
    use heck::ToSnakeCase;
    static MARKER_MODULE: Lazy<String> = Lazy::new(|| {
      format!(
        "{}::types::id::marker::",
        env!("CARGO_PKG_NAME").to_snake_case()
      )
    });

    // This is to assume that all ID markers are defined in `marker` module
    let type_name = std::any::type_name::<T>();
    let type_name = if type_name.starts_with(&*MARKER_MODULE) {
      type_name.split("::").last().unwrap_or(type_name)
    } else {
      type_name
    };
    write!(f, "Id::<{type_name}>({})", self.value)
  }
}

impl<T: Marker> Display for Id<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.value, f)
  }
}

impl<T: Marker> Hash for Id<T> {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    state.write(self.value.as_bytes());
  }
}

impl<'de, T: Marker> serde::Deserialize<'de> for Id<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct Visitor<T: Marker>(PhantomData<T>);

    impl<'de, T: Marker> serde::de::Visitor<'de> for Visitor<T> {
      type Value = Id<T>;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a roster document key")
      }

      fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
      where
        E: DeError,
      {
        Id::<T>::new_checked(v)
          .ok_or_else(|| DeError::invalid_value(Unexpected::Str(v), &"nonempty document key"))
      }

      fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
      where
        E: DeError,
      {
        self.visit_str(&v)
      }
    }

    deserializer.deserialize_str(Visitor(PhantomData))
  }
}

impl<T: Marker> serde::Serialize for Id<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.value)
  }
}
