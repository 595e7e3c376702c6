use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

/// Roster timestamps are rendered prescribed from [RFC 3339] or
/// `YYYY-MM-DDTHH:MM:SS.SSSZ`, always in UTC.
///
/// [RFC 3339]: https://www.rfc-editor.org/rfc/rfc3339
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
  #[must_use]
  pub fn now() -> Self {
    Self(Utc::now())
  }

  pub fn parse(input: &str) -> Result<Self, ParseError> {
    DateTime::parse_from_rfc3339(input)
      .map(|v| Self(v.with_timezone(&Utc)))
      .map_err(ParseError)
  }

  #[must_use]
  pub fn timestamp(&self) -> i64 {
    self.0.timestamp()
  }
}

impl Hash for Timestamp {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
  fn from(dt: DateTime<Tz>) -> Self {
    Self(dt.with_timezone(&Utc))
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = self.0.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    s.fmt(f)
  }
}

impl Deref for Timestamp {
  type Target = DateTime<Utc>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl FromStr for Timestamp {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct Visitor;

    impl<'de> serde::de::Visitor<'de> for Visitor {
      type Value = Timestamp;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RFC 3339 timestamp")
      }

      fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
      where
        E: serde::de::Error,
      {
        self.visit_str(&v)
      }

      fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
      where
        E: serde::de::Error,
      {
        Timestamp::parse(v).map_err(serde::de::Error::custom)
      }
    }

    deserializer.deserialize_str(Visitor)
  }
}

impl serde::Serialize for Timestamp {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.collect_str(self)
  }
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseError(chrono::ParseError);

impl From<ParseError> for chrono::ParseError {
  fn from(value: ParseError) -> Self {
    value.0
  }
}

impl Deref for ParseError {
  type Target = chrono::ParseError;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}
