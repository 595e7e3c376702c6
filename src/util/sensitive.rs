use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Keeps the raw sensitive data in memory but it cannot be
/// accidentally leaked through the console or logs.
///
/// Serialization is transparent: the wrapped value is emitted
/// verbatim, redaction applies to [`Debug`] and [`Display`] only.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("<hidden>").finish()
    }
}

impl<T> Display for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("<hidden>").finish()
    }
}

impl<T> AsRef<T> for Sensitive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.as_ref().to_string()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Sensitive;
    use serde::{Deserialize, Serialize};
    use serde_test::Token;

    #[test]
    fn test_serde_impl() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Credentials {
            pub name: String,
            pub secret: Sensitive<String>,
        }

        let credentials = Credentials {
            name: "memo".into(),
            secret: Sensitive::new("hunter2".into()),
        };
        serde_test::assert_tokens(
            &credentials,
            &[
                Token::Struct { name: "Credentials", len: 2 },
                Token::Str("name"),
                Token::Str("memo"),
                Token::Str("secret"),
                Token::Str("hunter2"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_fmt() {
        let value = Sensitive::new("hello");
        assert_eq!(value.to_string(), "<hidden>");
        assert_eq!(format!("{value:?}"), "<hidden>");
    }
}
