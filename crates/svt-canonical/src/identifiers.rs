use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses a validated identifier from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Borrows the identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    TokenId,
    "Unique token identifier (`jti`): fixed-width lowercase hex, 128 to 512 bits.",
    r"^[0-9a-f]{32,128}$"
);
newtype!(
    IssuerId,
    "Identifier of the issuing service (`iss`), typically a URI; no whitespace.",
    r"^\S{1,2048}$"
);

impl TokenId {
    /// Encodes raw identifier bytes as fixed-width lowercase hex.
    ///
    /// Leading zero bytes are kept, so the text width always reflects the
    /// number of bytes that were drawn.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        Self::parse(hex::encode(bytes))
    }

    /// Number of significant bits when the id is read as a base-16 integer.
    pub fn significant_bits(&self) -> usize {
        let trimmed = self.0.trim_start_matches('0');
        match trimmed.chars().next().and_then(|c| c.to_digit(16)) {
            Some(first) => (trimmed.len() - 1) * 4 + (32 - first.leading_zeros()) as usize,
            None => 0,
        }
    }
}
