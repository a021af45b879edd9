//! Free-text value objects with a minimum length.

use super::errors::ValidationError;
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Minimum characters in a submitter's name.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum characters in an inquiry message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Trim and check the character count (not bytes; names are often non-ASCII).
fn normalize(raw: &str, min_chars: usize) -> Option<String> {
    let trimmed = raw.trim();
    (trimmed.chars().count() >= min_chars).then(|| trimmed.to_string())
}

/// The submitter's name, at least two characters once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// # Errors
    ///
    /// Returns `ValidationError::NameTooShort` if fewer than two characters remain
    /// after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        normalize(name.as_ref(), MIN_NAME_CHARS)
            .map(Self)
            .ok_or(ValidationError::NameTooShort)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The inquiry body, at least ten characters once trimmed.
///
/// Interior line breaks are preserved; the email templates render them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageBody(String);

impl MessageBody {
    /// # Errors
    ///
    /// Returns `ValidationError::MessageTooShort` if fewer than ten characters
    /// remain after trimming.
    pub fn new(message: impl AsRef<str>) -> Result<Self, ValidationError> {
        normalize(message.as_ref(), MIN_MESSAGE_CHARS)
            .map(Self)
            .ok_or(ValidationError::MessageTooShort)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the message line by line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

macro_rules! text_value_impls {
    ($ty:ident, $min:expr) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl JsonSchema for $ty {
            fn inline_schema() -> bool {
                true
            }

            fn schema_name() -> Cow<'static, str> {
                stringify!($ty).into()
            }

            fn json_schema(_: &mut SchemaGenerator) -> Schema {
                json_schema!({ "type": "string", "minLength": $min })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

text_value_impls!(PersonName, MIN_NAME_CHARS);
text_value_impls!(MessageBody, MIN_MESSAGE_CHARS);
