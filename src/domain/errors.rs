//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` text is what the submitter sees next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is shorter than the minimum.
    NameTooShort,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided message is shorter than the minimum.
    MessageTooShort,

    /// The value is not one of the served regions.
    UnknownServiceArea(String),

    /// The value is not one of the inquiry kinds.
    UnknownInterest(String),

    /// The value is not one of the property types.
    UnknownPropertyType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(f, "Name must be at least 2 characters"),
            Self::InvalidEmail(_) => write!(f, "Invalid email address"),
            Self::MessageTooShort => write!(f, "Message must be at least 10 characters"),
            Self::UnknownServiceArea(_) => write!(f, "Please select your location"),
            Self::UnknownInterest(_) => write!(f, "Please select how we can help you"),
            Self::UnknownPropertyType(_) => write!(f, "Please select a property type"),
        }
    }
}

impl std::error::Error for ValidationError {}
