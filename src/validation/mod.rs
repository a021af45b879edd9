//! Untrusted-input validation for inquiries.
//!
//! Validators take any `serde_json::Value` and either build a typed submission
//! or return every field-level failure at once. They never panic: a body that
//! is not even an object still yields the error branch.

mod contact;
mod quote;

pub use contact::validate_contact;
pub use quote::validate_quote;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the field (camelCase)
    pub field: String,
    /// Message to show next to the field
    pub message: String,
}

/// All field errors for a submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "{} invalid field(s): {}", self.0.len(), fields.join(", "))
    }
}

/// Require a JSON object at the top level.
pub(crate) fn as_object(input: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    input.as_object().ok_or_else(|| {
        let mut errors = FieldErrors::default();
        errors.push("body", "Expected a JSON object");
        errors
    })
}

/// Reads fields out of an untrusted object, recording failures as it goes.
pub(crate) struct FieldReader<'a> {
    map: &'a Map<String, Value>,
    errors: &'a mut FieldErrors,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(map: &'a Map<String, Value>, errors: &'a mut FieldErrors) -> Self {
        Self { map, errors }
    }

    /// Read a required text field and run it through `parse`.
    ///
    /// Missing or `null` is "required"; a non-string is "must be text"; a
    /// string the parser refuses gets the parser's own message.
    pub(crate) fn required<T, E, F>(&mut self, field: &str, label: &str, parse: F) -> Option<T>
    where
        F: FnOnce(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        match self.map.get(field) {
            None | Some(Value::Null) => {
                self.errors.push(field, format!("{} is required", label));
                None
            }
            Some(Value::String(raw)) => match parse(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    self.errors.push(field, e.to_string());
                    None
                }
            },
            Some(_) => {
                self.errors.push(field, format!("{} must be text", label));
                None
            }
        }
    }

    /// Read an optional free-text field. Blank text counts as absent.
    pub(crate) fn optional(&mut self, field: &str, label: &str) -> Option<String> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Some(_) => {
                self.errors.push(field, format!("{} must be text", label));
                None
            }
        }
    }
}
