//! What the submitter wants from us.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of inquiry. Closed set; unknown values are rejected, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Quote,
    General,
    Partnership,
    Careers,
    Support,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::Quote,
        Interest::General,
        Interest::Partnership,
        Interest::Careers,
        Interest::Support,
    ];

    /// Wire token, e.g. `"quote"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Interest::Quote => "quote",
            Interest::General => "general",
            Interest::Partnership => "partnership",
            Interest::Careers => "careers",
            Interest::Support => "support",
        }
    }

    /// Label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            Interest::Quote => "Request a Quote",
            Interest::General => "General Inquiry",
            Interest::Partnership => "Partnership Opportunity",
            Interest::Careers => "Career Opportunity",
            Interest::Support => "Technical Support",
        }
    }
}

impl FromStr for Interest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|interest| interest.as_str() == trimmed)
            .ok_or_else(|| ValidationError::UnknownInterest(s.to_string()))
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
