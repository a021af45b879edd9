//! Transactional email payloads exchanged with the provider.

use serde::{Deserialize, Serialize};

/// One email as the provider's send endpoint expects it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl OutboundEmail {
    /// First recipient; every email we send has exactly one.
    pub fn recipient(&self) -> &str {
        self.to.first().map(String::as_str).unwrap_or_default()
    }
}

/// Provider acknowledgement for an accepted email.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SentEmail {
    /// Provider-side message id
    pub id: String,
}
