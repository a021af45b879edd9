//! Client-side delivery strategies for the contact form.
//!
//! A validated submission is handed to exactly one strategy, chosen once from
//! [`ClientConfig`]:
//!
//! - [`MailtoStrategy`]: prefilled `mailto:` link for the user's mail client
//! - [`HttpStrategy`]: JSON POST to the contact endpoint

mod http;
mod mailto;

pub use http::{ContactEndpointClient, HttpStrategy};
pub use mailto::{MailtoLink, MailtoStrategy};

use crate::config::{ClientConfig, DeliveryMode};
use crate::error::{ConfigError, ConfigResult, SubmitResult};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// What happened to a submission that left the form successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The UI should navigate to `uri`; the user finishes in their mail client.
    MailClientOpened { uri: String },
    /// The endpoint accepted the submission.
    Submitted,
}

/// Hands a validated submission off to its recipient.
#[async_trait]
pub trait DeliveryStrategy: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmitResult<DeliveryOutcome>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Build the strategy `config` selects.
pub fn strategy_from_config(config: &ClientConfig) -> ConfigResult<Arc<dyn DeliveryStrategy>> {
    match config.mode {
        DeliveryMode::Mailto => Ok(Arc::new(MailtoStrategy::new(
            config.mailto_address.clone(),
        ))),
        DeliveryMode::Http => {
            let url = config
                .endpoint_url
                .clone()
                .ok_or_else(|| ConfigError::MissingVar("CONTACT_ENDPOINT_URL".to_string()))?;
            let client = ContactEndpointClient::new(url, config.request_timeout);
            Ok(Arc::new(HttpStrategy::new(client)))
        }
    }
}
