//! Async wrapper around the synchronous ResendClient.
//!
//! This module provides an async interface to the synchronous ResendClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ResendClient;
use crate::error::{EmailApiError, EmailApiResult};
use crate::models::{OutboundEmail, SentEmail};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can deliver one transactional email.
///
/// The server depends on this trait, not on the provider client, so tests can
/// substitute a recording sender.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> EmailApiResult<SentEmail>;
}

/// Async wrapper around synchronous ResendClient.
#[derive(Clone)]
pub struct AsyncResendClient {
    client: Arc<ResendClient>,
}

impl AsyncResendClient {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped client, for reading its metrics.
    pub fn inner(&self) -> &ResendClient {
        &self.client
    }
}

#[async_trait]
impl EmailSender for AsyncResendClient {
    async fn send(&self, email: &OutboundEmail) -> EmailApiResult<SentEmail> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| EmailApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
