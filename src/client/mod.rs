//! HTTP client for the transactional email provider.
//!
//! This module provides a synchronous client for a Resend-compatible REST API
//! that can be used from async contexts via `tokio::task::spawn_blocking`. The
//! client handles authentication, error mapping, and per-request metrics.

mod async_wrapper;
pub use async_wrapper::{AsyncResendClient, EmailSender};

use crate::config::EmailConfig;
use crate::error::{EmailApiError, EmailApiResult};
use crate::metrics::Metrics;
use crate::models::{OutboundEmail, SentEmail};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the email provider API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the provider API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &EmailConfig, request_timeout: u64) -> Self {
        Self::with_base_url(
            config.api_base_url.clone(),
            config.api_key.clone(),
            request_timeout,
        )
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, request_timeout: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(request_timeout))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one email. Blocks until the provider answers.
    pub fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<SentEmail> {
        let start = Instant::now();
        let url = self.build_url("/emails");

        // Subject only; bodies carry submitter text.
        tracing::debug!(subject = %email.subject, "POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(email)
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                let body = response
                    .into_string()
                    .map_err(|e| EmailApiError::HttpError(e.to_string()))?;
                serde_json::from_str::<SentEmail>(&body).map_err(EmailApiError::JsonError)
            });

        let duration = start.elapsed();
        self.metrics.record_http_request(duration);
        match &result {
            Ok(sent) => {
                tracing::debug!("POST {} - Accepted as {}", url, sent.id);
                self.metrics.record_email_sent();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }

        result
    }

    /// Map a ureq error to an EmailApiError.
    fn map_error(&self, error: ureq::Error) -> EmailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => EmailApiError::Unauthorized,
                    400 | 422 => EmailApiError::InvalidRequest(message),
                    429 => EmailApiError::RateLimitExceeded,
                    _ => EmailApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    EmailApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    EmailApiError::Timeout
                } else {
                    EmailApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_slashes() {
        let client = ResendClient::with_base_url(
            "https://api.resend.com/".to_string(),
            "key".to_string(),
            10,
        );
        assert_eq!(client.build_url("/emails"), "https://api.resend.com/emails");
    }

    #[test]
    fn test_new_from_config() {
        let config = EmailConfig {
            api_key: "re_key".to_string(),
            api_base_url: "https://api.resend.com".to_string(),
            from: "noreply@enercam.com".to_string(),
            to: "sales@enercam.com".to_string(),
        };
        let client = ResendClient::new(&config, 5);
        assert_eq!(client.metrics().http_requests_total(), 0);
        assert_eq!(client.build_url("emails"), "https://api.resend.com/emails");
    }
}
