use super::{DeliveryOutcome, DeliveryStrategy};
use crate::error::{SubmitError, SubmitResult};
use crate::models::ContactSubmission;
use crate::validation::FieldErrors;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Success body of the contact endpoint.
#[derive(Debug, Deserialize)]
struct SuccessBody {
    #[serde(default)]
    success: bool,
}

/// Error body of the contact endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: FieldErrors,
}

/// Synchronous client for the contact endpoint.
#[derive(Clone)]
pub struct ContactEndpointClient {
    url: String,
    agent: Arc<ureq::Agent>,
}

impl ContactEndpointClient {
    pub fn new(url: String, request_timeout: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(request_timeout))
            .build();

        Self {
            url,
            agent: Arc::new(agent),
        }
    }

    /// POST the submission as JSON. Blocks until the endpoint answers.
    pub fn submit(&self, submission: &ContactSubmission) -> SubmitResult<()> {
        tracing::debug!("POST {}", self.url);

        match self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(submission)
        {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                match serde_json::from_str::<SuccessBody>(&body) {
                    Ok(SuccessBody { success: true }) => Ok(()),
                    _ => Err(SubmitError::InvalidResponse(body)),
                }
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(parsed) => SubmitError::Rejected {
                        status,
                        error: parsed.error,
                        details: parsed.details,
                    },
                    Err(_) => SubmitError::Rejected {
                        status,
                        error: body,
                        details: FieldErrors::default(),
                    },
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(SubmitError::Transport(transport.to_string()))
            }
        }
    }
}

/// Posts the submission to the contact endpoint.
pub struct HttpStrategy {
    client: Arc<ContactEndpointClient>,
}

impl HttpStrategy {
    pub fn new(client: ContactEndpointClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl DeliveryStrategy for HttpStrategy {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmitResult<DeliveryOutcome> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.submit(&submission))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))??;

        Ok(DeliveryOutcome::Submitted)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
