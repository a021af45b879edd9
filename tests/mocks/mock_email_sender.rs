use async_trait::async_trait;
use enercam_contact::error::{EmailApiError, EmailApiResult};
use enercam_contact::{EmailSender, OutboundEmail, SentEmail};
use std::sync::{Arc, Mutex};

/// Mock email sender for testing.
///
/// Records every email it is asked to send. Sends can be scripted to fail by
/// position (0 = first send).
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_at: Arc<Mutex<Vec<usize>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `index`-th send fail with a provider error.
    pub fn fail_on(&self, index: usize) {
        self.fail_at.lock().unwrap().push(index);
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|email| email.recipient().to_string())
            .collect()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: &OutboundEmail) -> EmailApiResult<SentEmail> {
        let mut sent = self.sent.lock().unwrap();
        let index = sent.len();
        sent.push(email.clone());

        if self.fail_at.lock().unwrap().contains(&index) {
            return Err(EmailApiError::ApiError {
                status: 500,
                message: "mock provider failure".to_string(),
            });
        }

        Ok(SentEmail {
            id: format!("mock_{}", index),
        })
    }
}
