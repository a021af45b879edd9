use async_trait::async_trait;
use enercam_contact::error::{SubmitError, SubmitResult};
use enercam_contact::{ContactSubmission, DeliveryOutcome, DeliveryStrategy, FormPhase};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Mock delivery strategy for testing the form state machine.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDeliveryStrategy {
    delivered: Arc<Mutex<Vec<ContactSubmission>>>,
    fail: Arc<Mutex<bool>>,
    observed_phase: Arc<Mutex<Option<FormPhase>>>,
    phase: Arc<Mutex<Option<watch::Receiver<FormPhase>>>>,
}

#[allow(dead_code)]
impl MockDeliveryStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Record the form's phase at the moment `deliver` runs.
    pub fn watch_phase(&self, receiver: watch::Receiver<FormPhase>) {
        *self.phase.lock().unwrap() = Some(receiver);
    }

    pub fn observed_phase(&self) -> Option<FormPhase> {
        *self.observed_phase.lock().unwrap()
    }

    pub fn delivered(&self) -> Vec<ContactSubmission> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryStrategy for MockDeliveryStrategy {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmitResult<DeliveryOutcome> {
        if let Some(receiver) = self.phase.lock().unwrap().as_ref() {
            *self.observed_phase.lock().unwrap() = Some(*receiver.borrow());
        }

        if *self.fail.lock().unwrap() {
            return Err(SubmitError::Transport("connection refused".to_string()));
        }

        self.delivered.lock().unwrap().push(submission.clone());
        Ok(DeliveryOutcome::Submitted)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
