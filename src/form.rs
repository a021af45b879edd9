//! The contact form as a state machine.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Idle { errors }
//!                      │
//!                    valid
//!                      ▼
//!                 Submitting ──failure──▶ Idle { banner }
//!                      │
//!                   success
//!                      ▼
//!                 Submitted ──reset──▶ Idle
//! ```
//!
//! The raw draft survives a failed attempt so the user can retry without
//! retyping; it is cleared once a submission succeeds.

use crate::delivery::{DeliveryOutcome, DeliveryStrategy};
use crate::error::SubmitError;
use crate::validation::{validate_contact, FieldErrors};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::watch;

pub const FAILURE_BANNER: &str = "Failed to send message. Please try again.";

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub interest: String,
    pub message: String,
}

impl ContactDraft {
    /// The draft as the JSON object the validator reads. Blank phone is omitted.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "email": self.email,
            "location": self.location,
            "interest": self.interest,
            "message": self.message,
        });
        if !self.phone.trim().is_empty() {
            body["phone"] = json!(self.phone);
        }
        body
    }
}

/// Current state of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle {
        errors: FieldErrors,
        banner: Option<String>,
    },
    Validating,
    Submitting,
    Submitted(DeliveryOutcome),
}

impl FormState {
    fn idle() -> Self {
        FormState::Idle {
            errors: FieldErrors::default(),
            banner: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        match self {
            FormState::Idle { .. } => FormPhase::Idle,
            FormState::Validating => FormPhase::Validating,
            FormState::Submitting => FormPhase::Submitting,
            FormState::Submitted(_) => FormPhase::Submitted,
        }
    }
}

/// Data-free view of [`FormState`] for observers (spinners, disabled buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Submitted,
}

pub struct ContactForm {
    draft: ContactDraft,
    state: FormState,
    strategy: Arc<dyn DeliveryStrategy>,
    phase: watch::Sender<FormPhase>,
}

impl ContactForm {
    pub fn new(strategy: Arc<dyn DeliveryStrategy>) -> Self {
        let (phase, _) = watch::channel(FormPhase::Idle);
        Self {
            draft: ContactDraft::default(),
            state: FormState::idle(),
            strategy,
            phase,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        &mut self.draft
    }

    /// Watch phase changes, including the transient validating/submitting ones.
    pub fn subscribe(&self) -> watch::Receiver<FormPhase> {
        self.phase.subscribe()
    }

    /// Validate the draft and, if valid, hand it to the delivery strategy.
    ///
    /// Does nothing once the form is `Submitted`; call [`reset`](Self::reset) first.
    pub async fn submit(&mut self) -> &FormState {
        if !matches!(self.state, FormState::Idle { .. }) {
            tracing::debug!(phase = ?self.state.phase(), "Ignoring submit");
            return &self.state;
        }

        self.transition(FormState::Validating);
        let submission = match validate_contact(&self.draft.to_json()) {
            Ok(submission) => submission,
            Err(errors) => {
                self.transition(FormState::Idle {
                    errors,
                    banner: None,
                });
                return &self.state;
            }
        };

        self.transition(FormState::Submitting);
        match self.strategy.deliver(&submission).await {
            Ok(outcome) => {
                tracing::info!(strategy = self.strategy.name(), "Contact form submitted");
                self.draft = ContactDraft::default();
                self.transition(FormState::Submitted(outcome));
            }
            Err(e) => {
                tracing::warn!(strategy = self.strategy.name(), "Contact form failed: {}", e);
                let errors = match e {
                    SubmitError::Rejected { details, .. } => details,
                    _ => FieldErrors::default(),
                };
                self.transition(FormState::Idle {
                    errors,
                    banner: Some(FAILURE_BANNER.to_string()),
                });
            }
        }

        &self.state
    }

    /// Back to an empty, idle form ("Send Another Message").
    pub fn reset(&mut self) {
        self.draft = ContactDraft::default();
        self.transition(FormState::idle());
    }

    fn transition(&mut self, next: FormState) {
        tracing::trace!(from = ?self.state.phase(), to = ?next.phase(), "Form transition");
        self.phase.send_replace(next.phase());
        self.state = next;
    }
}
