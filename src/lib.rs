//! Enercam Contact - the contact submission pipeline of the Enercam Solar Roofs website.
//!
//! A visitor's inquiry is validated, then delivered either through their own mail
//! client (a prefilled `mailto:` link) or by posting it to the contact endpoint,
//! which validates again and relays it as two transactional emails.
//!
//! # Architecture
//!
//! - **domain**: Value objects (email, name, message, service area, interest)
//! - **models**: Contact and quote submissions, outbound email payloads
//! - **validation**: Untrusted JSON to typed submission, with field-level errors
//! - **delivery**: Mailto and HTTP delivery strategies for the form
//! - **form**: The contact form state machine
//! - **client**: HTTP client for the email provider
//! - **templates**: Notification and acknowledgment email content
//! - **services**: The two-email delivery sequence
//! - **server**: Axum routes for the contact endpoints
//! - **config**, **error**, **metrics**: ambient plumbing

pub mod client;
pub mod config;
pub mod delivery;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod templates;
pub mod validation;

pub use client::{AsyncResendClient, EmailSender, ResendClient};
pub use config::{ClientConfig, Config, DeliveryMode, EmailConfig, SiteProfile};
pub use delivery::{strategy_from_config, DeliveryOutcome, DeliveryStrategy};
pub use error::{ApiError, ConfigError, DeliveryError, EmailApiError, SubmitError};
pub use form::{ContactDraft, ContactForm, FormPhase, FormState};
pub use metrics::{Metrics, SubmissionMetrics, SubmissionSummary};
pub use models::{ContactSubmission, Inquiry, OutboundEmail, QuoteSubmission, SentEmail};
pub use server::{AppState, Mailer};
pub use services::{ContactService, ContactServiceImpl, DeliveryReceipt, MailRoute};
pub use validation::{validate_contact, validate_quote, FieldError, FieldErrors};
