//! Data models for inquiries and the emails they produce.

pub mod email;
pub mod submission;

pub use email::{OutboundEmail, SentEmail};
pub use submission::{ContactSubmission, Inquiry, QuoteSubmission};
