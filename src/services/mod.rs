//! Application service layer.
//!
//! Services contain the delivery logic and sit between the HTTP handlers and
//! the email provider client.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, DeliveryReceipt, MailRoute};
