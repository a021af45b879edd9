//! Contact service layer.
//!
//! Relays a validated inquiry as two transactional emails: a notification to
//! staff, then an acknowledgment to the submitter. The sends are sequential
//! and awaited; the first failure ends the sequence.

use crate::client::EmailSender;
use crate::config::{EmailConfig, SiteProfile};
use crate::error::{DeliveryError, DeliveryResult};
use crate::models::Inquiry;
use crate::templates;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Provider ids for the two emails of a completed delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub notification_id: String,
    pub acknowledgement_id: String,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Send the staff notification and the submitter acknowledgment.
    async fn deliver(&self, inquiry: &dyn Inquiry) -> DeliveryResult<DeliveryReceipt>;
}

/// Sender and staff addresses for outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRoute {
    pub from: String,
    pub staff: String,
}

impl From<&EmailConfig> for MailRoute {
    fn from(config: &EmailConfig) -> Self {
        MailRoute {
            from: config.from.clone(),
            staff: config.to.clone(),
        }
    }
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    sender: Arc<dyn EmailSender>,
    route: MailRoute,
    site: SiteProfile,
}

impl ContactServiceImpl {
    pub fn new(sender: Arc<dyn EmailSender>, route: MailRoute, site: SiteProfile) -> Self {
        Self {
            sender,
            route,
            site,
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn deliver(&self, inquiry: &dyn Inquiry) -> DeliveryResult<DeliveryReceipt> {
        let contact = inquiry.contact();

        let notification =
            templates::notification(inquiry, &self.route.from, &self.route.staff, Utc::now());
        let notified = self
            .sender
            .send(&notification)
            .await
            .map_err(DeliveryError::NotificationFailed)?;

        tracing::info!(
            interest = %contact.interest,
            location = %contact.location,
            notification_id = %notified.id,
            "Staff notification sent"
        );

        let acknowledgement = templates::acknowledgement(inquiry, &self.route.from, &self.site);
        let acknowledged = self.sender.send(&acknowledgement).await.map_err(|source| {
            DeliveryError::PartialDelivery {
                notification_id: notified.id.clone(),
                source,
            }
        })?;

        tracing::info!(acknowledgement_id = %acknowledged.id, "Acknowledgment sent");

        Ok(DeliveryReceipt {
            notification_id: notified.id,
            acknowledgement_id: acknowledged.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, Interest, MessageBody, PersonName, ServiceArea};
    use crate::error::{EmailApiError, EmailApiResult};
    use crate::models::{ContactSubmission, OutboundEmail, SentEmail};
    use std::sync::Mutex;

    /// Records every email; fails the send whose index is `fail_at`.
    struct ScriptedSender {
        sent: Mutex<Vec<OutboundEmail>>,
        fail_at: Option<usize>,
    }

    impl ScriptedSender {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_at,
            }
        }
    }

    #[async_trait]
    impl EmailSender for ScriptedSender {
        async fn send(&self, email: &OutboundEmail) -> EmailApiResult<SentEmail> {
            let mut sent = self.sent.lock().unwrap();
            let index = sent.len();
            sent.push(email.clone());
            if self.fail_at == Some(index) {
                return Err(EmailApiError::ApiError {
                    status: 500,
                    message: "provider down".to_string(),
                });
            }
            Ok(SentEmail {
                id: format!("email_{}", index),
            })
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: PersonName::new("Jane Doe").unwrap(),
            email: EmailAddress::new("jane@x.com").unwrap(),
            phone: None,
            location: ServiceArea::Cameroon,
            interest: Interest::Quote,
            message: MessageBody::new("I would like a quote for my home.").unwrap(),
        }
    }

    fn service(sender: Arc<ScriptedSender>) -> ContactServiceImpl {
        ContactServiceImpl::new(
            sender,
            MailRoute {
                from: "noreply@enercam.com".to_string(),
                staff: "sales@enercam.com".to_string(),
            },
            SiteProfile::default(),
        )
    }

    #[tokio::test]
    async fn test_sends_notification_then_acknowledgement() {
        let sender = Arc::new(ScriptedSender::new(None));
        let receipt = service(sender.clone()).deliver(&submission()).await.unwrap();

        assert_eq!(receipt.notification_id, "email_0");
        assert_eq!(receipt.acknowledgement_id, "email_1");

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].recipient(), "sales@enercam.com");
        assert_eq!(sent[1].recipient(), "jane@x.com");
    }

    #[tokio::test]
    async fn test_notification_failure_stops_sequence() {
        let sender = Arc::new(ScriptedSender::new(Some(0)));
        let err = service(sender.clone())
            .deliver(&submission())
            .await
            .unwrap_err();

        assert!(matches!(err, DeliveryError::NotificationFailed(_)));
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_acknowledgement_failure_is_partial() {
        let sender = Arc::new(ScriptedSender::new(Some(1)));
        let err = service(sender).deliver(&submission()).await.unwrap_err();

        match err {
            DeliveryError::PartialDelivery {
                notification_id, ..
            } => assert_eq!(notification_id, "email_0"),
            other => panic!("Expected PartialDelivery, got: {:?}", other),
        }
    }

    #[test]
    fn test_route_from_config() {
        let config = EmailConfig {
            api_key: "re_key".to_string(),
            api_base_url: "https://api.resend.com".to_string(),
            from: "noreply@enercam.com".to_string(),
            to: "sales@enercam.com".to_string(),
        };
        let route = MailRoute::from(&config);
        assert_eq!(route.staff, "sales@enercam.com");
    }
}
