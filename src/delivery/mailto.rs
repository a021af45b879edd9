use super::{DeliveryOutcome, DeliveryStrategy};
use crate::error::SubmitResult;
use crate::models::ContactSubmission;
use async_trait::async_trait;

/// A prefilled `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub address: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    /// Lay out a submission as a plain-text email to `address`.
    pub fn for_submission(address: &str, submission: &ContactSubmission) -> Self {
        let subject = format!(
            "Contact Form: {} - {}",
            submission.interest, submission.name
        );
        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\nLocation: {}\nInterest: {}\n\nMessage:\n{}",
            submission.name,
            submission.email,
            submission.phone.as_deref().unwrap_or("Not provided"),
            submission.location,
            submission.interest,
            submission.message,
        );

        Self {
            address: address.to_string(),
            subject,
            body,
        }
    }

    /// `mailto:<address>?subject=<enc>&body=<enc>`
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.address,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Opens the user's own mail client. No network I/O, cannot fail.
pub struct MailtoStrategy {
    address: String,
}

impl MailtoStrategy {
    pub fn new(address: String) -> Self {
        Self { address }
    }
}

#[async_trait]
impl DeliveryStrategy for MailtoStrategy {
    async fn deliver(&self, submission: &ContactSubmission) -> SubmitResult<DeliveryOutcome> {
        let uri = MailtoLink::for_submission(&self.address, submission).to_uri();
        Ok(DeliveryOutcome::MailClientOpened { uri })
    }

    fn name(&self) -> &'static str {
        "mailto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, Interest, MessageBody, PersonName, ServiceArea};

    fn submission(phone: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: PersonName::new("Jane Doe").unwrap(),
            email: EmailAddress::new("jane@x.com").unwrap(),
            phone: phone.map(str::to_string),
            location: ServiceArea::EquatorialGuinea,
            interest: Interest::Support,
            message: MessageBody::new("Inverter shows error E4 & beeps.").unwrap(),
        }
    }

    #[test]
    fn test_link_layout() {
        let link = MailtoLink::for_submission("info@enercam.com", &submission(None));
        assert_eq!(link.subject, "Contact Form: support - Jane Doe");
        assert_eq!(
            link.body,
            "Name: Jane Doe\nEmail: jane@x.com\nPhone: Not provided\nLocation: Equatorial Guinea\nInterest: support\n\nMessage:\nInverter shows error E4 & beeps."
        );
    }

    #[test]
    fn test_uri_is_percent_encoded() {
        let uri = MailtoLink::for_submission("info@enercam.com", &submission(Some("+237 1")))
            .to_uri();
        assert!(uri.starts_with("mailto:info@enercam.com?subject=Contact%20Form%3A%20support"));
        assert!(uri.contains("Phone%3A%20%2B237%201"));
        assert!(uri.contains("%26%20beeps"));
        assert!(!uri.contains('\n'));
        assert_eq!(uri.matches('&').count(), 1);
    }

    #[tokio::test]
    async fn test_strategy_never_fails() {
        let strategy = MailtoStrategy::new("info@enercam.com".to_string());
        match strategy.deliver(&submission(None)).await.unwrap() {
            DeliveryOutcome::MailClientOpened { uri } => assert!(uri.starts_with("mailto:")),
            other => panic!("Expected MailClientOpened, got: {:?}", other),
        }
    }
}
