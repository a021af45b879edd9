//! Validated inquiries submitted through the site.

use crate::domain::{EmailAddress, Interest, MessageBody, PersonName, PropertyType, ServiceArea};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A fully validated contact inquiry.
///
/// Has no identity and is never stored: it is built by the validator, handed
/// to one delivery strategy, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: PersonName,
    pub email: EmailAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: ServiceArea,
    pub interest: Interest,
    pub message: MessageBody,
}

/// A contact inquiry with property details for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    #[serde(flatten)]
    pub contact: ContactSubmission,
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_energy_bill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_timeframe: Option<String>,
}

/// Anything that can be relayed to staff as an inquiry.
pub trait Inquiry: Send + Sync {
    /// The contact core every inquiry carries.
    fn contact(&self) -> &ContactSubmission;

    /// Extra labelled lines for the staff notification, in display order.
    fn extra_details(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl Inquiry for ContactSubmission {
    fn contact(&self) -> &ContactSubmission {
        self
    }
}

impl Inquiry for QuoteSubmission {
    fn contact(&self) -> &ContactSubmission {
        &self.contact
    }

    fn extra_details(&self) -> Vec<(&'static str, String)> {
        let mut details = vec![("Property Type", self.property_type.to_string())];
        let optional = [
            ("Roof Size", &self.roof_size),
            ("Current Energy Bill", &self.current_energy_bill),
            ("Preferred Product", &self.preferred_product),
            ("Installation Timeframe", &self.installation_timeframe),
        ];
        details.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.as_ref().map(|v| (label, v.clone()))),
        );
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> ContactSubmission {
        ContactSubmission {
            name: PersonName::new("Jane Doe").unwrap(),
            email: EmailAddress::new("jane@x.com").unwrap(),
            phone: None,
            location: ServiceArea::Cameroon,
            interest: Interest::Quote,
            message: MessageBody::new("I would like a quote for my home.").unwrap(),
        }
    }

    #[test]
    fn test_contact_serializes_camel_case_without_phone() {
        let json = serde_json::to_value(sample_contact()).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["location"], "Cameroon");
        assert_eq!(json["interest"], "quote");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_quote_flattens_contact_fields() {
        let quote = QuoteSubmission {
            contact: sample_contact(),
            property_type: PropertyType::Residential,
            roof_size: Some("120 m2".to_string()),
            current_energy_bill: None,
            preferred_product: None,
            installation_timeframe: Some("Within 3 months".to_string()),
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["email"], "jane@x.com");
        assert_eq!(json["propertyType"], "residential");
        assert_eq!(json["roofSize"], "120 m2");
        assert!(json.get("currentEnergyBill").is_none());
    }

    #[test]
    fn test_quote_extra_details_skip_absent_fields() {
        let quote = QuoteSubmission {
            contact: sample_contact(),
            property_type: PropertyType::Industrial,
            roof_size: None,
            current_energy_bill: Some("150,000 XAF".to_string()),
            preferred_product: None,
            installation_timeframe: None,
        };
        let details = quote.extra_details();
        assert_eq!(
            details,
            vec![
                ("Property Type", "industrial".to_string()),
                ("Current Energy Bill", "150,000 XAF".to_string()),
            ]
        );
        assert!(sample_contact().extra_details().is_empty());
    }
}
