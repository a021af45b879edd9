use super::contact::read_contact;
use super::{as_object, FieldErrors, FieldReader};
use crate::domain::PropertyType;
use crate::models::QuoteSubmission;
use serde_json::Value;

/// Validate an untrusted body as a quote request.
///
/// Contact fields follow the same rules as [`validate_contact`](super::validate_contact);
/// errors from both halves are reported together.
pub fn validate_quote(input: &Value) -> Result<QuoteSubmission, FieldErrors> {
    let map = as_object(input)?;
    let mut errors = FieldErrors::default();

    let contact = read_contact(map, &mut errors);

    let mut reader = FieldReader::new(map, &mut errors);
    let property_type =
        reader.required("propertyType", "Property type", |s| s.parse::<PropertyType>());
    let roof_size = reader.optional("roofSize", "Roof size");
    let current_energy_bill = reader.optional("currentEnergyBill", "Current energy bill");
    let preferred_product = reader.optional("preferredProduct", "Preferred product");
    let installation_timeframe =
        reader.optional("installationTimeframe", "Installation timeframe");

    match (contact, property_type) {
        (Some(contact), Some(property_type)) if errors.is_empty() => Ok(QuoteSubmission {
            contact,
            property_type,
            roof_size,
            current_energy_bill,
            preferred_product,
            installation_timeframe,
        }),
        _ => Err(errors),
    }
}
