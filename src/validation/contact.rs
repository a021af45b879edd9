use super::{as_object, FieldErrors, FieldReader};
use crate::domain::{EmailAddress, Interest, MessageBody, PersonName, ServiceArea};
use crate::models::ContactSubmission;
use serde_json::{Map, Value};

/// Validate an untrusted body as a contact submission.
pub fn validate_contact(input: &Value) -> Result<ContactSubmission, FieldErrors> {
    let map = as_object(input)?;
    let mut errors = FieldErrors::default();
    match read_contact(map, &mut errors) {
        Some(submission) if errors.is_empty() => Ok(submission),
        _ => Err(errors),
    }
}

/// Read the contact fields, recording every failure. Returns `None` if any
/// required field failed.
pub(super) fn read_contact(
    map: &Map<String, Value>,
    errors: &mut FieldErrors,
) -> Option<ContactSubmission> {
    let mut reader = FieldReader::new(map, errors);

    let name = reader.required("name", "Name", |s| PersonName::new(s));
    let email = reader.required("email", "Email", |s| EmailAddress::new(s));
    let phone = reader.optional("phone", "Phone");
    let location = reader.required("location", "Location", |s| s.parse::<ServiceArea>());
    let interest = reader.required("interest", "Interest", |s| s.parse::<Interest>());
    let message = reader.required("message", "Message", |s| MessageBody::new(s));

    Some(ContactSubmission {
        name: name?,
        email: email?,
        phone,
        location: location?,
        interest: interest?,
        message: message?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "location": "Cameroon",
            "interest": "quote",
            "message": "I would like a quote for my home."
        })
    }

    #[test]
    fn test_accepts_valid_submission() {
        let submission = validate_contact(&valid_body()).unwrap();
        assert_eq!(submission.name.as_str(), "Jane Doe");
        assert_eq!(submission.location, ServiceArea::Cameroon);
        assert_eq!(submission.interest, Interest::Quote);
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn test_each_missing_field_reported() {
        let errors = validate_contact(&json!({})).unwrap_err();
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(errors.message_for("email"), Some("Email is required"));
        assert_eq!(errors.message_for("location"), Some("Location is required"));
        assert_eq!(errors.message_for("interest"), Some("Interest is required"));
        assert_eq!(errors.message_for("message"), Some("Message is required"));
        assert!(!errors.has("phone"));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_empty_strings_fail_constraints() {
        let body = json!({
            "name": "",
            "email": "",
            "location": "",
            "interest": "",
            "message": ""
        });
        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(
            errors.message_for("name"),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(errors.message_for("email"), Some("Invalid email address"));
        assert_eq!(
            errors.message_for("location"),
            Some("Please select your location")
        );
        assert_eq!(
            errors.message_for("message"),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_wrong_types_are_errors_not_panics() {
        let mut body = valid_body();
        body["name"] = json!(12);
        body["interest"] = json!(["quote"]);
        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.message_for("name"), Some("Name must be text"));
        assert_eq!(errors.message_for("interest"), Some("Interest must be text"));
    }

    #[test]
    fn test_phone_is_optional_and_unformatted() {
        let mut body = valid_body();
        body["phone"] = json!("call me maybe");
        let submission = validate_contact(&body).unwrap();
        assert_eq!(submission.phone.as_deref(), Some("call me maybe"));

        body["phone"] = Value::Null;
        assert_eq!(validate_contact(&body).unwrap().phone, None);
    }

    #[test]
    fn test_location_outside_set_rejected() {
        let mut body = valid_body();
        body["location"] = json!("Nigeria");
        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has("location"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut body = valid_body();
        body["utm_source"] = json!("newsletter");
        assert!(validate_contact(&body).is_ok());
    }
}
