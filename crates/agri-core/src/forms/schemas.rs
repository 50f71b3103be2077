//! Field rules for each form on the site

use super::FormSchema;

/// Scheduling field; its minimum is set on the datetime widget and checked
/// again by [`FormState::submit_scheduled`](super::FormState::submit_scheduled)
pub const PREFERRED_DATE_TIME: &str = "preferredDateTime";

/// "Request / Schedule Your Demo" modal on the home page
pub fn demo_request() -> FormSchema {
    FormSchema::new("demo-request")
        .required("name", "Name is required")
        .required("phone", "Contact number is required")
        .email("email", "Valid email is required")
        .required("location", "Location is required")
        .required("purpose", "Purpose is required")
        .optional(PREFERRED_DATE_TIME)
}

/// "Send us a Message" form in the home contact section
pub fn message() -> FormSchema {
    FormSchema::new("message")
        .required("name", "Name is required")
        .required("phone", "Phone number is required")
        .email("email", "Valid email is required")
        .required("location", "Location is required")
        .required("purpose", "Purpose is required")
        .required("cropType", "Please select your crop type")
        .optional(PREFERRED_DATE_TIME)
        .optional("message")
}

/// Inquiry form on the contact page
pub fn inquiry() -> FormSchema {
    FormSchema::new("inquiry")
        .required("business", "Business name is required")
        .email("email", "Valid email is required")
        .required("name", "Full name is required")
        .min_length("phone", 8, "Valid phone number required")
        .optional("service")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::RuleKind;

    #[test]
    fn test_demo_request_fields() {
        let names: Vec<_> = demo_request().field_names().collect();
        assert_eq!(
            names,
            ["name", "phone", "email", "location", "purpose", PREFERRED_DATE_TIME]
        );
    }

    #[test]
    fn test_inquiry_phone_rule() {
        let rule = inquiry().rule("phone").unwrap();
        assert_eq!(rule.kind, RuleKind::MinLength(8));
        assert_eq!(rule.message, "Valid phone number required");
    }

    #[test]
    fn test_schema_ids_are_distinct() {
        let ids = [demo_request().id(), message().id(), inquiry().id()];
        assert_eq!(ids, ["demo-request", "message", "inquiry"]);
    }

    #[test]
    fn test_message_optional_fields() {
        let schema = message();
        assert!(schema.rule("message").is_none());
        assert!(schema.rule(PREFERRED_DATE_TIME).is_none());
        assert_eq!(schema.rule("cropType").unwrap().kind, RuleKind::Required);
    }
}
