use serde::Deserialize;
use serde::Serialize;

use crate::{impl_from_str_for_enum, impl_to_string_for_enum};

/// How the submitter wants to be reached. Picks the outbound provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    EMAIL,
    SMS,
}

impl_from_str_for_enum!(ContactMethod, EMAIL, SMS);
impl_to_string_for_enum!(ContactMethod, EMAIL, SMS);

/// One contact-form post. Lives for the duration of the request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    #[serde(rename = "contactMethod")]
    pub contact_method: ContactMethod,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub from: Option<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendSmsRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn contact_method_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContactMethod::EMAIL).unwrap(),
            "\"email\""
        );
        assert_eq!(
            serde_json::to_string(&ContactMethod::SMS).unwrap(),
            "\"sms\""
        );

        let parsed: ContactMethod = serde_json::from_str("\"sms\"").unwrap();
        assert_eq!(parsed, ContactMethod::SMS);
    }

    #[test]
    fn contact_method_from_str_is_case_insensitive() {
        assert_eq!(
            ContactMethod::from_str("email").unwrap(),
            ContactMethod::EMAIL
        );
        assert_eq!(ContactMethod::from_str("SMS").unwrap(), ContactMethod::SMS);
        assert!(ContactMethod::from_str("carrier-pigeon").is_err());
    }

    #[test]
    fn submission_deserializes_camel_case_body() {
        let body = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello",
            "contactMethod": "email"
        }"#;

        let submission: ContactSubmission = serde_json::from_str(body).unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.contact_method, ContactMethod::EMAIL);
        assert!(submission.phone.is_none());
    }
}
