//! Contact form: client-side validation and the two-step submission flow
//! (relay first, then the backend message store).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Throwaway inbox providers rejected before any network call.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "sharklasers.com",
    "temp-mail.org",
    "tempmail.com",
    "throwawaymail.com",
    "trashmail.com",
    "yopmail.com",
];

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    EmptyField,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Subject must be at least 5 characters")]
    SubjectTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Disposable email addresses are not accepted")]
    DisposableDomain,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Applies the validation rules in a fixed order, failing on the first
/// violation so the toast always names a single rule.
pub fn validate(form: &ContactForm) -> Result<(), ContactError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let subject = form.subject.trim();
    let message = form.message.trim();

    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(ContactError::EmptyField);
    }
    if name.chars().count() < 2 {
        return Err(ContactError::NameTooShort);
    }
    if subject.chars().count() < 5 {
        return Err(ContactError::SubjectTooShort);
    }
    let Some(domain) = email_domain(email) else {
        return Err(ContactError::InvalidEmail);
    };
    if DISPOSABLE_DOMAINS.contains(&domain.to_ascii_lowercase().as_str()) {
        return Err(ContactError::DisposableDomain);
    }
    if message.chars().count() < 10 {
        return Err(ContactError::MessageTooShort);
    }
    Ok(())
}

/// Returns the domain part when the address has a basic `local@domain.tld`
/// shape, `None` otherwise. Deliberately not an RFC 5322 parser.
fn email_domain(email: &str) -> Option<&str> {
    if email.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let (name, tld) = domain.rsplit_once('.')?;
    if name.is_empty() || tld.is_empty() {
        return None;
    }
    Some(domain)
}

/// Payload stored by the backend after the relay accepts the message.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredMessage<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    is_read: bool,
    is_starred: bool,
    is_archived: bool,
}

#[derive(Deserialize, Default)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
}

#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum SubmitError {
    #[error("Failed to send message: {0}")]
    Relay(String),
    /// The relay accepted the message but the backend store did not. The
    /// message may have been partially delivered; there is no rollback.
    #[error("Message sent, but could not be saved: {0}")]
    Backend(String),
}

#[cfg(target_arch = "wasm32")]
pub use submit::submit;

#[cfg(target_arch = "wasm32")]
mod submit {
    use super::{ContactForm, RelayResponse, StoredMessage, SubmitError};
    use crate::config;
    use gloo_net::http::Request;
    use web_sys::FormData;

    /// Relay first; the backend store only runs after the relay reports
    /// success. A backend failure after that point is surfaced, not rolled
    /// back.
    pub async fn submit(form: &ContactForm) -> Result<(), SubmitError> {
        send_to_relay(form).await?;
        store_on_backend(form).await
    }

    async fn send_to_relay(form: &ContactForm) -> Result<(), SubmitError> {
        let body = relay_form_data(form)
            .map_err(|_| SubmitError::Relay("could not build form data".into()))?;
        let response = Request::post(config::RELAY_ENDPOINT)
            .body(body)
            .map_err(|err| SubmitError::Relay(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Relay(err.to_string()))?;
        let payload = response
            .json::<RelayResponse>()
            .await
            .unwrap_or_default();
        if payload.success {
            Ok(())
        } else if payload.message.is_empty() {
            Err(SubmitError::Relay(format!(
                "relay responded with status {}",
                response.status()
            )))
        } else {
            Err(SubmitError::Relay(payload.message))
        }
    }

    fn relay_form_data(form: &ContactForm) -> Result<FormData, wasm_bindgen::JsValue> {
        let data = FormData::new()?;
        data.append_with_str("access_key", config::web3forms_access_key())?;
        data.append_with_str("name", form.name.trim())?;
        data.append_with_str("email", form.email.trim())?;
        data.append_with_str("subject", form.subject.trim())?;
        data.append_with_str("message", form.message.trim())?;
        // Honeypot field; real users leave it empty.
        data.append_with_str("botcheck", "")?;
        Ok(data)
    }

    async fn store_on_backend(form: &ContactForm) -> Result<(), SubmitError> {
        let payload = StoredMessage {
            name: form.name.trim(),
            email: form.email.trim(),
            subject: form.subject.trim(),
            message: form.message.trim(),
            is_read: false,
            is_starred: false,
            is_archived: false,
        };
        let response = Request::post(&config::api_url("/api/messages"))
            .header("x-api-key", config::backend_api_key())
            .json(&payload)
            .map_err(|err| SubmitError::Backend(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Backend(err.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Backend(format!(
                "backend responded with status {}",
                response.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Garv".into(),
            email: "garv@example.com".into(),
            subject: "Project inquiry".into(),
            message: "I'd like to discuss a project.".into(),
        }
    }

    #[test]
    fn a_valid_form_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn empty_fields_fail_before_any_other_rule() {
        let form = ContactForm {
            name: String::new(),
            email: "not-an-email".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ContactError::EmptyField));
    }

    #[test]
    fn short_name_is_rejected() {
        let form = ContactForm {
            name: "G".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ContactError::NameTooShort));
    }

    #[test]
    fn short_subject_is_rejected() {
        let form = ContactForm {
            subject: "Hey".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ContactError::SubjectTooShort));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plain", "no-at.example.com", "a@b", "a@.com", "@x.com", "a b@x.com"] {
            let form = ContactForm {
                email: email.into(),
                ..valid_form()
            };
            assert_eq!(validate(&form), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn disposable_domains_are_blocked_case_insensitively() {
        let form = ContactForm {
            email: "someone@Mailinator.com".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ContactError::DisposableDomain));
    }

    #[test]
    fn message_length_boundary_is_ten_characters() {
        let nine = ContactForm {
            message: "123456789".into(),
            ..valid_form()
        };
        assert_eq!(validate(&nine), Err(ContactError::MessageTooShort));

        let ten = ContactForm {
            message: "1234567890".into(),
            ..valid_form()
        };
        assert_eq!(validate(&ten), Ok(()));
    }

    #[test]
    fn email_rule_runs_before_message_rule() {
        let form = ContactForm {
            email: "broken".into(),
            message: "short".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ContactError::InvalidEmail));
    }
}
