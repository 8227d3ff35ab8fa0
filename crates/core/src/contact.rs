//! Contact form placeholder.
//!
//! Submissions are validated and acknowledged but never delivered anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acknowledgement shown after a successful placeholder submission.
pub const PLACEHOLDER_ACK: &str =
    "Demo form: nothing was sent. Wire this up to a form delivery service to receive messages.";

/// Per-field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("email address is not valid: {0}")]
    InvalidEmail(String),

    #[error("message is required")]
    MissingMessage,
}

/// Which input a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactError {
    #[must_use]
    pub const fn field(&self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmail(_) => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

/// Outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionAck {
    /// Accepted by the placeholder; nothing was delivered.
    Placeholder { message: String },
}

impl SubmissionAck {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Placeholder { message } => message,
        }
    }
}

/// The contact form's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every field error, in form order. Empty when the form is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<ContactError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ContactError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactError::MissingEmail);
        } else if !is_plausible_email(email) {
            errors.push(ContactError::InvalidEmail(email.to_string()));
        }

        if self.message.trim().is_empty() {
            errors.push(ContactError::MissingMessage);
        }

        errors
    }

    /// Validate, then acknowledge without sending anything.
    ///
    /// # Errors
    ///
    /// Returns every field error when the form is invalid.
    pub fn submit(&self) -> Result<SubmissionAck, Vec<ContactError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        tracing::info!("contact form submitted to placeholder; nothing delivered");
        Ok(SubmissionAck::Placeholder {
            message: PLACEHOLDER_ACK.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn given_complete_form_when_submitted_then_placeholder_ack() {
        let form = ContactForm::new("Ada Lovelace", "ada@example.com", "Hello");
        let ack = form.submit().unwrap();
        assert_eq!(ack.message(), PLACEHOLDER_ACK);
    }

    #[test]
    fn given_blank_form_when_validated_then_every_field_reported() {
        let errors = ContactForm::new("  ", "", "\n").validate();
        assert_eq!(
            errors,
            vec![
                ContactError::MissingName,
                ContactError::MissingEmail,
                ContactError::MissingMessage
            ]
        );
    }

    #[test]
    fn given_bad_emails_when_validated_then_invalid_email() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "a@b@c.io", "ada @x.io"] {
            let errors = ContactForm::new("Ada", email, "Hi").validate();
            assert_eq!(errors.len(), 1, "email {email:?}");
            assert_eq!(errors.first().map(ContactError::field), Some(ContactField::Email));
        }
    }

    #[test]
    fn given_invalid_form_when_submitted_then_errors_returned() {
        let result = ContactForm::new("Ada", "ada@example.com", "").submit();
        assert_eq!(result, Err(vec![ContactError::MissingMessage]));
    }
}
