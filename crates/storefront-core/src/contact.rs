//! Contact Form Validation
//!
//! Checks run in a fixed order and stop at the first failure; the error's
//! `Display` is the notice shown to the visitor.

use regex::Regex;
use std::sync::OnceLock;

/// Minimum number of digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 7;

/// Notice shown when the message is accepted
pub const SUCCESS_NOTICE: &str = "✅ Message sent successfully! Thank you.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("⚠ Please fill in all fields.")]
    MissingFields,
    #[error("⚠ Please enter a valid email address.")]
    InvalidEmail,
    #[error("⚠ Please enter a valid phone number (at least 7 digits).")]
    InvalidPhone,
}

/// Trimmed contact form values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.phone, &self.message];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !email_regex().is_match(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if phone_digits(&self.phone) < MIN_PHONE_DIGITS {
            return Err(ContactError::InvalidPhone);
        }
        Ok(())
    }
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}
