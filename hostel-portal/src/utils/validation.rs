//! Registration form validation
//!
//! Every failing field is reported, not only the first one.

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::RegistrationForm;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

// ── Limits ──────────────────────────────────────────────────────────

/// Minimum full name length, counted after trimming
pub const MIN_NAME_LEN: usize = 2;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static CONTACT_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[1-9][0-9]{9,14}$").expect("valid contact regex"));

// ── Errors ──────────────────────────────────────────────────────────

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: &str) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

/// All failures of one form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Reason reported for `field`, if it failed
    pub fn reason(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.reason.as_str())
    }

    fn push(&mut self, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.0.push(e);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<&str> = self.0.iter().map(|e| e.reason.as_str()).collect();
        f.write_str(&reasons.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        errors.0.iter().fold(
            AppError::with_message(ErrorCode::ValidationFailed, errors.to_string()),
            |err, e| err.with_detail(e.field, e.reason.clone()),
        )
    }
}

// ── Field rules ─────────────────────────────────────────────────────

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::new(
            "fullName",
            "Full name must be at least 2 characters long",
        ));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::new(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

/// Whitespace anywhere in the number is ignored
pub fn validate_contact(value: &str) -> Result<(), ValidationError> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if !CONTACT_RE.is_match(&compact) {
        return Err(ValidationError::new(
            "contact",
            "Please enter a valid contact number",
        ));
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            "password",
            "Password must be at least 6 characters long",
        ));
    }
    Ok(())
}

pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.push(validate_full_name(&form.full_name));
    errors.push(validate_email(&form.email));
    errors.push(validate_contact(&form.contact));
    errors.push(validate_password(&form.password));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Kiran Rao".to_string(),
            email: "kiran.rao@university.edu".to_string(),
            contact: "+91 98765 43210".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_registration(&valid_form()).is_ok());
    }

    #[test]
    fn test_name_length_boundary() {
        assert!(validate_full_name("A").is_err());
        assert!(validate_full_name("  A  ").is_err());
        assert!(validate_full_name("Al").is_ok());
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.d").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_contact_rules() {
        assert!(validate_contact("9876543210").is_ok());
        assert!(validate_contact("+91 98765 43210").is_ok());
        assert!(validate_contact("0987654321").is_err());
        assert!(validate_contact("12345").is_err());
        assert!(validate_contact("1234567890123456").is_err());
        assert!(validate_contact("98765-43210").is_err());
    }

    #[test]
    fn test_all_failures_reported() {
        let form = RegistrationForm {
            full_name: "A".to_string(),
            email: "not-an-email".to_string(),
            contact: "123".to_string(),
            password: "12345".to_string(),
        };
        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.reason("fullName"),
            Some("Full name must be at least 2 characters long")
        );
        assert_eq!(errors.reason("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.reason("contact"), Some("Please enter a valid contact number"));
        assert_eq!(
            errors.reason("password"),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn test_converts_to_app_error() {
        let form = RegistrationForm {
            password: "1".to_string(),
            ..valid_form()
        };
        let err: AppError = validate_registration(&form).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Password must be at least 6 characters long");
        assert!(err.details.unwrap().contains_key("password"));
    }
}
