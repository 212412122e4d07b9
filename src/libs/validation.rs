//! Field validation rules shared by the form and the data layer.
//!
//! The same three rules guard both entry points: the interactive form checks
//! them before delegating, and the data layer checks them again before any
//! write. Both call sites use [`validate_fields`] so the rules cannot drift
//! apart, while either layer used alone stays safe.

use crate::libs::student::StudentForm;
use thiserror::Error;

/// A rejected field value, raised before any mutation takes place.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Age must be a number")]
    AgeNotNumeric,
    #[error("Phone must contain digits only")]
    PhoneNotNumeric,
    #[error("Invalid date of birth (use DD/MM/YYYY): {0}")]
    InvalidDob(String),
}

/// Checks the shared field rules on raw form input.
///
/// Rules: name must be non-empty; age, when present, must be digits only;
/// phone, when present, must be digits only. Date of birth is validated
/// separately by the data layer when it parses the value for storage.
pub fn validate_fields(form: &StudentForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if !form.age.is_empty() && !is_digits(&form.age) {
        return Err(ValidationError::AgeNotNumeric);
    }
    if !form.phone.is_empty() && !is_digits(&form.phone) {
        return Err(ValidationError::PhoneNotNumeric);
    }
    Ok(())
}

/// True when `text` is non-empty and entirely ASCII digits.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
