//! Contact form validation rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::form::{MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS};
use crate::core::error::ValidationError;
use crate::core::phone::is_valid_phone;
use crate::models::{FormField, FormFields};

/// Permissive `local@domain.tld` shape.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@[:space:]]+@[^@[:space:]]+\.[^@[:space:]]+$").expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate a single field value (used for inline errors on blur).
pub fn validate_field(field: FormField, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    match field {
        FormField::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FormField::Phone if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        FormField::Message => {
            let len = value.chars().count();
            if len < MESSAGE_MIN_CHARS {
                Err(ValidationError::MessageTooShort)
            } else if len > MESSAGE_MAX_CHARS {
                Err(ValidationError::MessageTooLong)
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Validate the whole form, returning the first failure in field order.
pub fn validate_form(fields: &FormFields) -> Result<(), ValidationError> {
    FormField::ALL
        .into_iter()
        .try_for_each(|field| validate_field(field, fields.get(field)))
}
