use std::collections::BTreeMap;

use super::types::{LoginStyleField, LoginStylesForm};
use crate::features::errors::FormError;

/// Field-level validation failures of the login styles form.
pub type LoginStyleErrors = BTreeMap<LoginStyleField, FormError>;

/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

pub fn validate_field(field: LoginStyleField, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::Required { field: field.key() });
    }
    if field.is_color() && !is_hex_color(value) {
        return Err(FormError::InvalidHexColor {
            field: field.key(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validates every field; any error blocks submission.
pub fn validate_form(form: &LoginStylesForm) -> Result<(), LoginStyleErrors> {
    let errors: LoginStyleErrors = LoginStyleField::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, form.get(field)).err().map(|e| (field, e)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
