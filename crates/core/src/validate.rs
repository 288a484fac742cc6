//! Request validation helpers.
//!
//! Handlers validate the few request shapes the gateway owns before any
//! external call goes out. Everything forwarded verbatim to the upstream
//! API is validated there, not here.

use crate::error::CoreError;

/// Maximum accepted length for a language code (`pt-BR` style tags fit).
const MAX_LANGUAGE_CODE_LEN: usize = 8;

/// Maximum accepted length for a license plate.
const MAX_PLATE_LEN: usize = 16;

/// Validate a translation language code (`en`, `de`, `pt-BR`, ...).
pub fn validate_language_code(code: &str) -> Result<(), CoreError> {
    let valid = !code.is_empty()
        && code.len() <= MAX_LANGUAGE_CODE_LEN
        && code.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid language code: '{code}'"
        )))
    }
}

/// Validate a license plate for the violations lookup.
///
/// Plates are jurisdiction-specific, so this only rejects obviously broken
/// input: empty, overlong, or containing characters no plate uses.
pub fn validate_plate(plate: &str) -> Result<(), CoreError> {
    let trimmed = plate.trim();
    let valid = !trimmed.is_empty()
        && trimmed.len() <= MAX_PLATE_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ');

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid license plate: '{plate}'"
        )))
    }
}

/// Validate the issuing region (state/province) for the violations lookup.
pub fn validate_region(region: &str) -> Result<(), CoreError> {
    let valid = (2..=3).contains(&region.len())
        && region.chars().all(|c| c.is_ascii_alphabetic());

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid region: '{region}'")))
    }
}
