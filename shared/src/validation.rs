use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use validator::{ValidationError, ValidationErrors};

use crate::constants::{
    IMEI_MAX_LENGTH, IMEI_MIN_LENGTH, INVALID_IMEI_ERROR, INVALID_PHONE_ERROR, PHONE_MIN_LENGTH,
};

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if phone.len() < PHONE_MIN_LENGTH || !DIGITS_RE.is_match(phone) {
        let mut error = ValidationError::new("invalid_phone_number");
        error.message = Some(INVALID_PHONE_ERROR.into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_imei(imei: &str) -> Result<(), ValidationError> {
    if !(IMEI_MIN_LENGTH..=IMEI_MAX_LENGTH).contains(&imei.len()) || !DIGITS_RE.is_match(imei) {
        let mut error = ValidationError::new("invalid_imei");
        error.message = Some(INVALID_IMEI_ERROR.into());
        return Err(error);
    }
    Ok(())
}

/// Flattens `ValidationErrors` into one message per field for display
/// next to the inputs.
pub fn error_messages(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| "This field is invalid".to_string());
            (field.to_string(), message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_rules() {
        assert!(validate_phone_number("9812345678").is_ok());
        assert!(validate_phone_number("98123456789012").is_ok());
        assert!(validate_phone_number("981234567").is_err());
        assert!(validate_phone_number("98123456ab").is_err());
        assert!(validate_phone_number("").is_err());
    }

    #[test]
    fn test_imei_rules() {
        assert!(validate_imei("123456789012345").is_ok());
        assert!(validate_imei("12345678901234567").is_ok());
        assert!(validate_imei("12345678901234").is_err());
        assert!(validate_imei("123456789012345678").is_err());
        assert!(validate_imei("12345678901234x").is_err());
    }
}
