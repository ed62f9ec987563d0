use crate::utils::error::{Result, SimError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks the concatenated MCC+MNC form used by the platform: a three-digit
/// MCC followed by a two- or three-digit MNC, ASCII digits only.
pub fn validate_operator_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() < 5 || code.len() > 6 {
        return Err(SimError::InvalidValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Operator code must be 5 or 6 digits (MCC followed by MNC)".to_string(),
        });
    }

    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SimError::InvalidValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Operator code must contain only ASCII digits".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SimError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
