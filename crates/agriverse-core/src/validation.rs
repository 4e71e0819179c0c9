// crates/agriverse-core/src/validation.rs
//
// Boundary checks shared by the calculators. Every check fails fast with
// `AgriverseError::InvalidInput` naming the field.

use crate::error::AgriverseError;

/// Reject NaN and infinite values.
pub fn require_finite(field: &'static str, value: f64) -> Result<f64, AgriverseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AgriverseError::invalid(
            field,
            format!("{} is not a finite number", value),
        ))
    }
}

/// Reject non-finite and negative values. Returns the value unchanged.
///
/// `-0.0` is accepted and normalized to `0.0`.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, AgriverseError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(AgriverseError::invalid(
            field,
            format!("{} is negative; expected a value >= 0", value),
        ));
    }
    Ok(value + 0.0)
}

/// Validate a whole-number count: non-negative and within `u32`.
pub fn require_count(field: &'static str, value: i64) -> Result<u32, AgriverseError> {
    if value < 0 {
        return Err(AgriverseError::invalid(
            field,
            format!("{} is negative; expected a count >= 0", value),
        ));
    }
    u32::try_from(value).map_err(|_| {
        AgriverseError::invalid(field, format!("{} exceeds the maximum of {}", value, u32::MAX))
    })
}
