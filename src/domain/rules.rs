//! Custom field rules shared by the request DTOs.
//!
//! Error codes double as the rule tags reported back to clients.

use std::borrow::Cow;

use validator::ValidationError;

/// Name of the parameter echoed back in validation reports.
pub const RULE_PARAM: &str = "param";

fn bound_error(tag: &'static str, bound: i32) -> ValidationError {
    let mut error = ValidationError::new(tag);
    error.add_param(Cow::Borrowed(RULE_PARAM), &bound);
    error
}

/// Non-empty text.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Non-zero and `>= 0`.
pub fn required_non_negative(value: i32) -> Result<(), ValidationError> {
    match value {
        0 => Err(ValidationError::new("required")),
        v if v < 0 => Err(bound_error("gte", 0)),
        _ => Ok(()),
    }
}

/// Non-zero and `> 0`.
pub fn required_positive(value: i32) -> Result<(), ValidationError> {
    match value {
        0 => Err(ValidationError::new("required")),
        v if v < 0 => Err(bound_error("gt", 0)),
        _ => Ok(()),
    }
}
