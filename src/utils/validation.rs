use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_count(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(CalcError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(CalcError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max(field_name: &str, value: f64, max: f64) -> Result<()> {
    if value > max {
        return Err(CalcError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value cannot exceed {}", max),
        });
    }
    Ok(())
}
