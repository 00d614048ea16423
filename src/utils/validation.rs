use crate::utils::error::{SortError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects package measurements that are zero or negative.
pub fn validate_positive_measure(field_name: &str, value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(SortError::ValidationError {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(value as u64)
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
