use crate::utils::error::{LessonError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_no_nul(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}
