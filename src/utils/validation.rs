use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_command(field_name: &str, command: &[String]) -> Result<()> {
    match command.first() {
        None => Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        }),
        Some(program) if program.trim().is_empty() => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: command.join(" "),
            reason: "Command program cannot be empty".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// `filled_by` is optional in the output, so an empty value is only worth a warning.
pub fn warn_if_blank(field_name: &str, value: &str) {
    if value.trim().is_empty() {
        tracing::warn!("⚠️ '{}' is empty; the 'filled by' column will be blank", field_name);
    }
}
