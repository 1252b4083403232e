use crate::utils::error::{BootError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BootError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BootError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BootError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// An ASGI application target has the form `module:attribute`.
pub fn validate_app_target(field_name: &str, value: &str) -> Result<()> {
    let mut parts = value.splitn(2, ':');
    let module = parts.next().unwrap_or("");
    let attribute = parts.next();

    match attribute {
        Some(attr) if !module.trim().is_empty() && !attr.trim().is_empty() => Ok(()),
        _ => Err(BootError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected 'module:attribute', e.g. forge_kernel:app".to_string(),
        }),
    }
}
