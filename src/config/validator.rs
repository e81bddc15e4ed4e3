//! Configuration validation rules.

use crate::config::schema::ModsyncConfig;
use crate::error::{ModsyncError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return every problem found.
pub fn validate_config(config: &ModsyncConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.scan.reserved_module.trim().is_empty() {
        errors.push(ValidationError {
            field: "scan.reserved_module".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if config.scan.ignore.iter().any(|name| name.trim().is_empty()) {
        errors.push(ValidationError {
            field: "scan.ignore".to_string(),
            message: "must not contain empty names".to_string(),
        });
    }

    if let Some(program) = &config.install.program {
        if program.trim().is_empty() {
            errors.push(ValidationError {
                field: "install.program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }

    for (field, path) in [
        ("editors.main", &config.editors.main),
        ("editors.renderer", &config.editors.renderer),
        ("editors.preload", &config.editors.preload),
    ] {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on the first batch of problems.
pub fn validate(config: &ModsyncConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(ModsyncError::ConfigValidationError { message })
}
