//! Error types for modsync operations.
//!
//! This module defines [`ModsyncError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ModsyncError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ModsyncError::Other`) for unexpected errors
//! - Failures propagate to the caller untouched; nothing here retries

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for modsync operations.
#[derive(Debug, Error)]
pub enum ModsyncError {
    /// The built-in module list could not be obtained.
    #[error("Built-in module list unavailable ({source_desc}): {message}")]
    BuiltinsUnavailable {
        source_desc: String,
        message: String,
    },

    /// The package manager failed to start or exited with an error.
    #[error("Install failed with exit code {code:?}: {command}: {message}")]
    InstallFailed {
        command: String,
        code: Option<i32>,
        message: String,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An editor source file was expected but is missing.
    #[error("Editor source not found: {path}")]
    EditorSourceNotFound { path: PathBuf },

    /// An editor values document could not be parsed.
    #[error("Failed to parse editor values at {path}: {message}")]
    EditorParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ModsyncError {
    /// Process exit code for this error.
    ///
    /// Problems with the user's inputs (config, editor files) exit with 2,
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. }
            | Self::EditorSourceNotFound { .. }
            | Self::EditorParseError { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for modsync operations.
pub type Result<T> = std::result::Result<T, ModsyncError>;
