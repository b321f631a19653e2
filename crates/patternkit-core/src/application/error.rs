//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Location prefix of stubs compiled into the binary.
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A stub the plan needs is absent from the active template store.
    #[error("Template not found: {stub} (looked in {location})")]
    TemplateNotFound { stub: String, location: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { stub, location } if location.starts_with(BUILTIN_PREFIX) => {
                vec![format!(
                    "The built-in stub set has no {stub}; this is a bug, please report it"
                )]
            }
            Self::TemplateNotFound { stub, location } => vec![
                format!("Create {location}"),
                format!(
                    "Or point --stubs / templates.local_path at a directory holding {stub}"
                ),
                "Or drop --stubs to use the built-in stubs".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that --root points at your application".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
