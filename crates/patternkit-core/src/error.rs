//! Unified error handling for patternkit core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for patternkit core operations.
///
/// This enum wraps all possible errors that can occur when using
/// patternkit-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum PatternError {
    /// Errors from the domain layer (invalid names, colliding outputs).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (missing stubs, I/O).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PatternError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in patternkit".into(),
                "Please report this issue at: https://github.com/cosecruz/patternkit/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether this is the missing-stub condition.
    pub fn is_template_not_found(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::TemplateNotFound { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_layer() {
        let invalid: PatternError = DomainError::InvalidClassName {
            name: "1Car".into(),
            reason: "must start with a letter or underscore".into(),
        }
        .into();
        assert_eq!(invalid.category(), ErrorCategory::Validation);

        let missing: PatternError = ApplicationError::TemplateNotFound {
            stub: "factory/factory-product.stub".into(),
            location: "builtin:factory/factory-product.stub".into(),
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert!(missing.is_template_not_found());
        assert!(!invalid.is_template_not_found());
    }
}
