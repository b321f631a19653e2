// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside the application error)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: String },

    #[error("Invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("Two generated files would be written to {path}")]
    DuplicateOutput { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Unresolved placeholders in '{stub}': {}", tokens.join(", "))]
    UnresolvedPlaceholders { stub: String, tokens: Vec<String> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidClassName { name, .. } => vec![
                format!("'{}' cannot be used as a PHP class name", name),
                "Use letters, digits and underscores, starting with a letter".into(),
                "Examples: PaymentGateway, Car, EmailObserver".into(),
            ],
            Self::InvalidNamespace { .. } => vec![
                "Separate namespace segments with a single backslash".into(),
                "Quote the value in your shell: --namespace 'App\\Patterns\\Factory'".into(),
            ],
            Self::DuplicateOutput { path } => vec![
                format!("More than one file maps to {}", path),
                "Remove repeated names from the argument list".into(),
                "Satellite names must differ from the generated interface and primary class".into(),
            ],
            Self::UnknownPattern(_) => vec![
                "Supported patterns: adapter, decorator, factory, observer, strategy".into(),
            ],
            Self::UnresolvedPlaceholders { .. } => vec![
                "The stub references a placeholder this pattern does not supply".into(),
                "Fix the stub, or drop --strict to leave unknown placeholders as-is".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidClassName { .. }
            | Self::InvalidNamespace { .. }
            | Self::DuplicateOutput { .. }
            | Self::UnknownPattern(_)
            | Self::UnresolvedPlaceholders { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
