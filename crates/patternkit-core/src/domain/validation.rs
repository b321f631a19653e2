use crate::domain::{entities::EmitPlan, error::DomainError};

/// Namespace separator in generated PHP code.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A bare PHP class name: a letter or `_`, then letters, digits or `_`.
    pub fn validate_class_name(name: &str) -> Result<(), DomainError> {
        identifier_problem(name).map_or(Ok(()), |reason| {
            Err(DomainError::InvalidClassName {
                name: name.into(),
                reason: reason.into(),
            })
        })
    }

    /// One or more class-name segments joined by single backslashes.
    pub fn validate_namespace(namespace: &str) -> Result<(), DomainError> {
        if namespace.is_empty() {
            return Err(DomainError::InvalidNamespace {
                namespace: namespace.into(),
                reason: "namespace cannot be empty".into(),
            });
        }

        for segment in namespace.split(NAMESPACE_SEPARATOR) {
            if segment.is_empty() {
                return Err(DomainError::InvalidNamespace {
                    namespace: namespace.into(),
                    reason: "leading, trailing or doubled separator".into(),
                });
            }
            if let Some(reason) = identifier_problem(segment) {
                return Err(DomainError::InvalidNamespace {
                    namespace: namespace.into(),
                    reason: format!("segment '{segment}': {reason}"),
                });
            }
        }

        Ok(())
    }

    /// A class name, or a qualified name with an optional leading separator.
    pub fn validate_adaptee(adaptee: &str) -> Result<(), DomainError> {
        let unrooted = adaptee
            .strip_prefix(NAMESPACE_SEPARATOR)
            .unwrap_or(adaptee);

        let checked = if unrooted.contains(NAMESPACE_SEPARATOR) {
            Self::validate_namespace(unrooted)
        } else {
            Self::validate_class_name(unrooted)
        };

        checked.map_err(|e| match e {
            DomainError::InvalidNamespace { reason, .. }
            | DomainError::InvalidClassName { reason, .. } => DomainError::InvalidClassName {
                name: adaptee.into(),
                reason,
            },
            other => other,
        })
    }

    pub fn validate_plan(plan: &EmitPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}

fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if !(first.is_alphabetic() || first == '_') {
        return Some("must start with a letter or underscore");
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("may only contain letters, digits and underscores");
    }
    None
}
