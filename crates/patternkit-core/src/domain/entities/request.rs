//! The `GenerationRequest` aggregate and its builder.
//!
//! A request is the validated description of one invocation: which pattern,
//! which names, which namespace. Once a `GenerationRequest` exists every name
//! in it is a usable PHP identifier.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use crate::domain::{error::DomainError, validation::DomainValidator, value_objects::PatternKind};

/// Adaptee used when the adapter command is given none.
pub const DEFAULT_ADAPTEE: &str = "Adaptee";

/// One validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    kind: PatternKind,
    primary_name: String,
    satellite_names: Vec<String>,
    namespace: String,
    adaptee: String,
}

impl GenerationRequest {
    /// Start building a request for `kind` with the given primary name.
    pub fn builder(kind: PatternKind, primary_name: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder {
            kind,
            primary_name: primary_name.into(),
            satellite_names: Vec::new(),
            namespace: None,
            adaptee: None,
        }
    }

    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn primary_name(&self) -> &str {
        &self.primary_name
    }

    /// Satellite names in the order supplied. Always empty for adapters.
    pub fn satellite_names(&self) -> &[String] {
        &self.satellite_names
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The class being adapted. Only meaningful for [`PatternKind::Adapter`].
    pub fn adaptee(&self) -> &str {
        &self.adaptee
    }

    /// Re-check every name. Called automatically by the builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_class_name(&self.primary_name)?;
        for name in &self.satellite_names {
            DomainValidator::validate_class_name(name)?;
        }
        DomainValidator::validate_namespace(&self.namespace)?;
        DomainValidator::validate_adaptee(&self.adaptee)?;
        Ok(())
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} in {}", self.kind, self.primary_name, self.namespace)?;
        if !self.satellite_names.is_empty() {
            write!(f, " [{}]", self.satellite_names.join(", "))?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`GenerationRequest`]; validation runs in [`Self::build`].
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    kind: PatternKind,
    primary_name: String,
    satellite_names: Vec<String>,
    namespace: Option<String>,
    adaptee: Option<String>,
}

impl GenerationRequestBuilder {
    /// Satellite names (decorators, products, observers, strategies).
    /// Ignored for adapters.
    pub fn satellites<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.satellite_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Override the pattern's conventional namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Class to adapt. Ignored for every pattern except the adapter.
    pub fn adaptee(mut self, adaptee: impl Into<String>) -> Self {
        self.adaptee = Some(adaptee.into());
        self
    }

    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let satellite_names = if self.kind.has_satellites() {
            self.satellite_names
        } else {
            Vec::new()
        };

        let request = GenerationRequest {
            kind: self.kind,
            primary_name: self.primary_name,
            satellite_names,
            namespace: self
                .namespace
                .unwrap_or_else(|| self.kind.default_namespace()),
            adaptee: self.adaptee.unwrap_or_else(|| DEFAULT_ADAPTEE.to_string()),
        };

        request.validate()?;
        Ok(request)
    }
}
