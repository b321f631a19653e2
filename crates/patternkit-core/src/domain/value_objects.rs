//! Domain value objects: PatternKind and Role.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Per-pattern data (stub shapes, file naming, labels) lives in the
//! descriptor table in `entities/descriptor.rs`. This file only defines the
//! types, their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` / `directory` / `hint_examples` arms here
//! 3. Add the descriptor rows in `entities/descriptor.rs`
//! 4. Ship the stubs in `patternkit-adapters/stubs/<kind>/`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PatternKind ──────────────────────────────────────────────────────────────

/// One of the supported generation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Adapter,
    Decorator,
    Factory,
    Observer,
    Strategy,
}

impl PatternKind {
    /// Every kind, in the order the CLI lists them.
    pub const ALL: [PatternKind; 5] = [
        Self::Adapter,
        Self::Decorator,
        Self::Factory,
        Self::Observer,
        Self::Strategy,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adapter => "adapter",
            Self::Decorator => "decorator",
            Self::Factory => "factory",
            Self::Observer => "observer",
            Self::Strategy => "strategy",
        }
    }

    /// Directory segment under `app/Patterns/`, and the display name used in
    /// summaries.
    pub const fn directory(&self) -> &'static str {
        match self {
            Self::Adapter => "Adapter",
            Self::Decorator => "Decorator",
            Self::Factory => "Factory",
            Self::Observer => "Observer",
            Self::Strategy => "Strategy",
        }
    }

    /// Conventional namespace used when no override is given.
    pub fn default_namespace(&self) -> String {
        format!("App\\Patterns\\{}", self.directory())
    }

    /// Whether the pattern takes a list of satellite names.
    pub const fn has_satellites(&self) -> bool {
        !matches!(self, Self::Adapter)
    }

    /// Example satellite names suggested when none were supplied.
    pub const fn hint_examples(&self) -> &'static [&'static str] {
        match self {
            Self::Adapter => &[],
            Self::Decorator => &["LoggingDecorator", "CachingDecorator"],
            Self::Factory => &["Car", "Bike"],
            Self::Observer => &["EmailObserver", "LogObserver"],
            Self::Strategy => &["ConcreteStrategyName"],
        }
    }

    /// What the satellites of this pattern are called, plural.
    pub const fn satellite_noun(&self) -> &'static str {
        match self {
            Self::Adapter => "",
            Self::Decorator => "decorators",
            Self::Factory => "products",
            Self::Observer => "observers",
            Self::Strategy => "concrete strategies",
        }
    }

    /// Follow-up command suggested when `primary` was generated without
    /// satellites. `None` for patterns that take none.
    pub fn follow_up_hint(&self, primary: &str) -> Option<String> {
        if !self.has_satellites() {
            return None;
        }
        Some(format!(
            "Tip: Add {} with: patternkit {} {} {}",
            self.satellite_noun(),
            self.as_str(),
            primary,
            self.hint_examples().join(" ")
        ))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adapter" => Ok(Self::Adapter),
            "decorator" => Ok(Self::Decorator),
            "factory" => Ok(Self::Factory),
            "observer" => Ok(Self::Observer),
            "strategy" => Ok(Self::Strategy),
            other => Err(DomainError::UnknownPattern(other.to_string())),
        }
    }
}

// ── Role ─────────────────────────────────────────────────────────────────────

/// The part a generated file plays in its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interface,
    Primary,
    Satellite,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Primary => "primary",
            Self::Satellite => "satellite",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Factory".parse::<PatternKind>().unwrap(), PatternKind::Factory);
        assert!(matches!(
            "singleton".parse::<PatternKind>(),
            Err(DomainError::UnknownPattern(name)) if name == "singleton"
        ));
    }

    #[test]
    fn default_namespaces() {
        assert_eq!(PatternKind::Observer.default_namespace(), "App\\Patterns\\Observer");
    }

    #[test]
    fn hints() {
        assert_eq!(PatternKind::Adapter.follow_up_hint("Payment"), None);
        assert_eq!(
            PatternKind::Factory.follow_up_hint("Vehicle").as_deref(),
            Some("Tip: Add products with: patternkit factory Vehicle Car Bike")
        );
    }
}
