//! Import-path guessing for adaptee classes.
//!
//! A heuristic, not a lookup: nothing here checks that the guessed class
//! exists in the target application.

use crate::domain::validation::NAMESPACE_SEPARATOR;

/// Framework classes whose location is known up front.
const KNOWN_CLASSES: &[(&str, &str)] = &[("User", "App\\Models\\User")];

/// Suffix heuristics, checked in order.
const SUFFIX_NAMESPACES: &[(&str, &str)] = &[
    ("Service", "App\\Services"),
    ("Repository", "App\\Repositories"),
];

/// Fallback for names no rule claims.
const DEFAULT_NAMESPACE: &str = "App\\Models";

/// Guess the fully-qualified import path for `bare_name`.
///
/// First match wins: qualified names pass through, then the known-class
/// table, then the suffix rules, then the models namespace.
pub fn resolve_import_path(bare_name: &str) -> String {
    if bare_name.contains(NAMESPACE_SEPARATOR) {
        return bare_name.to_string();
    }

    if let Some((_, path)) = KNOWN_CLASSES.iter().find(|(name, _)| *name == bare_name) {
        return (*path).to_string();
    }

    let namespace = SUFFIX_NAMESPACES
        .iter()
        .find(|(suffix, _)| bare_name.ends_with(suffix))
        .map_or(DEFAULT_NAMESPACE, |(_, ns)| ns);

    format!("{namespace}{NAMESPACE_SEPARATOR}{bare_name}")
}

/// Last segment of a possibly-qualified class name.
pub fn short_class_name(name: &str) -> &str {
    name.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(name)
}
