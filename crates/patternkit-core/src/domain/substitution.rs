//! Placeholder substitution for stubs.
//!
//! A placeholder is `{{ name }}`; the spaces inside the braces are optional.
//! Substitution is a single left-to-right pass: replaced values are never
//! scanned again, so a value that itself looks like a placeholder is copied
//! through verbatim. Placeholders without a value are left untouched and
//! reported back to the caller.

use std::collections::BTreeMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Placeholder name → replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming self (builder style).
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.values.insert(token.into(), value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

}

/// Result of substituting one stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    pub content: String,
    /// Placeholder names left in `content`, in first-seen order.
    pub unresolved: Vec<String>,
}

impl RenderedText {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Replace every known placeholder in `source` in one pass.
pub fn substitute(source: &str, substitutions: &Substitutions) -> RenderedText {
    let mut content = String::with_capacity(source.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find(OPEN) {
        content.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some((name, consumed)) = parse_placeholder(after_open) else {
            content.push_str(OPEN);
            rest = after_open;
            continue;
        };

        match substitutions.get(name) {
            Some(value) => content.push_str(value),
            None => {
                content.push_str(&rest[start..start + OPEN.len() + consumed]);
                if !unresolved.iter().any(|u| u == name) {
                    unresolved.push(name.to_string());
                }
            }
        }
        rest = &after_open[consumed..];
    }
    content.push_str(rest);

    RenderedText {
        content,
        unresolved,
    }
}

/// Returns the placeholder name and the byte length up to and including the
/// closing braces, or `None` if the text after `{{` is not a placeholder.
fn parse_placeholder(after_open: &str) -> Option<(&str, usize)> {
    let end = after_open.find(CLOSE)?;
    let name = after_open[..end].trim();
    is_placeholder_name(name).then_some((name, end + CLOSE.len()))
}

fn is_placeholder_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
