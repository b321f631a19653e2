//! Simple placeholder substitution renderer.

use patternkit_core::{
    application::ports::{Stub, TemplateRenderer},
    domain::{DomainError, RenderedText, Substitutions, substitute},
    error::PatternResult,
};
use tracing::{instrument, warn};

/// Renderer replacing `{{ name }}` placeholders in one pass.
///
/// Unknown placeholders are left in place and reported on the result;
/// a strict renderer refuses them instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer {
    strict: bool,
}

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that fails on unresolved placeholders.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(stub = %stub.id))]
    fn render(&self, stub: &Stub, substitutions: &Substitutions) -> PatternResult<RenderedText> {
        let rendered = substitute(&stub.source, substitutions);

        if !rendered.is_complete() {
            if self.strict {
                return Err(DomainError::UnresolvedPlaceholders {
                    stub: stub.id.to_string(),
                    tokens: rendered.unresolved,
                }
                .into());
            }
            warn!(tokens = ?rendered.unresolved, "Placeholders left unresolved");
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use patternkit_core::{domain::StubId, error::PatternError};

    use super::*;

    fn stub(source: &str) -> Stub {
        Stub {
            id: StubId::new("factory/factory-product.stub"),
            source: source.into(),
        }
    }

    #[test]
    fn replaces_known_tokens() {
        let subs = Substitutions::new()
            .with("namespace", "App\\Patterns\\Factory")
            .with("class", "Car");
        let out = SimpleRenderer::new()
            .render(&stub("namespace {{ namespace }};\nclass {{class}}"), &subs)
            .unwrap();
        assert_eq!(out.content, "namespace App\\Patterns\\Factory;\nclass Car");
        assert!(out.is_complete());
    }

    #[test]
    fn lenient_keeps_unknown_tokens() {
        let out = SimpleRenderer::new()
            .render(&stub("{{ class }} {{ mystery }}"), &Substitutions::new().with("class", "Car"))
            .unwrap();
        assert_eq!(out.content, "Car {{ mystery }}");
        assert_eq!(out.unresolved, ["mystery"]);
    }

    #[test]
    fn strict_rejects_unknown_tokens() {
        let err = SimpleRenderer::strict()
            .render(&stub("{{ mystery }}"), &Substitutions::new())
            .unwrap_err();
        assert!(matches!(
            err,
            PatternError::Domain(DomainError::UnresolvedPlaceholders { ref tokens, .. })
                if tokens == &["mystery"]
        ));
    }
}
