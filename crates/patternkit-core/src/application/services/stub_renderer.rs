//! Stub Renderer - load a stub and fill in its placeholders.

use tracing::{debug, instrument};

use crate::{
    application::ports::{TemplateRenderer, TemplateStore},
    domain::{RenderedText, StubId, Substitutions},
    error::PatternResult,
};

/// Loads stubs from a store and renders them.
pub struct StubRenderer {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl StubRenderer {
    pub fn new(store: Box<dyn TemplateStore>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Render one stub. Fails with `TemplateNotFound` if the store lacks it.
    #[instrument(skip(self, substitutions), fields(stub = %id))]
    pub fn render(&self, id: &StubId, substitutions: &Substitutions) -> PatternResult<RenderedText> {
        let stub = self.store.load(id)?;
        let rendered = self.renderer.render(&stub, substitutions)?;
        debug!(
            bytes = rendered.content.len(),
            unresolved = rendered.unresolved.len(),
            "Stub rendered"
        );
        Ok(rendered)
    }

    pub fn exists(&self, id: &StubId) -> bool {
        self.store.exists(id)
    }

    /// Where the active store keeps `id`.
    pub fn locate(&self, id: &StubId) -> String {
        self.store.locate(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockTemplateRenderer, MockTemplateStore, Stub},
    };
    use crate::error::PatternError;

    #[test]
    fn missing_stub_skips_the_renderer() {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|id| {
            Err(ApplicationError::TemplateNotFound {
                stub: id.to_string(),
                location: format!("/stubs/{id}"),
            }
            .into())
        });
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let service = StubRenderer::new(Box::new(store), Box::new(renderer));
        let err = service
            .render(&StubId::new("factory/factory-product.stub"), &Substitutions::new())
            .unwrap_err();

        assert!(matches!(
            err,
            PatternError::Application(ApplicationError::TemplateNotFound { ref location, .. })
                if location == "/stubs/factory/factory-product.stub"
        ));
    }

    #[test]
    fn loaded_stub_is_passed_to_the_renderer() {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|id| {
            Ok(Stub {
                id: id.clone(),
                source: "class {{ class }}".into(),
            })
        });
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|stub, subs| stub.source == "class {{ class }}" && subs.get("class") == Some("Car"))
            .times(1)
            .returning(|_, _| {
                Ok(RenderedText {
                    content: "class Car".into(),
                    unresolved: vec![],
                })
            });

        let service = StubRenderer::new(Box::new(store), Box::new(renderer));
        let out = service
            .render(
                &StubId::new("factory/factory-product.stub"),
                &Substitutions::new().with("class", "Car"),
            )
            .unwrap();
        assert_eq!(out.content, "class Car");
    }
}
