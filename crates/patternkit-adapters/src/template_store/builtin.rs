//! Stubs compiled into the binary.

use patternkit_core::{
    application::{
        ApplicationError,
        error::BUILTIN_PREFIX,
        ports::{Stub, TemplateStore},
    },
    domain::StubId,
    error::PatternResult,
};

macro_rules! stub {
    ($path:literal) => {
        ($path, include_str!(concat!("../../stubs/", $path)))
    };
}

/// Every stub that ships with patternkit, keyed by id.
const BUILTIN: [(&str, &str); 14] = [
    stub!("adapter/adapter-interface.stub"),
    stub!("adapter/adapter-class.stub"),
    stub!("decorator/decorator-interface.stub"),
    stub!("decorator/decorator-base.stub"),
    stub!("decorator/decorator-decorator.stub"),
    stub!("factory/factory-interface.stub"),
    stub!("factory/factory-factory.stub"),
    stub!("factory/factory-product.stub"),
    stub!("observer/observer-interface.stub"),
    stub!("observer/observer-subject.stub"),
    stub!("observer/observer-concrete.stub"),
    stub!("strategy/strategy-interface.stub"),
    stub!("strategy/strategy-context.stub"),
    stub!("strategy/strategy-concrete.stub"),
];

/// Read-only store over the built-in stubs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }

    fn source(id: &StubId) -> Option<&'static str> {
        BUILTIN
            .iter()
            .find(|(path, _)| *path == id.as_str())
            .map(|(_, source)| *source)
    }

    /// Every built-in stub with its source.
    pub fn entries() -> impl Iterator<Item = (StubId, &'static str)> {
        BUILTIN
            .iter()
            .map(|(path, source)| (StubId::new(*path), *source))
    }
}

impl TemplateStore for BuiltinStore {
    fn exists(&self, id: &StubId) -> bool {
        Self::source(id).is_some()
    }

    fn load(&self, id: &StubId) -> PatternResult<Stub> {
        let source = Self::source(id).ok_or_else(|| ApplicationError::TemplateNotFound {
            stub: id.to_string(),
            location: self.locate(id),
        })?;
        Ok(Stub {
            id: id.clone(),
            source: source.to_string(),
        })
    }

    fn locate(&self, id: &StubId) -> String {
        format!("{BUILTIN_PREFIX}{id}")
    }

    fn list(&self) -> PatternResult<Vec<StubId>> {
        let mut ids: Vec<StubId> = BUILTIN.iter().map(|(p, _)| StubId::new(*p)).collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use patternkit_core::domain::all_stub_ids;

    use super::*;

    #[test]
    fn holds_every_stub_a_pattern_needs() {
        let store = BuiltinStore::new();
        for id in all_stub_ids() {
            assert!(store.exists(&id), "missing {id}");
            assert!(store.load(&id).unwrap().source.starts_with("<?php"));
        }
        assert_eq!(store.list().unwrap().len(), all_stub_ids().len());
    }

    #[test]
    fn unknown_stub_is_not_found() {
        let err = BuiltinStore::new()
            .load(&StubId::new("singleton/singleton-class.stub"))
            .unwrap_err();
        assert!(err.is_template_not_found());
        assert!(err.to_string().contains("builtin:singleton/singleton-class.stub"));
    }

    #[test]
    fn factory_stub_has_product_cases_slot() {
        let stub = BuiltinStore::new()
            .load(&StubId::new("factory/factory-factory.stub"))
            .unwrap();
        assert!(stub.source.contains("{{ product_cases }}"));
    }
}
