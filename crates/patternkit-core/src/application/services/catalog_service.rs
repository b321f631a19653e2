//! Catalog Service - what patterns exist and which stubs back them.
//!
//! Read-only queries against the active template store, used by `list`.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{PatternKind, Role, StubId, all_stub_ids, descriptors},
    error::PatternResult,
};

/// One pattern and the stubs it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternInfo {
    pub pattern: PatternKind,
    pub namespace: String,
    /// Noun for the optional extra names, empty for `adapter`.
    #[serde(skip_serializing_if = "str::is_empty")]
    pub satellites: &'static str,
    pub stubs: Vec<StubInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubInfo {
    pub id: StubId,
    pub role: Role,
    pub label: &'static str,
    pub available: bool,
    pub location: String,
}

impl PatternInfo {
    /// Every stub is present in the store.
    pub fn is_ready(&self) -> bool {
        self.stubs.iter().all(|s| s.available)
    }
}

/// Service for catalog queries.
pub struct CatalogService {
    store: Box<dyn TemplateStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// All five patterns in a fixed order.
    #[instrument(skip(self))]
    pub fn patterns(&self) -> Vec<PatternInfo> {
        PatternKind::ALL
            .iter()
            .map(|&kind| self.describe(kind))
            .collect()
    }

    pub fn describe(&self, kind: PatternKind) -> PatternInfo {
        let stubs = descriptors(kind)
            .iter()
            .map(|row| {
                let id = row.stub_id();
                StubInfo {
                    available: self.store.exists(&id),
                    location: self.store.locate(&id),
                    role: row.role,
                    label: row.label,
                    id,
                }
            })
            .collect();

        PatternInfo {
            pattern: kind,
            namespace: kind.default_namespace(),
            satellites: kind.satellite_noun(),
            stubs,
        }
    }

    /// Stubs in the store that no pattern uses.
    pub fn unused_stubs(&self) -> PatternResult<Vec<StubId>> {
        let known = all_stub_ids();
        let extra: Vec<StubId> = self
            .store
            .list()?
            .into_iter()
            .filter(|id| !known.contains(id))
            .collect();
        debug!(count = extra.len(), "Unused stubs");
        Ok(extra)
    }
}
