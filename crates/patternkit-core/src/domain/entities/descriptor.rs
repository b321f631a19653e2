//! Static description of the files each pattern generates.
//!
//! One row per generated-file shape. The emit plan walks these rows in
//! order; nothing else in the crate knows which files a pattern produces.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{PatternKind, Role};

/// Extension of every generated file.
pub const OUTPUT_EXTENSION: &str = "php";

/// Directory (relative to the application root) holding every pattern.
pub const PATTERNS_DIR: &str = "app/Patterns";

/// Identifier of a stub inside a template store: a relative path such as
/// `factory/factory-product.stub`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StubId(String);

impl StubId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pattern-specific placeholders a row adds on top of `namespace`/`class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extra {
    None,
    /// The primary name under the given placeholder (satellites only).
    Related(&'static str),
    /// `adaptee`, `adapteeClass` and `adapteeImport`.
    Adaptee,
    /// `product_cases`, one `case` arm per product.
    ProductCases,
}

/// One generated-file shape of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub kind: PatternKind,
    pub role: Role,
    /// Stub shape, e.g. `product` in `factory/factory-product.stub`.
    pub shape: &'static str,
    /// Appended to the class stem to form the file name.
    pub file_suffix: &'static str,
    /// Summary label, e.g. `Product`.
    pub label: &'static str,
    pub extra: Extra,
}

impl TemplateDescriptor {
    const fn new(
        kind: PatternKind,
        role: Role,
        shape: &'static str,
        file_suffix: &'static str,
        label: &'static str,
        extra: Extra,
    ) -> Self {
        Self {
            kind,
            role,
            shape,
            file_suffix,
            label,
            extra,
        }
    }

    pub fn stub_id(&self) -> StubId {
        StubId::new(format!(
            "{kind}/{kind}-{shape}.stub",
            kind = self.kind.as_str(),
            shape = self.shape
        ))
    }

    /// File name for a class stem, e.g. `VehicleFactory.php`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}{}.{OUTPUT_EXTENSION}", self.file_suffix)
    }

    /// Output path relative to the application root, `/`-separated.
    pub fn output_path(&self, stem: &str) -> String {
        format!(
            "{PATTERNS_DIR}/{}/{}",
            self.kind.directory(),
            self.file_name(stem)
        )
    }

    /// Human description used in error messages, e.g. `Factory product stub`.
    pub fn describe(&self) -> String {
        format!("{} {} stub", self.kind.directory(), self.shape)
    }
}

use Extra::{Adaptee, ProductCases, Related};
use PatternKind::{Adapter, Decorator, Factory, Observer, Strategy};
use Role::{Interface, Primary, Satellite};

const ADAPTER: [TemplateDescriptor; 2] = [
    TemplateDescriptor::new(Adapter, Interface, "interface", "Interface", "Interface", Extra::None),
    TemplateDescriptor::new(Adapter, Primary, "class", "", "Adapter", Adaptee),
];

const DECORATOR: [TemplateDescriptor; 3] = [
    TemplateDescriptor::new(
        Decorator,
        Interface,
        "interface",
        "ComponentInterface",
        "Interface",
        Extra::None,
    ),
    TemplateDescriptor::new(Decorator, Primary, "base", "Component", "Base", Extra::None),
    TemplateDescriptor::new(Decorator, Satellite, "decorator", "", "Decorator", Related("base")),
];

const FACTORY: [TemplateDescriptor; 3] = [
    TemplateDescriptor::new(
        Factory,
        Interface,
        "interface",
        "FactoryInterface",
        "Interface",
        Extra::None,
    ),
    TemplateDescriptor::new(Factory, Primary, "factory", "Factory", "Factory", ProductCases),
    TemplateDescriptor::new(Factory, Satellite, "product", "", "Product", Related("factory")),
];

const OBSERVER: [TemplateDescriptor; 3] = [
    TemplateDescriptor::new(
        Observer,
        Interface,
        "interface",
        "ObserverInterface",
        "Observer Interface",
        Extra::None,
    ),
    TemplateDescriptor::new(Observer, Primary, "subject", "Subject", "Subject", Extra::None),
    TemplateDescriptor::new(Observer, Satellite, "concrete", "", "Observer", Related("subject")),
];

const STRATEGY: [TemplateDescriptor; 3] = [
    TemplateDescriptor::new(
        Strategy,
        Interface,
        "interface",
        "StrategyInterface",
        "Interface",
        Extra::None,
    ),
    TemplateDescriptor::new(Strategy, Primary, "context", "Context", "Context", Extra::None),
    TemplateDescriptor::new(
        Strategy,
        Satellite,
        "concrete",
        "",
        "Strategy",
        Related("interface"),
    ),
];

/// Rows for one pattern, in emission order: interface, primary, satellite.
pub fn descriptors(kind: PatternKind) -> &'static [TemplateDescriptor] {
    match kind {
        Adapter => &ADAPTER,
        Decorator => &DECORATOR,
        Factory => &FACTORY,
        Observer => &OBSERVER,
        Strategy => &STRATEGY,
    }
}

/// Every stub any pattern needs.
pub fn all_stub_ids() -> Vec<StubId> {
    PatternKind::ALL
        .iter()
        .flat_map(|kind| descriptors(*kind))
        .map(TemplateDescriptor::stub_id)
        .collect()
}
