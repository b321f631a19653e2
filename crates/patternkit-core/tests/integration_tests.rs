//! Integration tests for patternkit-core, driving the public API with
//! hand-written in-memory ports.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use patternkit_core::{
    application::{
        ApplicationError, FileEmitter, MessageLevel, StubRenderer,
        ports::{Filesystem, MessageSink, PathResolver, Stub, TemplateRenderer, TemplateStore},
    },
    domain::{RelativePath, RenderedText, all_stub_ids, substitute},
    prelude::*,
};

#[derive(Clone, Default)]
struct Disk(Arc<Mutex<BTreeMap<PathBuf, String>>>);

impl Filesystem for Disk {
    fn create_dir_all(&self, _path: &Path) -> PatternResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> PatternResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }
}

struct Stubs(Vec<StubId>);

impl Stubs {
    fn all() -> Self {
        Self(all_stub_ids())
    }
}

impl TemplateStore for Stubs {
    fn exists(&self, id: &StubId) -> bool {
        self.0.contains(id)
    }

    fn load(&self, id: &StubId) -> PatternResult<Stub> {
        if !self.exists(id) {
            return Err(ApplicationError::TemplateNotFound {
                stub: id.to_string(),
                location: self.locate(id),
            }
            .into());
        }
        Ok(Stub {
            id: id.clone(),
            source: "namespace {{ namespace }};\nclass {{class}} {}\n{{ product_cases }}".into(),
        })
    }

    fn locate(&self, id: &StubId) -> String {
        format!("memory://{id}")
    }

    fn list(&self) -> PatternResult<Vec<StubId>> {
        Ok(self.0.clone())
    }
}

struct Substituter;

impl TemplateRenderer for Substituter {
    fn render(&self, stub: &Stub, substitutions: &Substitutions) -> PatternResult<RenderedText> {
        Ok(substitute(&stub.source, substitutions))
    }
}

struct Root;

impl PathResolver for Root {
    fn base_path(&self, relative: &RelativePath) -> PathBuf {
        Path::new("/app").join(relative.as_path())
    }
}

#[derive(Default)]
struct Lines(Mutex<Vec<(MessageLevel, String)>>);

impl MessageSink for Lines {
    fn emit(&self, level: MessageLevel, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}

fn generator(store: Stubs, disk: Disk) -> GeneratorService {
    GeneratorService::new(
        StubRenderer::new(Box::new(store), Box::new(Substituter)),
        FileEmitter::new(Box::new(disk)),
        Box::new(Root),
    )
}

#[test]
fn test_factory_workflow() {
    let disk = Disk::default();
    let request = GenerationRequest::builder(PatternKind::Factory, "Vehicle")
        .satellites(["Car", "Bike"])
        .build()
        .unwrap();

    let sink = Lines::default();
    let report = generator(Stubs::all(), disk.clone())
        .generate(&request, GenerateOptions::default(), &sink)
        .unwrap();

    assert_eq!(report.file_count(), 4);
    let files = disk.0.lock().unwrap();
    let factory = &files[Path::new("/app/app/Patterns/Factory/VehicleFactory.php")];
    assert!(factory.starts_with("namespace App\\Patterns\\Factory;\nclass Vehicle {}"));
    assert!(factory.find("case 'Car'").unwrap() < factory.find("case 'Bike'").unwrap());

    // Files other than the factory leave product_cases unresolved.
    let car = &report.files[2];
    assert_eq!(car.unresolved, ["product_cases"]);
}

#[test]
fn test_custom_namespace_flows_into_every_file() {
    let disk = Disk::default();
    let request = GenerationRequest::builder(PatternKind::Strategy, "Shipping")
        .satellites(["Fedex"])
        .namespace("Acme\\Shipping")
        .build()
        .unwrap();

    generator(Stubs::all(), disk.clone())
        .generate(&request, GenerateOptions::default(), &Lines::default())
        .unwrap();

    let files = disk.0.lock().unwrap();
    assert_eq!(files.len(), 3);
    assert!(
        files
            .values()
            .all(|c| c.starts_with("namespace Acme\\Shipping;"))
    );
}

#[test]
fn test_missing_stub_leaves_disk_untouched() {
    let disk = Disk::default();
    let store = Stubs(
        all_stub_ids()
            .into_iter()
            .filter(|id| id.as_str() != "decorator/decorator-base.stub")
            .collect(),
    );
    let request = GenerationRequest::builder(PatternKind::Decorator, "Coffee")
        .build()
        .unwrap();

    let sink = Lines::default();
    let err = generator(store, disk.clone())
        .generate(&request, GenerateOptions::default(), &sink)
        .unwrap_err();

    assert!(err.is_template_not_found());
    assert!(disk.0.lock().unwrap().is_empty());
    let errors: Vec<_> = sink
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == MessageLevel::Error)
        .map(|(_, m)| m.clone())
        .collect();
    assert_eq!(
        errors,
        ["Decorator base stub not found: memory://decorator/decorator-base.stub"]
    );
}

#[test]
fn test_catalog_reports_every_pattern() {
    let catalog = CatalogService::new(Box::new(Stubs::all()));
    let patterns = catalog.patterns();
    assert_eq!(patterns.len(), 5);
    assert!(patterns.iter().all(|p| p.is_ready()));
    assert!(catalog.unused_stubs().unwrap().is_empty());
}

#[test]
fn test_invalid_name_is_rejected() {
    let err = GenerationRequest::builder(PatternKind::Observer, "1Order")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("1Order"));
}
