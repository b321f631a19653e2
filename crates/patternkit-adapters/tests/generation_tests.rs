//! End-to-end generation against the real adapters.

use std::fs;
use std::path::Path;

use patternkit_adapters::{
    BuiltinStore, DirectoryStore, LocalFilesystem, MemoryFilesystem, MemorySink, ProjectRoot,
    SimpleRenderer,
};
use patternkit_core::{
    application::{FileEmitter, MessageLevel, StubRenderer, ports::TemplateStore},
    prelude::*,
};

fn generator(store: impl TemplateStore + 'static, root: &Path) -> GeneratorService {
    GeneratorService::new(
        StubRenderer::new(Box::new(store), Box::new(SimpleRenderer::new())),
        FileEmitter::new(Box::new(LocalFilesystem::new())),
        Box::new(ProjectRoot::new(root)),
    )
}

fn request(kind: PatternKind, name: &str, satellites: &[&str]) -> GenerationRequest {
    GenerationRequest::builder(kind, name)
        .satellites(satellites.iter().copied())
        .build()
        .unwrap()
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn adapter_produces_two_complete_files() {
    let dir = tempfile::tempdir().unwrap();
    let sink = MemorySink::new();
    let req = GenerationRequest::builder(PatternKind::Adapter, "PaymentGateway")
        .adaptee("StripeService")
        .build()
        .unwrap();

    let report = generator(BuiltinStore::new(), dir.path())
        .generate(&req, GenerateOptions::default(), &sink)
        .unwrap();

    assert_eq!(report.file_count(), 2);
    let class = read(dir.path(), "app/Patterns/Adapter/PaymentGateway.php");
    assert!(class.contains("namespace App\\Patterns\\Adapter;"));
    assert!(class.contains("use App\\Services\\StripeService;"));
    assert!(class.contains("protected StripeService $adaptee"));
    assert!(!class.contains("{{"));

    let interface = read(dir.path(), "app/Patterns/Adapter/PaymentGatewayInterface.php");
    assert!(interface.contains("interface PaymentGatewayInterface"));

    assert_eq!(
        sink.at(MessageLevel::Line),
        [
            "   - Interface: app/Patterns/Adapter/PaymentGatewayInterface.php",
            "   - Adapter: app/Patterns/Adapter/PaymentGateway.php",
        ]
    );
}

#[test]
fn every_pattern_renders_without_leftover_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let service = generator(BuiltinStore::new(), dir.path());

    for (kind, name, extra) in [
        (PatternKind::Decorator, "Coffee", ["Milk", "Sugar"]),
        (PatternKind::Factory, "Vehicle", ["Car", "Bike"]),
        (PatternKind::Observer, "Order", ["EmailObserver", "SmsObserver"]),
        (PatternKind::Strategy, "Shipping", ["Fedex", "Ups"]),
    ] {
        let report = service
            .generate(
                &request(kind, name, &extra),
                GenerateOptions::default(),
                &MemorySink::new(),
            )
            .unwrap();
        assert_eq!(report.file_count(), 4, "{kind}");
        for file in &report.files {
            assert!(file.unresolved.is_empty(), "{}", file.path);
            assert!(!read(dir.path(), file.path.as_str()).contains("{{"));
        }
    }
}

#[test]
fn factory_cases_follow_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    generator(BuiltinStore::new(), dir.path())
        .generate(
            &request(PatternKind::Factory, "Vehicle", &["Car", "Bike"]),
            GenerateOptions::default(),
            &MemorySink::new(),
        )
        .unwrap();

    let factory = read(dir.path(), "app/Patterns/Factory/VehicleFactory.php");
    assert!(factory.contains("class VehicleFactory implements VehicleFactoryInterface"));
    assert!(factory.contains(
        "            case 'Car':\n                return new Car();\n            case 'Bike':\n"
    ));
    assert!(factory.find("'Car'").unwrap() < factory.find("'Bike'").unwrap());

    let product = read(dir.path(), "app/Patterns/Factory/Car.php");
    assert!(product.contains("Product created by VehicleFactory."));
}

#[test]
fn no_satellites_gives_two_files_and_a_hint() {
    let dir = tempfile::tempdir().unwrap();
    let sink = MemorySink::new();
    let report = generator(BuiltinStore::new(), dir.path())
        .generate(
            &request(PatternKind::Observer, "Order", &[]),
            GenerateOptions::default(),
            &sink,
        )
        .unwrap();

    assert_eq!(report.file_count(), 2);
    assert_eq!(sink.at(MessageLevel::Comment).len(), 1);
    assert!(sink.at(MessageLevel::Comment)[0].contains("patternkit observer Order"));
}

#[test]
fn running_twice_gives_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let service = generator(BuiltinStore::new(), dir.path());
    let req = request(PatternKind::Strategy, "Sort", &["QuickSort"]);

    service
        .generate(&req, GenerateOptions::default(), &MemorySink::new())
        .unwrap();
    let first = read(dir.path(), "app/Patterns/Strategy/SortContext.php");

    fs::write(dir.path().join("app/Patterns/Strategy/QuickSort.php"), "edited").unwrap();
    service
        .generate(&req, GenerateOptions::default(), &MemorySink::new())
        .unwrap();

    assert_eq!(read(dir.path(), "app/Patterns/Strategy/SortContext.php"), first);
    assert_ne!(read(dir.path(), "app/Patterns/Strategy/QuickSort.php"), "edited");
}

#[test]
fn missing_directory_stub_aborts_before_writing() {
    let stubs = tempfile::tempdir().unwrap();
    for (id, source) in BuiltinStore::entries() {
        if id.as_str() == "factory/factory-product.stub" {
            continue;
        }
        let path = stubs.path().join(id.as_str());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    let app = tempfile::tempdir().unwrap();
    let sink = MemorySink::new();
    let err = generator(DirectoryStore::new(stubs.path()), app.path())
        .generate(
            &request(PatternKind::Factory, "Vehicle", &["Car"]),
            GenerateOptions::default(),
            &sink,
        )
        .unwrap_err();

    assert!(err.is_template_not_found());
    assert!(!app.path().join("app").exists());
    let errors = sink.at(MessageLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Factory product stub not found: "));
    assert!(errors[0].ends_with("factory-product.stub"));
}

#[test]
fn custom_stub_directory_is_used() {
    let stubs = tempfile::tempdir().unwrap();
    for (id, _) in BuiltinStore::entries() {
        let path = stubs.path().join(id.as_str());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "// {{ class }} in {{ namespace }}\n").unwrap();
    }

    let app = tempfile::tempdir().unwrap();
    generator(DirectoryStore::new(stubs.path()), app.path())
        .generate(
            &GenerationRequest::builder(PatternKind::Decorator, "Coffee")
                .namespace("Shop\\Drinks")
                .build()
                .unwrap(),
            GenerateOptions::default(),
            &MemorySink::new(),
        )
        .unwrap();

    assert_eq!(
        read(app.path(), "app/Patterns/Decorator/CoffeeComponent.php"),
        "// Coffee in Shop\\Drinks\n"
    );
}

#[test]
fn dry_run_touches_nothing() {
    let fs_view = MemoryFilesystem::new();
    let service = GeneratorService::new(
        StubRenderer::new(Box::new(BuiltinStore::new()), Box::new(SimpleRenderer::new())),
        FileEmitter::new(Box::new(fs_view.clone())),
        Box::new(ProjectRoot::new("/app")),
    );

    let report = service
        .generate(
            &request(PatternKind::Factory, "Vehicle", &["Car"]),
            GenerateOptions { dry_run: true },
            &MemorySink::new(),
        )
        .unwrap();

    assert_eq!(report.file_count(), 3);
    assert_eq!(fs_view.file_count(), 0);
}

#[test]
fn strict_renderer_rejects_leftovers() {
    let stubs = tempfile::tempdir().unwrap();
    for (id, source) in BuiltinStore::entries() {
        let path = stubs.path().join(id.as_str());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("{source}// {{{{ author }}}}\n")).unwrap();
    }

    let app = tempfile::tempdir().unwrap();
    let service = GeneratorService::new(
        StubRenderer::new(
            Box::new(DirectoryStore::new(stubs.path())),
            Box::new(SimpleRenderer::strict()),
        ),
        FileEmitter::new(Box::new(LocalFilesystem::new())),
        Box::new(ProjectRoot::new(app.path())),
    );

    let err = service
        .generate(
            &request(PatternKind::Strategy, "Sort", &[]),
            GenerateOptions::default(),
            &MemorySink::new(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("author"));
    assert!(!app.path().join("app").exists());
}
