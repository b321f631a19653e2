use std::collections::HashSet;

use crate::domain::{
    entities::{
        common::RelativePath,
        descriptor::{self, Extra, StubId, TemplateDescriptor},
        request::GenerationRequest,
    },
    error::DomainError,
    resolver::{resolve_import_path, short_class_name},
    substitution::Substitutions,
    value_objects::{PatternKind, Role},
};

/// Every file one request will produce, in emission order.
///
/// This is the output of planning, before any stub is read. It contains no
/// I/O, only data.
#[derive(Debug, Clone)]
pub struct EmitPlan {
    pub(crate) kind: PatternKind,
    pub(crate) files: Vec<PlannedFile>,
}

/// One file of an [`EmitPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub role: Role,
    /// Summary label, e.g. `Product`.
    pub label: &'static str,
    pub stub: StubId,
    /// Human name of the stub for error messages.
    pub stub_description: String,
    pub output_path: RelativePath,
    pub substitutions: Substitutions,
}

impl EmitPlan {
    /// Expand a request against the pattern's descriptor rows.
    pub fn for_request(request: &GenerationRequest) -> Result<Self, DomainError> {
        let mut files = Vec::new();

        for row in descriptor::descriptors(request.kind()) {
            match row.role {
                Role::Interface | Role::Primary => {
                    files.push(planned(row, request.primary_name(), request)?);
                }
                Role::Satellite => {
                    for name in request.satellite_names() {
                        files.push(planned(row, name, request)?);
                    }
                }
            }
        }

        Ok(Self {
            kind: request.kind(),
            files,
        })
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn satellite_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.role == Role::Satellite)
            .count()
    }

    /// No two files may share an output path.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.output_path.as_str()) {
                return Err(DomainError::DuplicateOutput {
                    path: file.output_path.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn planned(
    row: &TemplateDescriptor,
    stem: &str,
    request: &GenerationRequest,
) -> Result<PlannedFile, DomainError> {
    let mut substitutions = Substitutions::new()
        .with("namespace", request.namespace())
        .with("class", stem);

    match row.extra {
        Extra::None => {}
        Extra::Related(token) => substitutions.insert(token, request.primary_name()),
        Extra::Adaptee => {
            let adaptee = request.adaptee();
            substitutions.insert("adaptee", adaptee);
            substitutions.insert("adapteeClass", short_class_name(adaptee));
            substitutions.insert("adapteeImport", resolve_import_path(adaptee));
        }
        Extra::ProductCases => {
            substitutions.insert("product_cases", product_cases(request.satellite_names()));
        }
    }

    Ok(PlannedFile {
        role: row.role,
        label: row.label,
        stub: row.stub_id(),
        stub_description: row.describe(),
        output_path: RelativePath::try_new(row.output_path(stem))?,
        substitutions,
    })
}

/// `switch` arms for the factory's `create` method, one per product.
pub fn product_cases(products: &[String]) -> String {
    products
        .iter()
        .map(|p| format!("            case '{p}':\n                return new {p}();\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(kind: PatternKind, name: &str, satellites: &[&str]) -> EmitPlan {
        let request = GenerationRequest::builder(kind, name)
            .satellites(satellites.iter().copied())
            .build()
            .unwrap();
        EmitPlan::for_request(&request).unwrap()
    }

    fn paths(plan: &EmitPlan) -> Vec<&str> {
        plan.files().iter().map(|f| f.output_path.as_str()).collect()
    }

    #[test]
    fn adapter_always_two_files() {
        let p = plan(PatternKind::Adapter, "Payment", &["Ignored", "Too"]);
        assert_eq!(
            paths(&p),
            [
                "app/Patterns/Adapter/PaymentInterface.php",
                "app/Patterns/Adapter/Payment.php"
            ]
        );
    }

    #[test]
    fn n_satellites_give_n_plus_two_files() {
        for kind in [
            PatternKind::Decorator,
            PatternKind::Factory,
            PatternKind::Observer,
            PatternKind::Strategy,
        ] {
            for n in 0..4 {
                let names: Vec<String> = (0..n).map(|i| format!("Sat{i}")).collect();
                let refs: Vec<&str> = names.iter().map(String::as_str).collect();
                let p = plan(kind, "Main", &refs);
                assert_eq!(p.file_count(), n + 2, "{kind} with {n}");
                assert_eq!(p.satellite_count(), n);
            }
        }
    }

    #[test]
    fn satellites_get_the_related_name() {
        let p = plan(PatternKind::Strategy, "Sort", &["QuickSort"]);
        let concrete = &p.files()[2];
        assert_eq!(concrete.substitutions.get("class"), Some("QuickSort"));
        assert_eq!(concrete.substitutions.get("interface"), Some("Sort"));
        assert_eq!(concrete.output_path.as_str(), "app/Patterns/Strategy/QuickSort.php");
    }

    #[test]
    fn adapter_primary_carries_resolved_import() {
        let request = GenerationRequest::builder(PatternKind::Adapter, "Billing")
            .adaptee("StripeService")
            .build()
            .unwrap();
        let p = EmitPlan::for_request(&request).unwrap();
        let primary = &p.files()[1];
        assert_eq!(
            primary.substitutions.get("adapteeImport"),
            Some("App\\Services\\StripeService")
        );
        assert_eq!(primary.substitutions.get("adapteeClass"), Some("StripeService"));
        assert!(p.files()[0].substitutions.get("adaptee").is_none());
    }

    #[test]
    fn factory_cases_in_supplied_order() {
        let p = plan(PatternKind::Factory, "Vehicle", &["Car", "Bike"]);
        let cases = p.files()[1].substitutions.get("product_cases").unwrap();
        assert_eq!(
            cases,
            "            case 'Car':\n                return new Car();\n            \
             case 'Bike':\n                return new Bike();\n"
        );
    }

    #[test]
    fn factory_without_products_has_empty_cases() {
        let p = plan(PatternKind::Factory, "Vehicle", &[]);
        assert_eq!(p.files()[1].substitutions.get("product_cases"), Some(""));
    }

    #[test]
    fn duplicate_outputs_are_rejected() {
        let p = plan(PatternKind::Factory, "Vehicle", &["Car", "Car"]);
        assert!(matches!(
            p.validate(),
            Err(DomainError::DuplicateOutput { path }) if path == "app/Patterns/Factory/Car.php"
        ));

        // A decorator named like the generated base class collides too.
        let p = plan(PatternKind::Decorator, "Text", &["TextComponent"]);
        assert!(p.validate().is_err());
    }
}
