//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use chrono::{DateTime, Utc};

use menagerie::{
    DiagramBuilder, MenagerieError,
    config::{AppConfig, DietTable, OutputConfig},
    export::OutputFormat,
    generate::GenerateError,
    meta::{BaseType, TypeMeta},
    registry::{HierarchyMarker, TypeRegistry},
};

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_generate_custom_registry() {
    let mut registry = TypeRegistry::new();
    registry
        .insert(TypeMeta::structured("Shape", "geometry").abstract_())
        .unwrap()
        .insert(TypeMeta::structured("Circle", "geometry").with_base(BaseType::named("Shape")))
        .unwrap();

    let builder = DiagramBuilder::default();
    let document = builder
        .generate(&registry, &HierarchyMarker::new("geometry"), fixed_time())
        .expect("Failed to generate diagram");

    assert_eq!(document.types().len(), 2);
    assert_eq!(document.types()[0].name(), "Circle");
    assert_eq!(document.types()[1].name(), "Shape");
}

#[test]
fn test_empty_registry_returns_error() {
    let registry = TypeRegistry::new();

    let builder = DiagramBuilder::default();
    let result = builder.generate(&registry, &HierarchyMarker::new("nothing"), fixed_time());

    assert!(matches!(
        result,
        Err(MenagerieError::Generate(GenerateError::EmptyHierarchy(_)))
    ));
}

#[test]
fn test_render_uses_configured_format() {
    let mut registry = TypeRegistry::new();
    registry
        .insert(TypeMeta::enumeration("Color", "paint", ["Red", "Blue"]))
        .unwrap();
    let marker = HierarchyMarker::new("paint");

    let xml_builder = DiagramBuilder::default();
    let document = xml_builder
        .generate(&registry, &marker, fixed_time())
        .unwrap();
    let xml = xml_builder.render(&document).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<Value>Red</Value>"));

    let json_builder = DiagramBuilder::new(AppConfig::new(
        OutputConfig::new(OutputFormat::Json, 2),
        DietTable::new(),
    ));
    let json = json_builder.render(&document).unwrap();
    assert!(json.starts_with('{'));
    assert!(json.contains("\"values\""));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let registry = menagerie_animals::registry().unwrap();
    let marker = menagerie_animals::marker();

    let first = builder.generate(registry, &marker, fixed_time()).unwrap();
    let second = builder.generate(registry, &marker, fixed_time()).unwrap();

    assert_eq!(
        builder.render(&first).unwrap(),
        builder.render(&second).unwrap()
    );
}
