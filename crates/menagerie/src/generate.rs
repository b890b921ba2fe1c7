//! Class diagram generation.
//!
//! [`generate`] walks the types a [`MetadataSource`] enumerates for one
//! hierarchy and turns each into a [`TypeDescriptor`]. The result is a pure
//! function of the metadata and the supplied timestamp: nothing is sampled
//! internally and nothing is written anywhere.
//!
//! # Extraction rules
//!
//! - Types are emitted sorted by name, not in enumeration order.
//! - Enumerations contribute their constants and nothing else.
//! - Structured types contribute public instance fields and public instance
//!   methods declared on the type itself. Accessors, constructors and
//!   special operations are skipped.
//! - A base of [`BaseType::Object`] is not recorded.
//! - Only [`Annotation::Comment`] tags become annotations.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::{algo, graph::DiGraph};
use thiserror::Error;

use menagerie_core::{
    descriptor::{
        DescriptorBody, DiagramDocument, FieldDescriptor, OperationDescriptor, ParameterDescriptor,
        TypeDescriptor,
    },
    meta::{
        Annotation, BaseType, OperationKind, OperationMeta, Scope, TypeMeta, TypeShape, Visibility,
    },
    registry::{HierarchyMarker, MetadataSource},
};

/// Errors raised while generating a class diagram.
///
/// All of them point at a malformed hierarchy definition; none is transient.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("hierarchy `{0}` has no types to describe")]
    EmptyHierarchy(String),

    #[error("base type `{base}` of `{type_name}` does not resolve to a class of the hierarchy")]
    AmbiguousBaseType { type_name: String, base: String },

    #[error("type `{0}` is enumerated more than once")]
    DuplicateType(String),

    #[error("inheritance cycle through type `{0}`")]
    CyclicInheritance(String),
}

/// Generates the class diagram of the hierarchy selected by `marker`.
///
/// # Arguments
///
/// * `source` - Metadata of the hierarchy's types
/// * `marker` - Selects the hierarchy to describe
/// * `generated_at` - Timestamp recorded on the document
///
/// # Errors
///
/// - [`GenerateError::EmptyHierarchy`] if the hierarchy has no types.
/// - [`GenerateError::DuplicateType`] if two enumerated types share a name.
/// - [`GenerateError::AmbiguousBaseType`] if a base type is not a class of
///   the hierarchy.
/// - [`GenerateError::CyclicInheritance`] if base links form a cycle.
pub fn generate<S>(
    source: &S,
    marker: &HierarchyMarker,
    generated_at: DateTime<Utc>,
) -> Result<DiagramDocument, GenerateError>
where
    S: MetadataSource + ?Sized,
{
    let mut types = source.enumerate_types(marker);
    if types.is_empty() {
        return Err(GenerateError::EmptyHierarchy(marker.namespace().to_string()));
    }

    types.sort_by(|a, b| a.name().cmp(b.name()));
    let duplicate = types
        .windows(2)
        .find(|pair| pair[0].name() == pair[1].name());
    if let Some(pair) = duplicate {
        return Err(GenerateError::DuplicateType(pair[0].name().to_string()));
    }

    debug!(
        hierarchy = marker.namespace(),
        types_count = types.len();
        "Describing hierarchy"
    );

    let descriptors: Vec<_> = types.into_iter().map(describe_type).collect();
    check_inheritance(&descriptors)?;

    Ok(DiagramDocument::new(generated_at, marker.namespace(), descriptors))
}

fn describe_type(meta: &TypeMeta) -> TypeDescriptor {
    trace!(type_name = meta.name(); "Describing type");

    let annotations = meta
        .annotations()
        .iter()
        .filter_map(Annotation::as_comment)
        .map(str::to_string)
        .collect();

    let body = match meta.shape() {
        TypeShape::Enumeration { constants } => DescriptorBody::Enum {
            values: constants.clone(),
        },
        TypeShape::Structured {
            base,
            fields,
            operations,
        } => DescriptorBody::Class {
            base_type: base.as_ref().and_then(BaseType::name).map(str::to_string),
            fields: fields
                .iter()
                .filter(|field| is_public_instance(field.visibility(), field.scope()))
                .map(|field| FieldDescriptor::new(field.name(), field.type_name()))
                .collect(),
            operations: operations
                .iter()
                .filter(|operation| is_user_method(operation))
                .map(describe_operation)
                .collect(),
        },
    };

    TypeDescriptor::new(
        meta.name(),
        meta.full_name(),
        meta.is_abstract(),
        annotations,
        body,
    )
}

fn describe_operation(operation: &OperationMeta) -> OperationDescriptor {
    let parameters = operation
        .parameters()
        .iter()
        .map(|parameter| ParameterDescriptor::new(parameter.name(), parameter.type_name()))
        .collect();

    OperationDescriptor::new(
        operation.name(),
        operation.return_type(),
        operation.is_abstract(),
        parameters,
    )
}

fn is_public_instance(visibility: Visibility, scope: Scope) -> bool {
    visibility == Visibility::Public && scope == Scope::Instance
}

fn is_user_method(operation: &OperationMeta) -> bool {
    operation.kind() == OperationKind::Method
        && is_public_instance(operation.visibility(), operation.scope())
}

/// Checks that every recorded base names a class of the document and that
/// the base links form a forest.
fn check_inheritance(descriptors: &[TypeDescriptor]) -> Result<(), GenerateError> {
    let mut graph =
        DiGraph::<&TypeDescriptor, ()>::with_capacity(descriptors.len(), descriptors.len());
    let nodes: IndexMap<&str, _> = descriptors
        .iter()
        .map(|descriptor| (descriptor.name(), graph.add_node(descriptor)))
        .collect();

    for descriptor in descriptors {
        let Some(base) = descriptor.base_type_name() else {
            continue;
        };

        let ambiguous = || GenerateError::AmbiguousBaseType {
            type_name: descriptor.name().to_string(),
            base: base.to_string(),
        };

        let base_node = *nodes.get(base).ok_or_else(ambiguous)?;
        if graph[base_node].is_enumeration() {
            return Err(ambiguous());
        }

        graph.add_edge(nodes[descriptor.name()], base_node, ());
    }

    if let Err(cycle) = algo::toposort(&graph, None) {
        let name = graph[cycle.node_id()].name().to_string();
        return Err(GenerateError::CyclicInheritance(name));
    }

    Ok(())
}
