//! Extracted, read-only structural summaries.
//!
//! A [`DiagramDocument`] is produced fresh on each generation run and holds
//! one [`TypeDescriptor`] per type of the hierarchy. Descriptors are
//! snapshots: all fields are private and there are no mutating methods.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A declared field as it appears in a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    name: String,
    type_name: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// An operation parameter as it appears in a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    name: String,
    type_name: String,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A user-authored operation as it appears in a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    name: String,
    return_type: String,
    is_abstract: bool,
    parameters: Vec<ParameterDescriptor>,
}

impl OperationDescriptor {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        is_abstract: bool,
        parameters: Vec<ParameterDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            is_abstract,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }
}

/// Kind-specific content of a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DescriptorBody {
    Class {
        #[serde(skip_serializing_if = "Option::is_none")]
        base_type: Option<String>,
        fields: Vec<FieldDescriptor>,
        operations: Vec<OperationDescriptor>,
    },
    Enum {
        values: Vec<String>,
    },
}

/// The structural summary of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    name: String,
    full_name: String,
    is_abstract: bool,
    annotations: Vec<String>,
    #[serde(flatten)]
    body: DescriptorBody,
}

impl TypeDescriptor {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        is_abstract: bool,
        annotations: Vec<String>,
        body: DescriptorBody,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            is_abstract,
            annotations,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_enumeration(&self) -> bool {
        matches!(self.body, DescriptorBody::Enum { .. })
    }

    /// Comment annotations in declaration order.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn body(&self) -> &DescriptorBody {
        &self.body
    }

    /// Name of the immediate parent type, if any.
    ///
    /// Always `None` for enumerations.
    pub fn base_type_name(&self) -> Option<&str> {
        match &self.body {
            DescriptorBody::Class { base_type, .. } => base_type.as_deref(),
            DescriptorBody::Enum { .. } => None,
        }
    }

    /// Fields declared directly on this type. Empty for enumerations.
    pub fn fields(&self) -> &[FieldDescriptor] {
        match &self.body {
            DescriptorBody::Class { fields, .. } => fields,
            DescriptorBody::Enum { .. } => &[],
        }
    }

    /// Operations declared directly on this type. Empty for enumerations.
    pub fn operations(&self) -> &[OperationDescriptor] {
        match &self.body {
            DescriptorBody::Class { operations, .. } => operations,
            DescriptorBody::Enum { .. } => &[],
        }
    }

    /// Constants in declaration order. Empty for classes.
    pub fn enumerated_values(&self) -> &[String] {
        match &self.body {
            DescriptorBody::Class { .. } => &[],
            DescriptorBody::Enum { values } => values,
        }
    }
}

/// The ordered, hierarchical output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramDocument {
    generated_at: DateTime<Utc>,
    hierarchy: String,
    types: Vec<TypeDescriptor>,
}

impl DiagramDocument {
    pub fn new(
        generated_at: DateTime<Utc>,
        hierarchy: impl Into<String>,
        types: Vec<TypeDescriptor>,
    ) -> Self {
        Self {
            generated_at,
            hierarchy: hierarchy.into(),
            types,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Identifier of the hierarchy the document describes.
    pub fn hierarchy(&self) -> &str {
        &self.hierarchy
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Looks up a descriptor by its short name.
    pub fn find(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types
            .iter()
            .find(|descriptor| descriptor.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_descriptor_exposes_no_class_members() {
        let descriptor = TypeDescriptor::new(
            "Color",
            "ns::Color",
            false,
            Vec::new(),
            DescriptorBody::Enum {
                values: vec!["Red".to_string()],
            },
        );

        assert!(descriptor.is_enumeration());
        assert!(descriptor.fields().is_empty());
        assert!(descriptor.operations().is_empty());
        assert_eq!(descriptor.base_type_name(), None);
        assert_eq!(descriptor.enumerated_values(), ["Red"]);
    }

    #[test]
    fn test_class_descriptor_exposes_no_values() {
        let descriptor = TypeDescriptor::new(
            "Cat",
            "ns::Cat",
            false,
            vec!["meow".to_string()],
            DescriptorBody::Class {
                base_type: Some("Animal".to_string()),
                fields: vec![FieldDescriptor::new("Lives", "u8")],
                operations: Vec::new(),
            },
        );

        assert!(!descriptor.is_enumeration());
        assert!(descriptor.enumerated_values().is_empty());
        assert_eq!(descriptor.base_type_name(), Some("Animal"));
        assert_eq!(descriptor.fields()[0].name(), "Lives");
    }

    #[test]
    fn test_find_by_name() {
        let document = DiagramDocument::new(
            DateTime::<Utc>::UNIX_EPOCH,
            "ns",
            vec![TypeDescriptor::new(
                "Root",
                "ns::Root",
                true,
                Vec::new(),
                DescriptorBody::Class {
                    base_type: None,
                    fields: Vec::new(),
                    operations: Vec::new(),
                },
            )],
        );

        assert!(document.find("Root").is_some());
        assert!(document.find("Missing").is_none());
    }
}
