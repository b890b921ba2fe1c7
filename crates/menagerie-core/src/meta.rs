//! Declared metadata for the types of a closed hierarchy.
//!
//! A [`TypeMeta`] is what a type says about itself when it registers: its
//! name, the hierarchy namespace it belongs to, the annotations attached to
//! its definition and either its structured members or its enumerated
//! constants. Nothing here is derived; the generator decides which of these
//! facts end up in a diagram.
//!
//! # Overview
//!
//! - [`TypeMeta`]: The declared facts of one type.
//! - [`TypeShape`]: Structured (record/class) or enumeration.
//! - [`FieldMeta`], [`OperationMeta`], [`ParameterMeta`]: Declared members.
//! - [`Annotation`]: Declarative tags attached to a type definition.
//!
//! # Example
//!
//! ```
//! use menagerie_core::meta::{Annotation, BaseType, FieldMeta, TypeMeta};
//!
//! let cat = TypeMeta::structured("Cat", "zoo")
//!     .with_base(BaseType::named("Animal"))
//!     .with_annotation(Annotation::comment("Cats are curious."))
//!     .with_field(FieldMeta::new("Lives", "u8"));
//!
//! assert_eq!(cat.full_name(), "zoo::Cat");
//! assert_eq!(cat.fields().len(), 1);
//! ```

use std::fmt;

/// Visibility of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Whether a member belongs to instances or to the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Instance,
    Static,
}

/// The kind of a declared operation.
///
/// Only [`OperationKind::Method`] is user-authored behavior; the other kinds
/// are generated or structural and never appear in a class diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationKind {
    #[default]
    Method,
    /// Property getter or setter.
    Accessor,
    Constructor,
    /// Operator overloads, event plumbing and other runtime-generated members.
    Special,
}

/// A declarative tag attached to a type definition.
///
/// Annotations are told apart by variant, never by their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Free-text, comment-style annotation.
    Comment(String),
    /// Names a derived type the serializer must know about.
    XmlInclude(String),
    Serializable,
}

impl Annotation {
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    pub fn xml_include(type_name: impl Into<String>) -> Self {
        Self::XmlInclude(type_name.into())
    }

    /// Returns the comment text if this is a comment-style annotation.
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(text) => Some(text),
            Self::XmlInclude(_) | Self::Serializable => None,
        }
    }
}

/// The immediate parent of a structured type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// The universal supertype every structured type implicitly extends.
    Object,
    /// Another type, referenced by its short name.
    Named(String),
}

impl BaseType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the referenced type name, or `None` for [`BaseType::Object`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Object => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "Object"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A field declared directly on a structured type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    name: String,
    type_name: String,
    visibility: Visibility,
    scope: Scope,
}

impl FieldMeta {
    /// Creates a public instance field.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            visibility: Visibility::Public,
            scope: Scope::Instance,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}

/// A parameter of a declared operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMeta {
    name: String,
    type_name: String,
}

impl ParameterMeta {
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

/// An operation declared directly on a structured type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMeta {
    name: String,
    return_type: String,
    kind: OperationKind,
    visibility: Visibility,
    scope: Scope,
    is_abstract: bool,
    parameters: Vec<ParameterMeta>,
}

impl OperationMeta {
    /// Creates a public, concrete instance method without parameters.
    pub fn method(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            kind: OperationKind::Method,
            visibility: Visibility::Public,
            scope: Scope::Instance,
            is_abstract: false,
            parameters: Vec::new(),
        }
    }

    /// Creates a property accessor.
    pub fn accessor(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self::method(name, return_type).with_kind(OperationKind::Accessor)
    }

    /// Creates a constructor for `type_name`.
    pub fn constructor(type_name: impl Into<String>) -> Self {
        Self::method(".ctor", type_name).with_kind(OperationKind::Constructor)
    }

    pub fn with_kind(mut self, kind: OperationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Marks the operation as abstract (declared without a body).
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Appends a parameter; parameters keep the order they are added in.
    pub fn with_parameter(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.parameters.push(ParameterMeta::new(name, type_name));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn parameters(&self) -> &[ParameterMeta] {
        &self.parameters
    }
}

/// Structured types and enumerations carry disjoint sets of facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    Structured {
        base: Option<BaseType>,
        fields: Vec<FieldMeta>,
        operations: Vec<OperationMeta>,
    },
    Enumeration {
        constants: Vec<String>,
    },
}

/// The declared facts of one type in a closed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMeta {
    name: String,
    namespace: String,
    is_abstract: bool,
    annotations: Vec<Annotation>,
    shape: TypeShape,
}

impl TypeMeta {
    /// Creates a concrete structured type extending [`BaseType::Object`].
    pub fn structured(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            is_abstract: false,
            annotations: Vec::new(),
            shape: TypeShape::Structured {
                base: Some(BaseType::Object),
                fields: Vec::new(),
                operations: Vec::new(),
            },
        }
    }

    /// Creates an enumeration with the given constants in declaration order.
    pub fn enumeration<I, S>(
        name: impl Into<String>,
        namespace: impl Into<String>,
        constants: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            is_abstract: false,
            annotations: Vec::new(),
            shape: TypeShape::Enumeration {
                constants: constants.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Sets the base type. Has no effect on enumerations.
    pub fn with_base(mut self, base: BaseType) -> Self {
        if let TypeShape::Structured { base: slot, .. } = &mut self.shape {
            *slot = Some(base);
        }
        self
    }

    /// Removes the base type link entirely. Has no effect on enumerations.
    pub fn without_base(mut self) -> Self {
        if let TypeShape::Structured { base, .. } = &mut self.shape {
            *base = None;
        }
        self
    }

    /// Appends a declared field. Has no effect on enumerations.
    pub fn with_field(mut self, field: FieldMeta) -> Self {
        if let TypeShape::Structured { fields, .. } = &mut self.shape {
            fields.push(field);
        }
        self
    }

    /// Appends a declared operation. Has no effect on enumerations.
    pub fn with_operation(mut self, operation: OperationMeta) -> Self {
        if let TypeShape::Structured { operations, .. } = &mut self.shape {
            operations.push(operation);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns `namespace::name`.
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.shape, TypeShape::Enumeration { .. })
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    /// Returns the base type of a structured type.
    pub fn base_type(&self) -> Option<&BaseType> {
        match &self.shape {
            TypeShape::Structured { base, .. } => base.as_ref(),
            TypeShape::Enumeration { .. } => None,
        }
    }

    pub fn fields(&self) -> &[FieldMeta] {
        match &self.shape {
            TypeShape::Structured { fields, .. } => fields,
            TypeShape::Enumeration { .. } => &[],
        }
    }

    pub fn operations(&self) -> &[OperationMeta] {
        match &self.shape {
            TypeShape::Structured { operations, .. } => operations,
            TypeShape::Enumeration { .. } => &[],
        }
    }

    pub fn constants(&self) -> &[String] {
        match &self.shape {
            TypeShape::Structured { .. } => &[],
            TypeShape::Enumeration { constants } => constants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_defaults_to_object_base() {
        let meta = TypeMeta::structured("Root", "ns");
        assert_eq!(meta.base_type(), Some(&BaseType::Object));
        assert!(!meta.is_abstract());
        assert!(!meta.is_enum());
    }

    #[test]
    fn test_enumeration_ignores_structured_builders() {
        let meta = TypeMeta::enumeration("Color", "ns", ["Red", "Green"])
            .with_base(BaseType::named("Root"))
            .with_field(FieldMeta::new("F", "i32"))
            .with_operation(OperationMeta::method("M", "()"));

        assert!(meta.is_enum());
        assert_eq!(meta.base_type(), None);
        assert!(meta.fields().is_empty());
        assert!(meta.operations().is_empty());
        assert_eq!(meta.constants(), ["Red", "Green"]);
    }

    #[test]
    fn test_parameters_keep_declaration_order() {
        let op = OperationMeta::method("Feed", "()")
            .with_parameter("food", "FoodKind")
            .with_parameter("amount", "u32");

        let names: Vec<_> = op.parameters().iter().map(ParameterMeta::name).collect();
        assert_eq!(names, ["food", "amount"]);
    }

    #[test]
    fn test_only_comment_annotations_have_text() {
        assert_eq!(Annotation::comment("hi").as_comment(), Some("hi"));
        assert_eq!(Annotation::xml_include("Cat").as_comment(), None);
        assert_eq!(Annotation::Serializable.as_comment(), None);
    }

    #[test]
    fn test_accessor_and_constructor_kinds() {
        assert_eq!(
            OperationMeta::accessor("get_Name", "String").kind(),
            OperationKind::Accessor
        );
        assert_eq!(
            OperationMeta::constructor("Cat").kind(),
            OperationKind::Constructor
        );
    }

    #[test]
    fn test_base_type_name() {
        assert_eq!(BaseType::Object.name(), None);
        assert_eq!(BaseType::named("Animal").name(), Some("Animal"));
        assert_eq!(BaseType::Object.to_string(), "Object");
    }
}
