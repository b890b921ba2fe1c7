//! Capability-indexed registry of described types.
//!
//! Types take part in a hierarchy by implementing [`Described`] and being
//! registered explicitly into a [`TypeRegistry`]. Enumeration then walks the
//! table instead of scanning the type system, so the set of types is exactly
//! what was registered and is checked when the table is built.
//!
//! # Example
//!
//! ```
//! use menagerie_core::meta::TypeMeta;
//! use menagerie_core::registry::{Described, HierarchyMarker, MetadataSource, TypeRegistry};
//!
//! struct Shape;
//!
//! impl Described for Shape {
//!     fn type_meta() -> TypeMeta {
//!         TypeMeta::structured("Shape", "geometry").abstract_()
//!     }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Shape>().expect("first registration");
//!
//! let marker = HierarchyMarker::of::<Shape>();
//! assert_eq!(registry.enumerate_types(&marker).len(), 1);
//! ```

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use crate::meta::TypeMeta;

/// A type that can describe its own declared structure.
pub trait Described {
    fn type_meta() -> TypeMeta;
}

/// Identifies one closed hierarchy by the namespace its types share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HierarchyMarker {
    namespace: String,
}

impl HierarchyMarker {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Selects the hierarchy that `T` belongs to.
    pub fn of<T: Described>() -> Self {
        Self::new(T::type_meta().namespace())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Source of type metadata for a hierarchy.
pub trait MetadataSource {
    /// Returns every type belonging to the hierarchy selected by `marker`.
    ///
    /// Implementations must be free of side effects and return the same set
    /// on every call.
    fn enumerate_types(&self, marker: &HierarchyMarker) -> Vec<&TypeMeta>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("type `{0}` is already registered")]
    DuplicateType(String),
}

/// Ordered table of described types keyed by full name.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, TypeMeta>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the metadata of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateType`] if a type with the same full
    /// name is already registered.
    pub fn register<T: Described>(&mut self) -> Result<&mut Self, RegistryError> {
        self.insert(T::type_meta())
    }

    /// Registers an explicit [`TypeMeta`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateType`] if a type with the same full
    /// name is already registered.
    pub fn insert(&mut self, meta: TypeMeta) -> Result<&mut Self, RegistryError> {
        let key = meta.full_name();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateType(key));
        }

        trace!(type_name = key.as_str(); "Registering type");
        self.entries.insert(key, meta);
        Ok(self)
    }

    /// Looks up a type by its full name (`namespace::name`).
    pub fn get(&self, full_name: &str) -> Option<&TypeMeta> {
        self.entries.get(full_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeMeta> {
        self.entries.values()
    }
}

impl MetadataSource for TypeRegistry {
    fn enumerate_types(&self, marker: &HierarchyMarker) -> Vec<&TypeMeta> {
        self.iter()
            .filter(|meta| meta.namespace() == marker.namespace())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Root;
    struct Leaf;

    impl Described for Root {
        fn type_meta() -> TypeMeta {
            TypeMeta::structured("Root", "tree").abstract_()
        }
    }

    impl Described for Leaf {
        fn type_meta() -> TypeMeta {
            TypeMeta::structured("Leaf", "tree")
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = TypeRegistry::new();
        registry.register::<Root>().unwrap();

        let err = registry.register::<Root>().unwrap_err();
        assert_eq!(err, RegistryError::DuplicateType("tree::Root".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_name_in_other_namespace_is_distinct() {
        let mut registry = TypeRegistry::new();
        registry
            .insert(TypeMeta::structured("Root", "a"))
            .unwrap()
            .insert(TypeMeta::structured("Root", "b"))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("a::Root").is_some());
        assert!(registry.get("b::Root").is_some());
    }

    #[test]
    fn test_enumerate_filters_by_namespace_in_registration_order() {
        let mut registry = TypeRegistry::new();
        registry
            .register::<Leaf>()
            .unwrap()
            .insert(TypeMeta::structured("Stranger", "elsewhere"))
            .unwrap()
            .register::<Root>()
            .unwrap();

        let marker = HierarchyMarker::of::<Root>();
        let names: Vec<_> = registry
            .enumerate_types(&marker)
            .into_iter()
            .map(TypeMeta::name)
            .collect();

        assert_eq!(names, ["Leaf", "Root"]);
    }

    #[test]
    fn test_enumerate_is_stable() {
        let mut registry = TypeRegistry::new();
        registry
            .register::<Root>()
            .unwrap()
            .register::<Leaf>()
            .unwrap();

        let marker = HierarchyMarker::new("tree");
        assert_eq!(
            registry.enumerate_types(&marker),
            registry.enumerate_types(&marker)
        );
    }

    #[test]
    fn test_unknown_marker_enumerates_nothing() {
        let mut registry = TypeRegistry::new();
        registry.register::<Root>().unwrap();

        assert!(
            registry
                .enumerate_types(&HierarchyMarker::new("missing"))
                .is_empty()
        );
    }
}
