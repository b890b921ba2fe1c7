//! The animal hierarchy introspected by Menagerie.
//!
//! An abstract [`Animal`] root with the concrete variants [`Cat`], [`Dog`]
//! and [`Pig`], plus the [`Classification`] and [`FoodKind`] enumerations.
//! Every type registers its declared metadata into the table returned by
//! [`registry`]; diagram generation reads that table and nothing else.
//!
//! # Example
//!
//! ```
//! use menagerie_core::registry::MetadataSource;
//!
//! let registry = menagerie_animals::registry().expect("hierarchy registers cleanly");
//! let types = registry.enumerate_types(&menagerie_animals::marker());
//! assert_eq!(types.len(), 6);
//! ```

pub mod animal;
pub mod diet;

mod metadata;

pub use animal::{Animal, AnimalKind, Cat, Dog, Pig, Species, sample_animals};
pub use diet::{Classification, DietEntry, DietTable, FoodKind};

use std::sync::OnceLock;

use log::debug;

use menagerie_core::registry::{HierarchyMarker, RegistryError, TypeRegistry};

/// Namespace shared by every type of the animal hierarchy.
pub const NAMESPACE: &str = "menagerie_animals";

/// Returns the marker selecting the animal hierarchy.
pub fn marker() -> HierarchyMarker {
    HierarchyMarker::new(NAMESPACE)
}

/// Builds a fresh registry holding every type of the hierarchy.
///
/// # Errors
///
/// Returns [`RegistryError`] if two types register under the same name.
pub fn build_registry() -> Result<TypeRegistry, RegistryError> {
    let mut registry = TypeRegistry::new();
    registry
        .register::<Animal>()?
        .register::<Cat>()?
        .register::<Dog>()?
        .register::<Pig>()?
        .register::<Classification>()?
        .register::<FoodKind>()?;

    debug!(types = registry.len(); "Animal hierarchy registered");
    Ok(registry)
}

/// Returns the process-wide registry of the hierarchy, built on first use.
///
/// # Errors
///
/// Returns the [`RegistryError`] the first build failed with.
pub fn registry() -> Result<&'static TypeRegistry, RegistryError> {
    static REGISTRY: OnceLock<Result<TypeRegistry, RegistryError>> = OnceLock::new();

    REGISTRY
        .get_or_init(build_registry)
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use menagerie_core::registry::MetadataSource;

    use super::*;

    #[test]
    fn test_registry_is_shared() {
        let first = registry().unwrap();
        let second = registry().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_registry_holds_whole_hierarchy() {
        let registry = build_registry().unwrap();
        let names: Vec<_> = registry
            .enumerate_types(&marker())
            .into_iter()
            .map(|meta| meta.name())
            .collect();

        assert_eq!(
            names,
            ["Animal", "Cat", "Dog", "Pig", "Classification", "FoodKind"]
        );
    }
}
