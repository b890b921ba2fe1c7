//! Diet classification data.
//!
//! Which classification and favourite food a species has is supplied by the
//! caller, typically from the `[diet]` table of the configuration file. The
//! crate itself carries no per-species diet.
//!
//! ```toml
//! [diet.cat]
//! classification = "carnivore"
//! favourite_food = "meat"
//! ```

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use crate::animal::Species;

/// Dietary classification of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Herbivore,
    Omnivore,
    Carnivore,
}

impl Classification {
    pub const ALL: [Self; 3] = [Self::Herbivore, Self::Omnivore, Self::Carnivore];
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Herbivore => "Herbivore",
            Self::Omnivore => "Omnivore",
            Self::Carnivore => "Carnivore",
        };
        write!(f, "{name}")
    }
}

/// Kind of food a species prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKind {
    Meat,
    Plants,
    Everything,
}

impl FoodKind {
    pub const ALL: [Self; 3] = [Self::Meat, Self::Plants, Self::Everything];
}

impl fmt::Display for FoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Meat => "Meat",
            Self::Plants => "Plants",
            Self::Everything => "Everything",
        };
        write!(f, "{name}")
    }
}

/// The diet recorded for one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DietEntry {
    classification: Classification,
    favourite_food: FoodKind,
}

impl DietEntry {
    pub fn new(classification: Classification, favourite_food: FoodKind) -> Self {
        Self {
            classification,
            favourite_food,
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn favourite_food(&self) -> FoodKind {
        self.favourite_food
    }
}

/// Caller-supplied mapping from species to diet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DietTable {
    entries: BTreeMap<Species, DietEntry>,
}

impl DietTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the diet of `species`, replacing any previous entry.
    pub fn with_entry(mut self, species: Species, entry: DietEntry) -> Self {
        self.entries.insert(species, entry);
        self
    }

    pub fn lookup(&self, species: Species) -> Option<&DietEntry> {
        self.entries.get(&species)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_no_entries() {
        let table = DietTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup(Species::Cat), None);
    }

    #[test]
    fn test_with_entry_replaces() {
        let table = DietTable::new()
            .with_entry(
                Species::Pig,
                DietEntry::new(Classification::Carnivore, FoodKind::Meat),
            )
            .with_entry(
                Species::Pig,
                DietEntry::new(Classification::Omnivore, FoodKind::Everything),
            );

        assert_eq!(table.len(), 1);
        let entry = table.lookup(Species::Pig).unwrap();
        assert_eq!(entry.classification(), Classification::Omnivore);
        assert_eq!(entry.favourite_food(), FoodKind::Everything);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let source = r#"
            [cat]
            classification = "carnivore"
            favourite_food = "meat"

            [dog]
            classification = "omnivore"
            favourite_food = "everything"
        "#;

        let table: DietTable = toml::from_str(source).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup(Species::Dog).map(DietEntry::classification),
            Some(Classification::Omnivore)
        );
        assert_eq!(table.lookup(Species::Pig), None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_species() {
        let source = r#"
            [dragon]
            classification = "carnivore"
            favourite_food = "meat"
        "#;

        assert!(toml::from_str::<DietTable>(source).is_err());
    }
}
