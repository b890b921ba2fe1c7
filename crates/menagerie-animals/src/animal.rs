//! The animals themselves.
//!
//! [`Animal`] holds what every animal has (a name and an age) and an
//! [`AnimalKind`] carrying the variant-specific data. Behavior dispatches by
//! matching on the kind.

use std::fmt;

use serde::Deserialize;

use crate::diet::{Classification, DietEntry, DietTable, FoodKind};

/// Discriminant of the concrete animal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Cat,
    Dog,
    Pig,
}

impl Species {
    pub const ALL: [Self; 3] = [Self::Cat, Self::Dog, Self::Pig];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cat => "Cat",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    lives: u8,
    is_indoor: bool,
}

impl Cat {
    pub fn new(is_indoor: bool) -> Self {
        Self {
            lives: 9,
            is_indoor,
        }
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn is_indoor(&self) -> bool {
        self.is_indoor
    }

    pub fn purr(&self, volume: u8) -> String {
        format!("P{}rr", "u".repeat(usize::from(volume.max(1))))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    breed: String,
}

impl Dog {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Dogs fetch anything except the vacuum cleaner.
    pub fn fetch(&self, item: &str) -> bool {
        !item.eq_ignore_ascii_case("vacuum cleaner")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pig {
    weight_kg: f32,
}

impl Pig {
    pub fn new(weight_kg: f32) -> Self {
        Self { weight_kg }
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight_kg
    }

    pub fn roll_in_mud(&self, minutes: u32) -> String {
        format!("Rolled in the mud for {minutes} minutes")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnimalKind {
    Cat(Cat),
    Dog(Dog),
    Pig(Pig),
}

/// A named animal of one of the known species.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
    age: u32,
    kind: AnimalKind,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32, kind: AnimalKind) -> Self {
        Self {
            name: name.into(),
            age,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn kind(&self) -> &AnimalKind {
        &self.kind
    }

    pub fn species(&self) -> Species {
        match self.kind {
            AnimalKind::Cat(_) => Species::Cat,
            AnimalKind::Dog(_) => Species::Dog,
            AnimalKind::Pig(_) => Species::Pig,
        }
    }

    pub fn say_hello(&self) -> String {
        let sound = match &self.kind {
            AnimalKind::Cat(_) => "Meow",
            AnimalKind::Dog(_) => "Woof",
            AnimalKind::Pig(_) => "Oink",
        };
        format!("{sound}! I am {}, a {}.", self.name, self.species())
    }

    /// Classification of this animal's species according to `diet`.
    pub fn classification(&self, diet: &DietTable) -> Option<Classification> {
        diet.lookup(self.species()).map(DietEntry::classification)
    }

    /// Favourite food of this animal's species according to `diet`.
    pub fn favourite_food(&self, diet: &DietTable) -> Option<FoodKind> {
        diet.lookup(self.species()).map(DietEntry::favourite_food)
    }
}

/// A small fixed set of animals, one per species.
pub fn sample_animals() -> Vec<Animal> {
    vec![
        Animal::new("Tom", 3, AnimalKind::Cat(Cat::new(true))),
        Animal::new("Rex", 5, AnimalKind::Dog(Dog::new("Labrador"))),
        Animal::new("Babe", 2, AnimalKind::Pig(Pig::new(85.5))),
    ]
}
