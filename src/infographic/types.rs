//! Shared data types for infographic generation.
//!
//! Data sources:
//! - Dinosaurs and the pigeon: `data/dino.json` (weight in lbs, height in inches)
//! - Human: the submitted form, after validation

use serde::Serialize;

/// Era assigned to the human entity.
pub const HUMAN_ERA: &str = "Holocene";

/// Measurements and categorical traits shared by every entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traits {
    pub weight_lbs: f64,
    pub height_in: f64,
    pub diet: String,
    pub location: String,
    pub era: String,
}

/// A validated human.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Human {
    pub name: String,
    pub traits: Traits,
}

/// A dataset record: dinosaur or pigeon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    pub species: String,
    pub traits: Traits,
    pub fact: String,
}

/// One tile's worth of subject matter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entity {
    Human(Human),
    Dinosaur(Creature),
    Pigeon(Creature),
}

/// Variant tag without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Human,
    Dinosaur,
    Pigeon,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Human => "Human",
            EntityKind::Dinosaur => "Dinosaur",
            EntityKind::Pigeon => "Pigeon",
        }
    }

    /// CSS class for the grid tile.
    pub fn css_class(&self) -> &'static str {
        match self {
            EntityKind::Human => "grid-item human",
            EntityKind::Dinosaur => "grid-item dino",
            EntityKind::Pigeon => "grid-item bird",
        }
    }
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Human(_) => EntityKind::Human,
            Entity::Dinosaur(_) => EntityKind::Dinosaur,
            Entity::Pigeon(_) => EntityKind::Pigeon,
        }
    }

    pub fn traits(&self) -> &Traits {
        match self {
            Entity::Human(h) => &h.traits,
            Entity::Dinosaur(c) | Entity::Pigeon(c) => &c.traits,
        }
    }

    /// Tile header: the human's name, otherwise the species.
    pub fn header(&self) -> &str {
        match self {
            Entity::Human(h) => &h.name,
            Entity::Dinosaur(c) | Entity::Pigeon(c) => &c.species,
        }
    }

    /// Lower-cased image stem, e.g. "tyrannosaurus rex" or "human".
    pub fn image_stem(&self) -> String {
        match self {
            Entity::Human(_) => "human".to_string(),
            Entity::Dinosaur(c) | Entity::Pigeon(c) => c.species.trim().to_lowercase(),
        }
    }
}

/// Attribute compared by the fact selector.
///
/// Discriminants are the attribute indices used for unit labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Attribute {
    Weight = 0,
    Height = 1,
    Diet = 2,
    Location = 3,
    Era = 4,
}

impl Attribute {
    pub const QUANTITIES: [Attribute; 2] = [Attribute::Weight, Attribute::Height];
    pub const QUALITIES: [Attribute; 3] = [Attribute::Diet, Attribute::Location, Attribute::Era];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Weight => "weight",
            Attribute::Height => "height",
            Attribute::Diet => "diet",
            Attribute::Location => "location",
            Attribute::Era => "era",
        }
    }

    /// Measurement unit for quantities; `None` for categorical attributes.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Attribute::Weight => Some("lbs"),
            Attribute::Height => Some("inches"),
            Attribute::Diet | Attribute::Location | Attribute::Era => None,
        }
    }

    pub fn quantity(&self, traits: &Traits) -> Option<f64> {
        match self {
            Attribute::Weight => Some(traits.weight_lbs),
            Attribute::Height => Some(traits.height_in),
            _ => None,
        }
    }

    pub fn quality<'a>(&self, traits: &'a Traits) -> Option<&'a str> {
        match self {
            Attribute::Diet => Some(&traits.diet),
            Attribute::Location => Some(&traits.location),
            Attribute::Era => Some(&traits.era),
            _ => None,
        }
    }
}
