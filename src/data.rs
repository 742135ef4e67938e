//! Dataset Loading
//!
//! Loads the static dinosaur/pigeon records. The bundled `data/dino.json` is
//! compiled in; a file path can override it (see `InfographicConfig::data_path`).
//!
//! Format: `{"Dinos": [{species, weight, height, diet, where, when, fact}, ...]}`
//! with weight in lbs and height in inches.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::InfographicError;
use crate::infographic::types::{Creature, Entity, Traits};

/// Number of records the roster expects from the dataset.
pub const DATASET_RECORDS: usize = 8;

const EMBEDDED_DATASET: &str = include_str!("../data/dino.json");

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(rename = "Dinos")]
    dinos: Vec<DinoRecord>,
}

#[derive(Debug, Deserialize)]
struct DinoRecord {
    species: String,
    weight: f64,
    height: f64,
    diet: String,
    #[serde(rename = "where")]
    location: String,
    #[serde(rename = "when")]
    era: String,
    fact: String,
}

impl DinoRecord {
    fn into_entity(self) -> Entity {
        let is_pigeon = self.species.trim().eq_ignore_ascii_case("pigeon");
        let creature = Creature {
            species: self.species,
            traits: Traits {
                weight_lbs: self.weight,
                height_in: self.height,
                diet: self.diet,
                location: self.location,
                era: self.era,
            },
            fact: self.fact,
        };
        if is_pigeon {
            Entity::Pigeon(creature)
        } else {
            Entity::Dinosaur(creature)
        }
    }
}

/// The fixed, non-human part of the roster, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Entity>,
}

impl Dataset {
    /// Dataset bundled with the crate.
    pub fn embedded() -> Result<Self, InfographicError> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// Load a dataset file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
        let dataset = Self::from_json_str(&contents)
            .with_context(|| format!("Failed to load dataset: {}", path.display()))?;
        Ok(dataset)
    }

    /// Embedded dataset unless a path is given.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::embedded().context("Failed to load embedded dataset"),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, InfographicError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        if file.dinos.len() != DATASET_RECORDS {
            return Err(InfographicError::DatasetShape(format!(
                "expected {} records, found {}",
                DATASET_RECORDS,
                file.dinos.len()
            )));
        }

        let records: Vec<Entity> = file.dinos.into_iter().map(DinoRecord::into_entity).collect();
        let pigeons = records.iter().filter(|e| matches!(e, Entity::Pigeon(_))).count();
        tracing::info!(
            "Loaded dataset: {} dinosaurs, {} pigeon",
            records.len() - pigeons,
            pigeons
        );

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Entity] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infographic::types::EntityKind;

    #[test]
    fn test_embedded_dataset() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.len(), DATASET_RECORDS);

        let kinds: Vec<EntityKind> = dataset.records().iter().map(Entity::kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == EntityKind::Pigeon).count(), 1);
        assert_eq!(kinds.iter().filter(|k| **k == EntityKind::Dinosaur).count(), 7);

        // Source order is preserved
        assert_eq!(dataset.records()[0].header(), "Triceratops");
        assert_eq!(dataset.records()[7].header(), "Pigeon");
    }

    #[test]
    fn test_where_and_when_fields() {
        let dataset = Dataset::embedded().unwrap();
        let stego = &dataset.records()[4];
        assert_eq!(stego.header(), "Stegosaurus");
        assert_eq!(stego.traits().location, "North America, Europe, Asia");
        assert_eq!(stego.traits().era, "Late Jurassic to Early Cretaceous");
    }

    #[test]
    fn test_wrong_record_count() {
        let json = r#"{"Dinos": [{"species": "Pigeon", "weight": 0.5, "height": 9,
            "diet": "herbivore", "where": "World Wide", "when": "Holocene",
            "fact": "All birds are dinosaurs."}]}"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(matches!(err, InfographicError::DatasetShape(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Dataset::from_json_str("{\"Dinos\": [").unwrap_err();
        assert!(matches!(err, InfographicError::Dataset(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("/nonexistent/dino.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }
}
