//! Roster assembly: eight dataset records plus the human pinned at the centre.

use serde::Serialize;

use crate::data::DATASET_RECORDS;
use crate::error::InfographicError;
use crate::infographic::types::{Entity, Human};

/// Total entities on the grid.
pub const ROSTER_SIZE: usize = DATASET_RECORDS + 1;

/// Roster index (and grid slot) of the human.
pub const HUMAN_INDEX: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    entities: Vec<Entity>,
    #[serde(skip)]
    human: Human,
}

impl Roster {
    /// Insert the human at index 4; dataset records keep their order around it.
    pub fn assemble(records: &[Entity], human: Human) -> Result<Self, InfographicError> {
        if records.len() != DATASET_RECORDS {
            return Err(InfographicError::DatasetShape(format!(
                "roster needs {} records, got {}",
                DATASET_RECORDS,
                records.len()
            )));
        }
        if records.iter().any(|e| matches!(e, Entity::Human(_))) {
            return Err(InfographicError::DatasetShape(
                "dataset records cannot be human".to_string(),
            ));
        }

        let mut entities = records.to_vec();
        entities.insert(HUMAN_INDEX, Entity::Human(human.clone()));
        Ok(Self { entities, human })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn human(&self) -> &Human {
        &self.human
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::infographic::types::{EntityKind, Traits};

    fn human() -> Human {
        Human {
            name: "Ada".to_string(),
            traits: Traits {
                weight_lbs: 130.0,
                height_in: 66.0,
                diet: "omnivore".to_string(),
                location: "Europe".to_string(),
                era: "Holocene".to_string(),
            },
        }
    }

    #[test]
    fn test_human_pinned_at_centre() {
        let dataset = Dataset::embedded().unwrap();
        let roster = Roster::assemble(dataset.records(), human()).unwrap();

        assert_eq!(roster.len(), ROSTER_SIZE);
        assert_eq!(roster.get(HUMAN_INDEX).unwrap().kind(), EntityKind::Human);
        assert_eq!(roster.human().name, "Ada");

        // Records shift around the human in source order
        let headers: Vec<&str> = roster
            .entities()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != HUMAN_INDEX)
            .map(|(_, e)| e.header())
            .collect();
        let source: Vec<&str> = dataset.records().iter().map(Entity::header).collect();
        assert_eq!(headers, source);
    }

    #[test]
    fn test_human_accessor_matches_centre_entity() {
        let dataset = Dataset::embedded().unwrap();
        let roster = Roster::assemble(dataset.records(), human()).unwrap();
        assert_eq!(roster.get(HUMAN_INDEX), Some(&Entity::Human(roster.human().clone())));

        let json = serde_json::to_value(&roster).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["entities"].as_array().unwrap().len(), ROSTER_SIZE);
    }

    #[test]
    fn test_wrong_record_count() {
        let dataset = Dataset::embedded().unwrap();
        let err = Roster::assemble(&dataset.records()[..5], human()).unwrap_err();
        assert!(matches!(err, InfographicError::DatasetShape(_)));
    }

    #[test]
    fn test_human_record_rejected() {
        let dataset = Dataset::embedded().unwrap();
        let mut records = dataset.records().to_vec();
        records[0] = Entity::Human(human());
        assert!(Roster::assemble(&records, human()).is_err());
    }
}
