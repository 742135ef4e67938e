//! Infographic Integration Tests
//!
//! Runs the full pipeline (dataset -> validation -> roster -> order -> facts -> sink)
//! against the embedded dataset for many seeds.

use std::collections::HashSet;

use dino_infographic::formatters::{HtmlFormatter, JsonFormatter};
use dino_infographic::infographic::facts::FACT_PREFIX;
use dino_infographic::infographic::{HUMAN_INDEX, ROSTER_SIZE};
use dino_infographic::{
    Dataset, Entity, EntityKind, HumanForm, HumanInput, InfographicBuilder, InfographicConfig,
    InfographicError, TileSink,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn builder() -> InfographicBuilder {
    InfographicBuilder::new(Dataset::embedded().unwrap(), InfographicConfig::default())
}

fn rex() -> HumanInput {
    HumanInput {
        name: "Rex".to_string(),
        weight: 150.0,
        feet: 5.0,
        inches: 6.0,
        diet: "carnivore".to_string(),
        location: "North America".to_string(),
    }
}

#[test]
fn test_every_entity_rendered_once() {
    let builder = builder();
    for seed in 0..200 {
        let infographic = builder.build(&rex(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let tiles = infographic.collect_tiles();
        assert_eq!(tiles.len(), ROSTER_SIZE);

        let indices: HashSet<usize> = tiles.iter().map(|t| t.roster_index).collect();
        assert_eq!(indices.len(), ROSTER_SIZE, "seed {}", seed);

        let order = infographic.order();
        assert!(order.is_valid());
        assert_eq!(order.roster_index(HUMAN_INDEX), Some(HUMAN_INDEX));
        for tile in &tiles {
            assert_eq!(order.roster_index(tile.slot), Some(tile.roster_index));
        }
    }
}

#[test]
fn test_human_tile_is_name_only() {
    let builder = builder();
    for seed in 0..50 {
        let infographic = builder.build(&rex(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let humans: Vec<_> = infographic
            .tiles()
            .iter()
            .filter(|t| t.kind == EntityKind::Human)
            .collect();
        assert_eq!(humans.len(), 1);
        assert_eq!(humans[0].slot, HUMAN_INDEX);
        assert_eq!(humans[0].header, "Rex");
        assert!(humans[0].fact.is_none());
    }
}

#[test]
fn test_pigeon_tile_shows_stored_fact() {
    let builder = builder();
    let stored = builder
        .dataset()
        .records()
        .iter()
        .find_map(|e| match e {
            Entity::Pigeon(bird) => Some(bird.fact.clone()),
            _ => None,
        })
        .unwrap();

    for seed in 0..50 {
        let infographic = builder.build(&rex(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let pigeon = infographic
            .tiles()
            .iter()
            .find(|t| t.kind == EntityKind::Pigeon)
            .unwrap();
        assert_eq!(pigeon.fact.as_deref(), Some(format!("{}{}", FACT_PREFIX, stored).as_str()));
        assert_eq!(pigeon.image_path, "images/pigeon.png");
    }
}

#[test]
fn test_dinosaur_facts_cover_all_strategies() {
    let builder = builder();
    let mut given = false;
    let mut quantity = false;
    let mut quality = false;

    for seed in 0..100 {
        let infographic = builder.build(&rex(), &mut StdRng::seed_from_u64(seed)).unwrap();
        for tile in infographic.tiles().iter().filter(|t| t.kind == EntityKind::Dinosaur) {
            let fact = tile.fact.as_deref().unwrap();
            assert!(fact.starts_with(FACT_PREFIX));
            if fact.contains("than yours") || fact.contains("the same as yours") {
                quantity = true;
            } else if fact.contains("matches yours") || fact.contains("differs from yours") {
                quality = true;
            } else {
                given = true;
            }
        }
    }
    assert!(given && quantity && quality);
}

#[test]
fn test_validation_cases() {
    let builder = builder();
    let mut rng = StdRng::seed_from_u64(0);

    let mut no_name = rex();
    no_name.name = String::new();
    assert!(matches!(
        builder.build(&no_name, &mut rng),
        Err(InfographicError::InvalidInput)
    ));

    let mut no_weight = rex();
    no_weight.weight = 0.0;
    let err = builder.build(&no_weight, &mut rng).unwrap_err();
    assert_eq!(err.to_string(), "Enter valid Name, Height, or Weight");

    let infographic = builder.build(&rex(), &mut rng).unwrap();
    assert_eq!(infographic.roster().human().traits.height_in, 66.0);
}

/// Sink that fails the test if it is touched.
struct PanicSink;

impl TileSink for PanicSink {
    type Handle = ();

    fn create_tile(&mut self, _: usize, _: usize, _: EntityKind) -> Self::Handle {
        panic!("sink must not be called");
    }
    fn set_image(&mut self, _: &(), _: &str) {
        panic!("sink must not be called");
    }
    fn set_text(&mut self, _: &(), _: &str, _: Option<&str>) {
        panic!("sink must not be called");
    }
}

#[test]
fn test_invalid_input_never_reaches_sink() {
    let form = HumanForm {
        name: "Rex".to_string(),
        weight: "".to_string(),
        feet: "5".to_string(),
        ..Default::default()
    };
    let result = builder().build(&form.to_input(), &mut StdRng::seed_from_u64(0));
    if let Ok(infographic) = result {
        infographic.render_into(&mut PanicSink);
        panic!("blank weight should be rejected");
    }
}

#[test]
fn test_formatters_render_full_grid() {
    let infographic = builder().build(&rex(), &mut StdRng::seed_from_u64(8)).unwrap();
    let tiles = infographic.collect_tiles();

    let html = HtmlFormatter::grid_page(&tiles);
    assert_eq!(html.matches("class=\"grid-item").count(), ROSTER_SIZE);

    let json: serde_json::Value = serde_json::from_str(&JsonFormatter::format(&tiles).unwrap()).unwrap();
    assert_eq!(json["tiles"].as_array().unwrap().len(), ROSTER_SIZE);
    assert_eq!(json["tiles"][HUMAN_INDEX]["kind"], "human");
}
