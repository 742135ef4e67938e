//! Fact Selection
//!
//! One fact per tile, chosen by entity variant:
//! - Human: no fact, the tile shows the name only
//! - Pigeon: the stored fact
//! - Dinosaur: one of three strategies with equal probability
//!   1. the stored fact
//!   2. a weight/height comparison against the human
//!   3. a diet/location/era comparison against the human
//!
//! Formatting functions are deterministic; randomness is confined to
//! `choose_strategy`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::infographic::types::{Attribute, Creature, Entity, Human};

pub const FACT_PREFIX: &str = "Fact: ";

/// How a dinosaur's fact is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactStrategy {
    Given,
    Quantity(Attribute),
    Quality(Attribute),
}

impl FactStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            FactStrategy::Given => "given",
            FactStrategy::Quantity(_) => "quantity",
            FactStrategy::Quality(_) => "quality",
        }
    }
}

/// Pick a dinosaur strategy: 1/3 each, then a uniform attribute within the strategy.
pub fn choose_strategy<R: Rng + ?Sized>(rng: &mut R) -> FactStrategy {
    match rng.gen_range(0..3) {
        0 => FactStrategy::Given,
        1 => FactStrategy::Quantity(*Attribute::QUANTITIES.choose(rng).unwrap_or(&Attribute::Weight)),
        _ => FactStrategy::Quality(*Attribute::QUALITIES.choose(rng).unwrap_or(&Attribute::Diet)),
    }
}

/// Select and format the fact for one entity.
pub fn select_fact<R: Rng + ?Sized>(entity: &Entity, human: &Human, rng: &mut R) -> Option<String> {
    match entity {
        Entity::Human(_) => None,
        Entity::Pigeon(bird) => Some(given_fact(bird)),
        Entity::Dinosaur(dino) => {
            let strategy = choose_strategy(rng);
            tracing::debug!("{}: {:?}", dino.species, strategy);
            Some(format_fact(dino, human, strategy))
        }
    }
}

/// Format a dinosaur fact for an already-chosen strategy.
pub fn format_fact(dino: &Creature, human: &Human, strategy: FactStrategy) -> String {
    match strategy {
        FactStrategy::Given => given_fact(dino),
        FactStrategy::Quantity(attr) => compare_quantity(dino, human, attr),
        FactStrategy::Quality(attr) => compare_quality(dino, human, attr),
    }
}

pub fn given_fact(creature: &Creature) -> String {
    format!("{}{}", FACT_PREFIX, creature.fact)
}

/// Relative difference in whole percent: round(100 * (dino - human) / human).
///
/// `human` is strictly positive after validation.
pub fn relative_percent(dino: f64, human: f64) -> i64 {
    (100.0 * (dino - human) / human).round() as i64
}

/// Weight or height comparison. Falls back to the given fact for categorical attributes.
pub fn compare_quantity(dino: &Creature, human: &Human, attr: Attribute) -> String {
    let (Some(d), Some(h)) = (attr.quantity(&dino.traits), attr.quantity(&human.traits)) else {
        return given_fact(dino);
    };
    let unit = attr.unit().unwrap_or_default();
    let pct = relative_percent(d, h);

    let relation = match pct {
        p if p > 0 => format!("is {}% greater than", p),
        p if p < 0 => format!("is {}% less than", p.abs()),
        _ => "is the same as".to_string(),
    };

    format!(
        "{}The {}'s {} {} yours ({} {} vs {} {}).",
        FACT_PREFIX,
        dino.species,
        attr.label(),
        relation,
        d,
        unit,
        h,
        unit
    )
}

/// Containment match, case-insensitive. An empty human value never matches.
pub fn qualities_match(dino_value: &str, human_value: &str) -> bool {
    let needle = human_value.trim().to_lowercase();
    !needle.is_empty() && dino_value.trim().to_lowercase().contains(&needle)
}

/// Diet, location or era comparison. Falls back to the given fact for quantities.
pub fn compare_quality(dino: &Creature, human: &Human, attr: Attribute) -> String {
    let (Some(d), Some(h)) = (attr.quality(&dino.traits), attr.quality(&human.traits)) else {
        return given_fact(dino);
    };

    if qualities_match(d, h) {
        format!("{}The {}'s {} ({}) matches yours.", FACT_PREFIX, dino.species, attr.label(), d)
    } else {
        let shown = if h.trim().is_empty() { "not given" } else { h };
        format!(
            "{}The {}'s {} ({}) differs from yours ({}).",
            FACT_PREFIX,
            dino.species,
            attr.label(),
            d,
            shown
        )
    }
}
