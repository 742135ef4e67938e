//! Infographic Builder
//!
//! Main entry point for one form submission:
//! validate -> assemble roster -> generate display order -> pick facts -> tiles.
//!
//! Public API (consumed by api_server.rs and generate_sample_infographic.rs):
//! - InfographicBuilder::new(dataset, config) -> Self
//! - InfographicBuilder::build(input, rng) -> Result<Infographic, InfographicError>
//! - Infographic::render_into(sink) -> Vec<TileBinding<Handle>>

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::InfographicConfig;
use crate::data::Dataset;
use crate::error::InfographicError;
use crate::infographic::display_order::DisplayOrder;
use crate::infographic::facts::select_fact;
use crate::infographic::render::{Tile, TileBinding, TileCollector, TileSink};
use crate::infographic::roster::Roster;
use crate::infographic::validation::HumanInput;

/// Stateless apart from the immutable dataset and config; safe to share.
#[derive(Debug, Clone)]
pub struct InfographicBuilder {
    dataset: Dataset,
    config: InfographicConfig,
}

impl InfographicBuilder {
    pub fn new(dataset: Dataset, config: InfographicConfig) -> Self {
        Self { dataset, config }
    }

    /// Load the dataset named by `config` (or the embedded one).
    pub fn from_config(config: InfographicConfig) -> anyhow::Result<Self> {
        let dataset = Dataset::load_or_embedded(config.data_path.as_deref())?;
        Ok(Self::new(dataset, config))
    }

    pub fn config(&self) -> &InfographicConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Build with the configured seed if any, otherwise OS entropy.
    pub fn build_default(&self, input: &HumanInput) -> Result<Infographic, InfographicError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build(input, &mut rng)
    }

    /// Build one infographic. Fails before producing any tile if the input is invalid.
    pub fn build<R: Rng + ?Sized>(
        &self,
        input: &HumanInput,
        rng: &mut R,
    ) -> Result<Infographic, InfographicError> {
        let human = input.validate()?;
        let roster = Roster::assemble(self.dataset.records(), human)?;
        let order = DisplayOrder::generate(rng);

        let human = roster.human();
        let mut tiles = Vec::with_capacity(roster.len());
        for (slot, roster_index) in order.iter() {
            let Some(entity) = roster.get(roster_index) else {
                return Err(InfographicError::DatasetShape(format!(
                    "display order references missing roster index {}",
                    roster_index
                )));
            };
            tiles.push(Tile {
                slot,
                roster_index,
                kind: entity.kind(),
                image_path: self.config.image_path(&entity.image_stem()),
                header: entity.header().to_string(),
                fact: select_fact(entity, human, rng),
            });
        }

        tracing::debug!("Built infographic for {} ({} tiles)", human.name, tiles.len());
        Ok(Infographic { roster, order, tiles })
    }
}

/// Result of one submission: the roster, where each entity goes, and what it says.
#[derive(Debug, Clone, Serialize)]
pub struct Infographic {
    roster: Roster,
    order: DisplayOrder,
    tiles: Vec<Tile>,
}

impl Infographic {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn order(&self) -> &DisplayOrder {
        &self.order
    }

    /// Tiles in display order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Drive a sink in display order, returning each entity's handle.
    pub fn render_into<S: TileSink>(&self, sink: &mut S) -> Vec<TileBinding<S::Handle>> {
        self.tiles
            .iter()
            .map(|tile| {
                let handle = sink.create_tile(tile.slot, tile.roster_index, tile.kind);
                sink.set_image(&handle, &tile.image_path);
                sink.set_text(&handle, &tile.header, tile.fact.as_deref());
                TileBinding {
                    roster_index: tile.roster_index,
                    handle,
                }
            })
            .collect()
    }

    /// Render through a `TileCollector`; the usual path for the formatters.
    pub fn collect_tiles(&self) -> Vec<Tile> {
        let mut collector = TileCollector::new();
        self.render_into(&mut collector);
        collector.into_tiles()
    }
}
