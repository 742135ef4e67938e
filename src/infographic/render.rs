//! Tile sink: the seam between tile generation and any view layer.
//!
//! The builder decides *what* each tile says; a `TileSink` decides how it is
//! displayed. Sinks hand back a handle per tile and the caller keeps the
//! roster-index -> handle binding.

use serde::Serialize;

use crate::infographic::types::EntityKind;

/// Fully resolved content for one grid slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    /// Grid position, 0..9 row-major
    pub slot: usize,
    /// Roster index of the entity shown
    pub roster_index: usize,
    pub kind: EntityKind,
    pub image_path: String,
    pub header: String,
    pub fact: Option<String>,
}

/// Receives tiles in display order.
pub trait TileSink {
    type Handle;

    fn create_tile(&mut self, slot: usize, roster_index: usize, kind: EntityKind) -> Self::Handle;
    fn set_image(&mut self, handle: &Self::Handle, image_path: &str);
    fn set_text(&mut self, handle: &Self::Handle, header: &str, fact: Option<&str>);
}

/// Roster index bound to the sink's handle for that entity's tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBinding<H> {
    pub roster_index: usize,
    pub handle: H,
}

/// Records every sink call as a `Tile`. Handles are positions in `tiles`.
#[derive(Debug, Clone, Default)]
pub struct TileCollector {
    tiles: Vec<Tile>,
}

impl TileCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}

impl TileSink for TileCollector {
    type Handle = usize;

    fn create_tile(&mut self, slot: usize, roster_index: usize, kind: EntityKind) -> usize {
        self.tiles.push(Tile {
            slot,
            roster_index,
            kind,
            image_path: String::new(),
            header: String::new(),
            fact: None,
        });
        self.tiles.len() - 1
    }

    fn set_image(&mut self, handle: &usize, image_path: &str) {
        if let Some(tile) = self.tiles.get_mut(*handle) {
            tile.image_path = image_path.to_string();
        }
    }

    fn set_text(&mut self, handle: &usize, header: &str, fact: Option<&str>) {
        if let Some(tile) = self.tiles.get_mut(*handle) {
            tile.header = header.to_string();
            tile.fact = fact.map(str::to_string);
        }
    }
}
