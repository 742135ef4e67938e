use serde::Serialize;

use crate::infographic::Tile;

/// JSON body for the infographic API
#[derive(Debug, Serialize)]
pub struct TileGrid<'a> {
    pub columns: usize,
    pub tiles: &'a [Tile],
}

/// JSON formatter for tiles
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format tiles as pretty-printed JSON
    pub fn format(tiles: &[Tile]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::grid(tiles))
    }

    /// Format tiles as compact JSON (no whitespace)
    pub fn format_compact(tiles: &[Tile]) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Self::grid(tiles))
    }

    pub fn grid(tiles: &[Tile]) -> TileGrid<'_> {
        TileGrid {
            columns: super::html::GRID_COLUMNS,
            tiles,
        }
    }
}
