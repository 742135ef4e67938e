use crate::formatters::html::GRID_COLUMNS;
use crate::infographic::Tile;

/// Markdown formatter for tiles (used by the sample generator)
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Grid as a markdown table, one row per grid row, followed by a slot list.
    pub fn format(tiles: &[Tile]) -> String {
        let mut md = String::with_capacity(2048);
        md.push_str("# Dinosaur Infographic\n\n");

        md.push_str(&format!("|{}\n", " |".repeat(GRID_COLUMNS)));
        md.push_str(&format!("|{}\n", "---|".repeat(GRID_COLUMNS)));
        for row in tiles.chunks(GRID_COLUMNS) {
            md.push('|');
            for tile in row {
                md.push_str(&format!(" **{}** |", escape_cell(&tile.header)));
            }
            md.push('\n');
        }

        md.push_str("\n## Tiles\n\n");
        for tile in tiles {
            md.push_str(&format!(
                "{}. **{}** ({}) `{}`",
                tile.slot + 1,
                tile.header,
                tile.kind.label(),
                tile.image_path
            ));
            if let Some(fact) = &tile.fact {
                md.push_str(&format!("\n   {}", fact));
            }
            md.push('\n');
        }
        md
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
