//! Generate Sample Infographics
//!
//! Builds infographics for a few sample humans and writes them as HTML + Markdown.
//! Run with: cargo run --bin generate_sample_infographic [OUTPUT_DIR]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dino_infographic::formatters::{HtmlFormatter, MarkdownFormatter};
use dino_infographic::{HumanInput, InfographicBuilder, InfographicConfig};

const DEFAULT_OUTPUT_DIR: &str = "reports/infographic";

// (file stem, name, weight lbs, feet, inches, diet, location)
const SAMPLE_HUMANS: &[(&str, &str, f64, f64, f64, &str, &str)] = &[
    ("ada", "Ada", 130.0, 5.0, 6.0, "omnivore", "Europe"),
    ("rex", "Rex", 210.0, 6.0, 2.0, "carnivore", "North America"),
    ("kid", "Sam", 45.0, 3.0, 7.0, "herbivore", "Asia"),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    let output_dir = Path::new(&output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

    let config = InfographicConfig::from_env();
    let seed = config.seed.unwrap_or(1);
    let builder = InfographicBuilder::from_config(config)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for (stem, name, weight, feet, inches, diet, location) in SAMPLE_HUMANS {
        let input = HumanInput {
            name: name.to_string(),
            weight: *weight,
            feet: *feet,
            inches: *inches,
            diet: diet.to_string(),
            location: location.to_string(),
        };

        let infographic = builder.build(&input, &mut rng)?;
        let tiles = infographic.collect_tiles();

        let html_path = output_dir.join(format!("{}.html", stem));
        fs::write(&html_path, HtmlFormatter::grid_page(&tiles))
            .with_context(|| format!("Failed to write {}", html_path.display()))?;

        let md_path = output_dir.join(format!("{}.md", stem));
        fs::write(&md_path, MarkdownFormatter::format(&tiles))
            .with_context(|| format!("Failed to write {}", md_path.display()))?;

        tracing::info!("Wrote {} and {}", html_path.display(), md_path.display());
    }

    Ok(())
}
