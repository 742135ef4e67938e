//! Runtime configuration
//!
//! Read from environment variables with local-development defaults:
//! - `DATA_PATH`: dataset JSON file (embedded `data/dino.json` when unset)
//! - `IMAGE_DIR`: directory prefix for tile images (default `images`)
//! - `IMAGE_EXT`: image file extension (default `png`)
//! - `INFOGRAPHIC_SEED`: fixed RNG seed for reproducible grids
//! - `PORT`: HTTP port for the api server (default 3000)

use std::path::PathBuf;

pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_IMAGE_EXT: &str = "png";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfographicConfig {
    pub data_path: Option<PathBuf>,
    pub image_dir: String,
    pub image_ext: String,
    pub seed: Option<u64>,
    pub port: u16,
}

impl Default for InfographicConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            image_ext: DEFAULT_IMAGE_EXT.to_string(),
            seed: None,
            port: DEFAULT_PORT,
        }
    }
}

impl InfographicConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset; unparseable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_path: get("DATA_PATH").map(PathBuf::from),
            image_dir: get("IMAGE_DIR").unwrap_or(defaults.image_dir),
            image_ext: get("IMAGE_EXT")
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(defaults.image_ext),
            seed: get("INFOGRAPHIC_SEED").and_then(|s| s.trim().parse().ok()),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Image asset path for a tile, e.g. `images/triceratops.png`.
    pub fn image_path(&self, stem: &str) -> String {
        let dir = self.image_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}.{}", stem, self.image_ext)
        } else {
            format!("{}/{}.{}", dir, stem, self.image_ext)
        }
    }
}
