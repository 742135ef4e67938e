//! Dinosaur Infographic
//!
//! Builds a 3x3 grid comparing a human against a fixed roster of dinosaurs
//! (and one pigeon) loaded from a static dataset.
//!
//! - `data`: dataset loading (embedded JSON or file)
//! - `infographic/`: validation, roster, display order, facts, builder, sink
//! - `formatters/`: HTML, JSON and Markdown sinks
//! - `api_server`: axum form server (feature `api`)

pub mod config;
pub mod data;
pub mod error;
pub mod formatters;
pub mod infographic;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::InfographicConfig;
pub use data::Dataset;
pub use error::InfographicError;
pub use infographic::{
    DisplayOrder, Entity, EntityKind, HumanForm, HumanInput, Infographic, InfographicBuilder,
    Roster, Tile, TileCollector, TileSink,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
