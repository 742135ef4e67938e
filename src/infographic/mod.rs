//! Infographic Generator Module
//!
//! Turns one form submission into nine tiles.
//!
//! ## Pipeline
//! 1. Validation - name non-empty, weight > 0, 12 * feet + inches > 0
//! 2. Roster - eight dataset records with the human pinned at index 4
//! 3. Display order - shuffled grid slots, human fixed at the centre
//! 4. Facts - stored fact or a comparison against the human
//! 5. Render - tiles handed to a `TileSink` in display order

pub mod builder;
pub mod display_order;
pub mod facts;
pub mod render;
pub mod roster;
pub mod types;
pub mod validation;

pub use builder::{Infographic, InfographicBuilder};
pub use display_order::DisplayOrder;
pub use facts::FactStrategy;
pub use render::{Tile, TileBinding, TileCollector, TileSink};
pub use roster::{Roster, HUMAN_INDEX, ROSTER_SIZE};
pub use types::{Attribute, Creature, Entity, EntityKind, Human, Traits};
pub use validation::{HumanForm, HumanInput};
