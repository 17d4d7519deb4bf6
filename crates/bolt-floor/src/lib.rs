//! Dungeon floors for tracing projections.
//!
//! [`Floor`] stores terrain [`Feature`]s, monsters and the player, and answers
//! the [`TerrainOracle`](bolt_paths::TerrainOracle) queries the tracer asks.
//! Floors can be built cell by cell or parsed from ASCII maps (see
//! [`Floor::parse`]).

pub mod feature;
pub mod floor;
mod parse;

pub use feature::{Feature, FeatureFlags};
pub use floor::{Floor, FloorError, MonsterId};
