//! Projection paths for grid-based dungeons.
//!
//! Bolts, beams, balls and line-of-sight checks all travel along the same
//! discrete line. This crate computes that line:
//!
//! - [`trace_into`] / [`projection_path`] / [`PathTracer`]: the cells a
//!   projection passes, with the [`StopReason`] that ended it
//! - [`projectable`]: whether a plain bolt reaches its target
//! - [`distance`]: the dungeon metric used for ranges
//!
//! Terrain and occupancy come from the caller through [`TerrainOracle`];
//! behaviour is selected with [`ProjectFlags`].
//!
//! ```
//! use bolt_core::Point;
//! use bolt_paths::{ProjectFlags, TerrainOracle, projection_path};
//!
//! struct Open;
//! impl TerrainOracle for Open {
//!     fn in_bounds(&self, _: Point) -> bool { true }
//!     fn projectable(&self, _: Point) -> bool { true }
//!     fn los(&self, _: Point) -> bool { true }
//!     fn stops_disintegration(&self, _: Point) -> bool { false }
//!     fn occupied(&self, _: Point) -> bool { false }
//! }
//!
//! let path = projection_path(&Open, Point::new(0, 0), Point::new(3, 3), 10, ProjectFlags::empty());
//! assert_eq!(path.cells(), &[Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]);
//! ```

mod config;
mod distance;
mod flags;
mod oracle;
mod project;
mod trace;

pub use config::{ARENA_MAX_RANGE, ConfigError, MAX_RANGE, ProjectConfig};
pub use distance::{chebyshev, distance};
pub use flags::ProjectFlags;
pub use oracle::TerrainOracle;
pub use project::{in_range, projectable};
pub use trace::{PathRequest, PathTracer, ProjectionPath, StopReason, projection_path, trace_into};
