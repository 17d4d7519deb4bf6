//! **bolt-core**: grid geometry shared by the *bolt* crates.
//!
//! Provides the dungeon coordinate type [`Point`], half-open rectangles
//! ([`Range`]) and the 16-bit packed cell code [`PackedGrid`].

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{GridError, PACKED_GRID_SPAN, PackedGrid};
