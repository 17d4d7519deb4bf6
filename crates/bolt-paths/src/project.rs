//! Queries built on top of [`trace_into`](crate::trace_into).

use bolt_core::Point;

use crate::distance::distance;
use crate::flags::ProjectFlags;
use crate::oracle::TerrainOracle;
use crate::trace::PathTracer;

/// Whether a plain bolt fired from `from` would land on `to`.
///
/// A cell is always projectable from itself.
pub fn projectable<O: TerrainOracle + ?Sized>(oracle: &O, from: Point, to: Point, range: i32) -> bool {
    PathTracer::new().projectable(oracle, from, to, range)
}

/// Whether `to` lies within `range` of `from` by [`distance`].
#[inline]
pub fn in_range(from: Point, to: Point, range: i32) -> bool {
    distance(from, to) <= range
}

impl PathTracer {
    /// Buffer-reusing form of [`projectable`].
    pub fn projectable<O: TerrainOracle + ?Sized>(
        &mut self,
        oracle: &O,
        from: Point,
        to: Point,
        range: i32,
    ) -> bool {
        match self.trace(oracle, from, to, range, ProjectFlags::empty()).last() {
            None => true,
            Some(&last) => last == to,
        }
    }
}
