//! Projection path rasterization.
//!
//! A path is traced with integer arithmetic only: the major axis advances
//! one cell per step while an error accumulator decides when the minor axis
//! follows. Exact formulas matter here, since recorded gameplay traces
//! depend on the precise cells chosen.

use std::fmt;

use bolt_core::{GridError, PackedGrid, Point};

use crate::flags::ProjectFlags;
use crate::oracle::TerrainOracle;

/// Why a trace ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The path used up its range.
    Range,
    /// The path arrived at its target.
    Target,
    /// A disintegration-proof cell.
    DisintegrationBarrier,
    /// A cell that breaks line of sight.
    LineOfSight,
    /// A cell projections cannot pass.
    NotProjectable,
    /// The player or a monster.
    Occupant,
    /// The edge of the playable area.
    OutOfBounds,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Range => "range exhausted",
            Self::Target => "target reached",
            Self::DisintegrationBarrier => "disintegration barrier",
            Self::LineOfSight => "line of sight broken",
            Self::NotProjectable => "not projectable",
            Self::Occupant => "occupied",
            Self::OutOfBounds => "out of bounds",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Stepper
// ---------------------------------------------------------------------------

/// Integer line walker shared by the steep, shallow and diagonal cases.
///
/// The accumulator holds products of the two deltas, which need 64 bits
/// once coordinates are far apart; `i128` covers any pair of `i32` points.
struct Stepper {
    cur: Point,
    /// Unit step along the major axis (both axes when diagonal).
    major: Point,
    /// Unit step along the minor axis.
    minor: Point,
    frac: i128,
    m: i128,
    half: i128,
    full: i128,
    /// Number of minor-axis (diagonal) moves so far.
    k: i64,
    diagonal: bool,
}

impl Stepper {
    /// `None` when `from == to`.
    fn new(from: Point, to: Point) -> Option<Self> {
        let dy = i64::from(to.y) - i64::from(from.y);
        let dx = i64::from(to.x) - i64::from(from.x);
        let (ay, sy) = (i128::from(dy.abs()), if dy < 0 { -1 } else { 1 });
        let (ax, sx) = (i128::from(dx.abs()), if dx < 0 { -1 } else { 1 });

        let half = ay * ax;
        let full = half << 1;

        let (major, minor, m, diagonal) = if ay > ax {
            (Point::new(0, sy), Point::new(sx, 0), ax * ax * 2, false)
        } else if ax > ay {
            (Point::new(sx, 0), Point::new(0, sy), ay * ay * 2, false)
        } else if ax > 0 {
            (Point::new(sx, sy), Point::ZERO, 0, true)
        } else {
            return None;
        };

        // The first step heads towards `to`, so it stays within `i32`.
        let mut st = Self {
            cur: step(from, major)?,
            major,
            minor,
            frac: m,
            m,
            half,
            full,
            k: 0,
            diagonal,
        };
        st.carry()?;
        Some(st)
    }

    /// Apply a pending minor-axis move if the accumulator crossed the half
    /// threshold. `None` if the move leaves the coordinate space.
    #[inline]
    fn carry(&mut self) -> Option<()> {
        if self.frac > self.half {
            self.cur = step(self.cur, self.minor)?;
            self.frac -= self.full;
            self.k += 1;
        }
        Some(())
    }

    /// Move to the next cell. `None` if it lies outside the coordinate space.
    #[inline]
    fn advance(&mut self) -> Option<()> {
        if self.m != 0 {
            self.frac += self.m;
            self.carry()?;
        }
        self.cur = step(self.cur, self.major)?;
        Some(())
    }

    /// Diagonal moves taken once `n` cells have been emitted.
    #[inline]
    fn diagonal_steps(&self, n: i64) -> i64 {
        if self.diagonal { n } else { self.k }
    }
}

#[inline]
fn step(p: Point, d: Point) -> Option<Point> {
    Some(Point::new(p.x.checked_add(d.x)?, p.y.checked_add(d.y)?))
}

/// Checks run on each emitted cell, in order. Returns the first stop that
/// applies.
fn check_stop<O: TerrainOracle + ?Sized>(
    oracle: &O,
    p: Point,
    to: Point,
    cost: i64,
    range: i32,
    flags: ProjectFlags,
) -> Option<StopReason> {
    if cost >= i64::from(range) {
        return Some(StopReason::Range);
    }
    if !flags.contains(ProjectFlags::PASS_THROUGH) && p == to {
        return Some(StopReason::Target);
    }
    if flags.contains(ProjectFlags::STOP_AT_DISINTEGRATION_BARRIER) {
        if oracle.stops_disintegration(p) {
            return Some(StopReason::DisintegrationBarrier);
        }
    } else if flags.contains(ProjectFlags::REQUIRE_LINE_OF_SIGHT) {
        if !oracle.los(p) {
            return Some(StopReason::LineOfSight);
        }
    } else if !flags.contains(ProjectFlags::RAW_PATH) && !oracle.projectable(p) {
        return Some(StopReason::NotProjectable);
    }
    if flags.contains(ProjectFlags::STOP_ON_OCCUPANT) && oracle.occupied(p) {
        return Some(StopReason::Occupant);
    }
    if !oracle.in_bounds(p) {
        return Some(StopReason::OutOfBounds);
    }
    None
}

/// Trace the path from `from` towards `to` into `out`.
///
/// `out` is cleared first. The origin itself is never part of the path; the
/// first cell is adjacent to it. Returns the number of cells written and the
/// reason the trace ended, which is `None` only when `from == to`.
///
/// Diagonal moves count half towards `range`: the trace ends once
/// `cells + diagonal_moves / 2 >= range`. A non-positive `range` still emits
/// one cell. A trace that would step past the `i32` coordinate space stops
/// on its last representable cell with [`StopReason::OutOfBounds`].
pub fn trace_into<O: TerrainOracle + ?Sized>(
    oracle: &O,
    from: Point,
    to: Point,
    range: i32,
    flags: ProjectFlags,
    out: &mut Vec<Point>,
) -> (usize, Option<StopReason>) {
    out.clear();
    let Some(mut st) = Stepper::new(from, to) else {
        return (0, None);
    };

    let mut n: i64 = 0;
    loop {
        out.push(st.cur);
        n += 1;
        let cost = n + (st.diagonal_steps(n) >> 1);
        if let Some(reason) = check_stop(oracle, st.cur, to, cost, range, flags) {
            log::trace!("projection {from} -> {to} stopped at {} after {n} cells: {reason}", st.cur);
            return (out.len(), Some(reason));
        }
        if st.advance().is_none() {
            log::trace!("projection {from} -> {to} left the coordinate space at {}", st.cur);
            return (out.len(), Some(StopReason::OutOfBounds));
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectionPath
// ---------------------------------------------------------------------------

/// An owned projection path together with the reason it ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionPath {
    cells: Vec<Point>,
    stop: Option<StopReason>,
}

impl ProjectionPath {
    /// The traced cells, nearest to the origin first.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The final cell, where the effect lands.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Why the trace ended. `None` for the empty path.
    #[inline]
    pub fn stop(&self) -> Option<StopReason> {
        self.stop
    }

    /// Whether the path ends exactly on `p`.
    pub fn ends_at(&self, p: Point) -> bool {
        self.last() == Some(p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    /// The cells as packed grid codes.
    pub fn packed(&self) -> Result<Vec<PackedGrid>, GridError> {
        self.cells.iter().map(|&p| PackedGrid::new(p)).collect()
    }

    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }
}

impl AsRef<[Point]> for ProjectionPath {
    fn as_ref(&self) -> &[Point] {
        &self.cells
    }
}

impl IntoIterator for ProjectionPath {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectionPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Trace a projection and return an owned path.
pub fn projection_path<O: TerrainOracle + ?Sized>(
    oracle: &O,
    from: Point,
    to: Point,
    range: i32,
    flags: ProjectFlags,
) -> ProjectionPath {
    let mut cells = Vec::new();
    let (_, stop) = trace_into(oracle, from, to, range, flags, &mut cells);
    ProjectionPath { cells, stop }
}

// ---------------------------------------------------------------------------
// PathRequest
// ---------------------------------------------------------------------------

/// A stored trace query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest {
    pub from: Point,
    pub to: Point,
    pub range: i32,
    pub flags: ProjectFlags,
}

impl PathRequest {
    pub fn new(from: Point, to: Point, range: i32, flags: ProjectFlags) -> Self {
        Self { from, to, range, flags }
    }

    pub fn trace<O: TerrainOracle + ?Sized>(&self, oracle: &O) -> ProjectionPath {
        projection_path(oracle, self.from, self.to, self.range, self.flags)
    }
}

// ---------------------------------------------------------------------------
// PathTracer
// ---------------------------------------------------------------------------

/// Reusable tracer.
///
/// `PathTracer` keeps its cell buffer between calls so that repeated traces
/// (one per monster per turn, say) allocate nothing after warm-up.
#[derive(Debug, Clone, Default)]
pub struct PathTracer {
    buf: Vec<Point>,
    stop: Option<StopReason>,
}

impl PathTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracer whose buffer already fits paths of `range` cells.
    pub fn with_range(range: i32) -> Self {
        Self {
            buf: Vec::with_capacity(range.max(1) as usize),
            stop: None,
        }
    }

    /// Trace from `from` towards `to`. See [`trace_into`].
    pub fn trace<O: TerrainOracle + ?Sized>(
        &mut self,
        oracle: &O,
        from: Point,
        to: Point,
        range: i32,
        flags: ProjectFlags,
    ) -> &[Point] {
        let (_, stop) = trace_into(oracle, from, to, range, flags, &mut self.buf);
        self.stop = stop;
        &self.buf
    }

    /// Cells of the last trace.
    pub fn path(&self) -> &[Point] {
        &self.buf
    }

    /// Why the last trace ended.
    pub fn last_stop(&self) -> Option<StopReason> {
        self.stop
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn request_round_trip() {
        let req = PathRequest::new(
            Point::new(1, 2),
            Point::new(7, 3),
            18,
            ProjectFlags::STOP_ON_OCCUPANT,
        );
        let json = serde_json::to_string(&req).unwrap();
        let back: PathRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
