//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Dungeon cells are addressed by column (`x`) and row (`y`). Rows grow
//! downward, matching the way floors are drawn.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A dungeon grid coordinate. `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point from a column and a row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    ///
    /// A point is not adjacent to itself.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let d = other - self;
        d != Self::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1
    }

    /// All eight neighbours, clockwise from north.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Return a range with its corners shifted by the given deltas.
    ///
    /// Shrinking past zero area yields the default (empty) range.
    #[inline]
    pub fn shift(self, dx0: i32, dy0: i32, dx1: i32, dy1: i32) -> Self {
        let r = Self {
            min: self.min.shift(dx0, dy0),
            max: self.max.shift(dx1, dy1),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 3), Point::new(0, 5));
    }

    #[test]
    fn adjacency() {
        let p = Point::new(4, 4);
        for n in p.neighbors_8() {
            assert!(p.is_adjacent(n), "{n} should touch {p}");
        }
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(6, 4)));
        assert!(!p.is_adjacent(Point::new(5, 2)));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_shift_shrinks_to_interior() {
        let r = Range::new(0, 0, 10, 6);
        assert_eq!(r.shift(1, 1, -1, -1), Range::new(1, 1, 9, 5));
        assert!(Range::new(0, 0, 2, 2).shift(1, 1, -1, -1).is_empty());
    }

    #[test]
    fn range_iter_row_major() {
        let pts: Vec<_> = Range::new(0, 0, 3, 2).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(Range::default().iter().count(), 0);
    }
}
