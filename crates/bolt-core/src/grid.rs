//! Compact 16-bit cell codes.
//!
//! A [`PackedGrid`] stores a cell as `256 * y + x`, the form in which
//! classic dungeon code keeps projection paths and monster target lists.
//! Both coordinates must therefore lie in `0..256`.

use std::fmt;

use thiserror::Error;

use crate::geom::Point;

/// Largest coordinate (exclusive) a [`PackedGrid`] can hold on either axis.
pub const PACKED_GRID_SPAN: i32 = 256;

/// Errors from converting points into packed cell codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate does not fit in a packed cell code.
    #[error("point {0} does not fit in a packed grid (coordinates must be in 0..256)")]
    OutOfRange(Point),
}

/// A dungeon cell packed as `256 * y + x`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackedGrid(u16);

impl PackedGrid {
    /// Pack a point.
    pub fn new(p: Point) -> Result<Self, GridError> {
        let span = 0..PACKED_GRID_SPAN;
        if !span.contains(&p.x) || !span.contains(&p.y) {
            return Err(GridError::OutOfRange(p));
        }
        Ok(Self((p.y * PACKED_GRID_SPAN + p.x) as u16))
    }

    /// Wrap a raw code. Every `u16` decodes to a valid point.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The row.
    #[inline]
    pub const fn y(self) -> i32 {
        (self.0 / PACKED_GRID_SPAN as u16) as i32
    }

    /// The column.
    #[inline]
    pub const fn x(self) -> i32 {
        (self.0 % PACKED_GRID_SPAN as u16) as i32
    }

    /// Unpack into a point.
    #[inline]
    pub const fn point(self) -> Point {
        Point::new(self.x(), self.y())
    }
}

impl TryFrom<Point> for PackedGrid {
    type Error = GridError;

    fn try_from(p: Point) -> Result<Self, GridError> {
        Self::new(p)
    }
}

impl From<PackedGrid> for Point {
    fn from(g: PackedGrid) -> Self {
        g.point()
    }
}

impl From<PackedGrid> for u16 {
    fn from(g: PackedGrid) -> Self {
        g.0
    }
}

impl fmt::Display for PackedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_row_major() {
        let g = PackedGrid::new(Point::new(10, 5)).unwrap();
        assert_eq!(g.raw(), 5 * 256 + 10);
        assert_eq!(g.x(), 10);
        assert_eq!(g.y(), 5);
        assert_eq!(g.point(), Point::new(10, 5));
    }

    #[test]
    fn corners_fit() {
        assert_eq!(PackedGrid::new(Point::ZERO).unwrap().raw(), 0);
        let far = PackedGrid::new(Point::new(255, 255)).unwrap();
        assert_eq!(u16::from(far), u16::MAX);
        assert_eq!(Point::from(far), Point::new(255, 255));
    }

    #[test]
    fn rejects_out_of_range() {
        for p in [Point::new(-1, 0), Point::new(0, -1), Point::new(256, 3), Point::new(3, 256)] {
            assert_eq!(PackedGrid::try_from(p), Err(GridError::OutOfRange(p)));
        }
    }

    #[test]
    fn error_message_names_point() {
        let e = PackedGrid::new(Point::new(300, 1)).unwrap_err();
        assert!(e.to_string().contains("(300, 1)"));
    }
}
