use bolt_core::Point;

/// Dungeon distance: the longer axis plus half the shorter one.
///
/// This is the metric behind spell and missile ranges, and agrees with the
/// way [`trace_into`](crate::trace_into) charges diagonal moves.
#[inline]
pub fn distance(a: Point, b: Point) -> i32 {
    let dy = (a.y - b.y).abs();
    let dx = (a.x - b.x).abs();
    if dy > dx { dy + (dx >> 1) } else { dx + (dy >> 1) }
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
