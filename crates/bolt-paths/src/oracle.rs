use bolt_core::Point;

/// Read-only view of the dungeon consulted while tracing a projection.
///
/// Every query must answer for any point, including points outside the
/// allocated map: report such cells as blocking and not in bounds rather
/// than panicking.
pub trait TerrainOracle {
    /// Whether `p` lies inside the playable area.
    fn in_bounds(&self, p: Point) -> bool;

    /// Whether a projection may pass through `p`.
    fn projectable(&self, p: Point) -> bool;

    /// Whether line of sight continues through `p`.
    fn los(&self, p: Point) -> bool;

    /// Whether `p` stops a disintegration effect.
    fn stops_disintegration(&self, p: Point) -> bool;

    /// Whether the player or a monster stands on `p`.
    fn occupied(&self, p: Point) -> bool;
}

impl<T: TerrainOracle + ?Sized> TerrainOracle for &T {
    fn in_bounds(&self, p: Point) -> bool {
        (**self).in_bounds(p)
    }

    fn projectable(&self, p: Point) -> bool {
        (**self).projectable(p)
    }

    fn los(&self, p: Point) -> bool {
        (**self).los(p)
    }

    fn stops_disintegration(&self, p: Point) -> bool {
        (**self).stops_disintegration(p)
    }

    fn occupied(&self, p: Point) -> bool {
        (**self).occupied(p)
    }
}
