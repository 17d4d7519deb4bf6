//! A dungeon floor: terrain, monsters and the player.
//!
//! [`Floor`] is a plain owned grid implementing
//! [`TerrainOracle`](bolt_paths::TerrainOracle), so projections can be traced
//! over it directly.

use std::fmt;
use std::num::NonZeroU16;

use bolt_core::{Point, Range};
use bolt_paths::TerrainOracle;
use thiserror::Error;

use crate::feature::Feature;

/// Index of a monster standing on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonsterId(NonZeroU16);

impl MonsterId {
    /// `None` for zero, which never names a monster.
    pub const fn new(idx: u16) -> Option<Self> {
        match NonZeroU16::new(idx) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Errors from building or editing a [`Floor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("floor map is empty")]
    Empty,
    #[error("floor map line {line} is {found} cells wide, expected {expected}")]
    InconsistentSize { line: usize, expected: usize, found: usize },
    #[error("floor map contains invalid rune {ch:?} at {pos}")]
    InvalidRune { ch: char, pos: Point },
    #[error("floor map places more than one player")]
    DuplicatePlayer,
    #[error("floor map holds more monsters than can be numbered")]
    TooManyMonsters,
    #[error("{0} is outside the floor")]
    OutsideFloor(Point),
    #[error("{0} is already occupied")]
    Occupied(Point),
    #[error("floor of {width}x{height} cells holds {found} cells of data")]
    SizeMismatch { width: i32, height: i32, found: usize },
}

/// A rectangular dungeon level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FloorRepr"))]
pub struct Floor {
    width: i32,
    height: i32,
    features: Vec<Feature>,
    monsters: Vec<Option<MonsterId>>,
    player: Option<Point>,
}

impl Floor {
    /// Create a floor of plain [`Feature::Floor`] cells. Negative sizes are
    /// treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = cell_count(width, height);
        Self {
            width,
            height,
            features: vec![Feature::Floor; len],
            monsters: vec![None; len],
            player: None,
        }
    }

    /// Every stored cell, border included.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The playable interior: everything but the outermost ring of cells.
    pub fn interior(&self) -> Range {
        self.bounds().shift(1, 1, -1, -1)
    }

    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is a stored cell.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// The feature at `p`, or `None` outside the floor.
    pub fn at(&self, p: Point) -> Option<Feature> {
        self.idx(p).map(|i| self.features[i])
    }

    /// Set the feature at `p`. Does nothing outside the floor.
    pub fn set(&mut self, p: Point, f: Feature) {
        if let Some(i) = self.idx(p) {
            self.features[i] = f;
        }
    }

    pub fn fill(&mut self, f: Feature) {
        self.features.fill(f);
    }

    /// Set every cell from a function of its position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Feature) {
        for (p, cell) in self.bounds().iter().zip(self.features.iter_mut()) {
            *cell = f(p);
        }
    }

    /// Surround the floor with permanent wall.
    pub fn wall_border(&mut self) {
        let interior = self.interior();
        for p in self.bounds() {
            if !interior.contains(p) {
                self.set(p, Feature::Permanent);
            }
        }
    }

    pub fn player(&self) -> Option<Point> {
        self.player
    }

    /// Move the player, or remove them with `None`.
    pub fn set_player(&mut self, p: Option<Point>) -> Result<(), FloorError> {
        if let Some(p) = p {
            if !self.contains(p) {
                return Err(FloorError::OutsideFloor(p));
            }
        }
        self.player = p;
        Ok(())
    }

    pub fn monster_at(&self, p: Point) -> Option<MonsterId> {
        self.idx(p).and_then(|i| self.monsters[i])
    }

    /// Put a monster on `p`, which must be free of other monsters.
    pub fn place_monster(&mut self, p: Point, id: MonsterId) -> Result<(), FloorError> {
        let i = self.idx(p).ok_or(FloorError::OutsideFloor(p))?;
        if self.monsters[i].is_some() {
            return Err(FloorError::Occupied(p));
        }
        self.monsters[i] = Some(id);
        Ok(())
    }

    pub fn remove_monster(&mut self, p: Point) -> Option<MonsterId> {
        let i = self.idx(p)?;
        self.monsters[i].take()
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.iter().filter(|m| m.is_some()).count()
    }

    /// Iterate over `(Point, Feature)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Feature)> + '_ {
        self.bounds().iter().zip(self.features.iter().copied())
    }

    /// Draw the floor as text, marking `path` cells with `*`.
    ///
    /// The player and monsters are drawn over the path.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| (0..self.width).map(|x| self.rune_at(Point::new(x, y))).collect())
            .collect();
        for &p in path {
            if self.contains(p) && !self.occupied(p) {
                rows[p.y as usize][p.x as usize] = '*';
            }
        }
        let lines: Vec<String> = rows.into_iter().map(String::from_iter).collect();
        lines.join("\n")
    }

    fn rune_at(&self, p: Point) -> char {
        if self.player == Some(p) {
            '@'
        } else if self.monster_at(p).is_some() {
            'm'
        } else {
            self.at(p).map_or(' ', Feature::rune)
        }
    }
}

/// Cells in a `width` by `height` floor. Both must be non-negative.
fn cell_count(width: i32, height: i32) -> usize {
    width as usize * height as usize
}

/// Unchecked serialized form of a [`Floor`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FloorRepr {
    width: i32,
    height: i32,
    features: Vec<Feature>,
    monsters: Vec<Option<MonsterId>>,
    player: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<FloorRepr> for Floor {
    type Error = FloorError;

    fn try_from(r: FloorRepr) -> Result<Self, FloorError> {
        let expected = if r.width < 0 || r.height < 0 { None } else { Some(cell_count(r.width, r.height)) };
        for found in [r.features.len(), r.monsters.len()] {
            if expected != Some(found) {
                return Err(FloorError::SizeMismatch {
                    width: r.width,
                    height: r.height,
                    found,
                });
            }
        }
        let mut floor = Self {
            width: r.width,
            height: r.height,
            features: r.features,
            monsters: r.monsters,
            player: None,
        };
        floor.set_player(r.player)?;
        Ok(floor)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

impl TerrainOracle for Floor {
    fn in_bounds(&self, p: Point) -> bool {
        self.interior().contains(p)
    }

    fn projectable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Feature::projectable)
    }

    fn los(&self, p: Point) -> bool {
        self.at(p).is_some_and(Feature::los)
    }

    fn stops_disintegration(&self, p: Point) -> bool {
        self.at(p).is_none_or(Feature::stops_disintegration)
    }

    fn occupied(&self, p: Point) -> bool {
        self.player == Some(p) || self.monster_at(p).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u16) -> MonsterId {
        MonsterId::new(n).unwrap()
    }

    #[test]
    fn new_and_size() {
        let f = Floor::new(10, 5);
        assert_eq!(f.size(), Point::new(10, 5));
        assert_eq!(f.iter().count(), 50);
        assert_eq!(f.at(Point::new(9, 4)), Some(Feature::Floor));
        assert_eq!(f.at(Point::new(10, 4)), None);
        assert_eq!(Floor::new(-3, 4).size(), Point::new(0, 4));
    }

    #[test]
    fn set_outside_is_ignored() {
        let mut f = Floor::new(4, 4);
        f.set(Point::new(2, 3), Feature::Granite);
        f.set(Point::new(-1, 3), Feature::Granite);
        assert_eq!(f.at(Point::new(2, 3)), Some(Feature::Granite));
        assert_eq!(f.iter().filter(|&(_, c)| c == Feature::Granite).count(), 1);
    }

    #[test]
    fn fill_and_fill_fn() {
        let mut f = Floor::new(4, 3);
        f.fill(Feature::Granite);
        assert!(f.iter().all(|(_, c)| c == Feature::Granite));
        f.fill_fn(|p| if p.x == p.y { Feature::Floor } else { Feature::Rubble });
        assert_eq!(f.at(Point::new(2, 2)), Some(Feature::Floor));
        assert_eq!(f.at(Point::new(3, 2)), Some(Feature::Rubble));
    }

    #[test]
    fn interior_excludes_border() {
        let f = Floor::new(6, 5);
        assert!(!f.in_bounds(Point::new(0, 2)));
        assert!(!f.in_bounds(Point::new(5, 2)));
        assert!(!f.in_bounds(Point::new(2, 4)));
        assert!(f.in_bounds(Point::new(1, 1)));
        assert!(f.in_bounds(Point::new(4, 3)));
    }

    #[test]
    fn wall_border_keeps_interior() {
        let mut f = Floor::new(5, 4);
        f.set(Point::new(2, 2), Feature::Rubble);
        f.wall_border();
        assert_eq!(f.at(Point::new(0, 0)), Some(Feature::Permanent));
        assert_eq!(f.at(Point::new(4, 3)), Some(Feature::Permanent));
        assert_eq!(f.at(Point::new(2, 2)), Some(Feature::Rubble));
        assert_eq!(f.at(Point::new(1, 1)), Some(Feature::Floor));
    }

    #[test]
    fn monsters() {
        let mut f = Floor::new(5, 5);
        let p = Point::new(2, 2);
        f.place_monster(p, id(7)).unwrap();
        assert_eq!(f.monster_at(p), Some(id(7)));
        assert_eq!(f.place_monster(p, id(8)), Err(FloorError::Occupied(p)));
        assert_eq!(
            f.place_monster(Point::new(9, 9), id(8)),
            Err(FloorError::OutsideFloor(Point::new(9, 9)))
        );
        assert_eq!(f.monster_count(), 1);
        assert!(f.occupied(p));
        assert_eq!(f.remove_monster(p), Some(id(7)));
        assert!(!f.occupied(p));
        assert_eq!(f.monster_count(), 0);
    }

    #[test]
    fn monster_id_zero_is_none() {
        assert!(MonsterId::new(0).is_none());
        assert_eq!(id(3).get(), 3);
        assert_eq!(id(3).to_string(), "m3");
    }

    #[test]
    fn player_occupies() {
        let mut f = Floor::new(5, 5);
        f.set_player(Some(Point::new(1, 3))).unwrap();
        assert!(f.occupied(Point::new(1, 3)));
        assert_eq!(
            f.set_player(Some(Point::new(5, 0))),
            Err(FloorError::OutsideFloor(Point::new(5, 0)))
        );
        assert_eq!(f.player(), Some(Point::new(1, 3)));
        f.set_player(None).unwrap();
        assert!(!f.occupied(Point::new(1, 3)));
    }

    #[test]
    fn oracle_is_total_outside_storage() {
        let f = Floor::new(3, 3);
        let far = Point::new(-5, 40);
        assert!(!f.in_bounds(far));
        assert!(!f.projectable(far));
        assert!(!f.los(far));
        assert!(f.stops_disintegration(far));
        assert!(!f.occupied(far));
    }

    #[test]
    fn render_marks_path_under_occupants() {
        let mut f = Floor::new(5, 3);
        f.place_monster(Point::new(3, 1), id(1)).unwrap();
        let s = f.render_path(&[Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)]);
        assert_eq!(s, ".....\n.**m.\n.....");
    }
}
