//! Building floors from ASCII maps.
//!
//! Each character is one cell; every line must have the same width.
//! Leading and trailing whitespace around the whole map is ignored.
//!
//! | Rune | Cell |
//! |---|---|
//! | `.` | floor |
//! | `#` | granite wall |
//! | `X` | permanent wall |
//! | `+` | closed door |
//! | `'` | open door |
//! | `:` | rubble |
//! | `=` | glass wall |
//! | `@` | the player, on floor |
//! | `m` | a monster, on floor |
//!
//! Monsters are numbered from 1 in reading order.

use std::str::FromStr;

use bolt_core::Point;

use crate::feature::Feature;
use crate::floor::{Floor, FloorError, MonsterId};

impl Floor {
    /// Parse an ASCII map.
    pub fn parse(s: &str) -> Result<Floor, FloorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FloorError::Empty);
        }
        let lines: Vec<&str> = s.lines().collect();
        let width = lines[0].chars().count();
        for (line, l) in lines.iter().enumerate() {
            let found = l.chars().count();
            if found != width {
                return Err(FloorError::InconsistentSize {
                    line,
                    expected: width,
                    found,
                });
            }
        }

        let mut floor = Floor::new(width as i32, lines.len() as i32);
        let mut next_monster: u16 = 1;
        for (y, l) in lines.iter().enumerate() {
            for (x, ch) in l.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '@' => {
                        if floor.player().is_some() {
                            return Err(FloorError::DuplicatePlayer);
                        }
                        floor.set_player(Some(p))?;
                    }
                    'm' => {
                        let id = MonsterId::new(next_monster).ok_or(FloorError::TooManyMonsters)?;
                        floor.place_monster(p, id)?;
                        next_monster = next_monster.wrapping_add(1);
                    }
                    _ => {
                        let f = Feature::from_rune(ch).ok_or(FloorError::InvalidRune { ch, pos: p })?;
                        floor.set(p, f);
                    }
                }
            }
        }
        log::debug!(
            "parsed {}x{} floor with {} monsters",
            floor.width(),
            floor.height(),
            floor.monster_count()
        );
        Ok(floor)
    }
}

impl FromStr for Floor {
    type Err = FloorError;

    fn from_str(s: &str) -> Result<Self, FloorError> {
        Floor::parse(s)
    }
}
