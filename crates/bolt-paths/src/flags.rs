use bitflags::bitflags;

bitflags! {
    /// Behaviour switches for a projection trace.
    ///
    /// The empty set is the ordinary bolt: stop at the target, stop on the
    /// first cell that does not let projections through.
    ///
    /// Terrain checks are exclusive and tried in a fixed order:
    /// `STOP_AT_DISINTEGRATION_BARRIER`, then `REQUIRE_LINE_OF_SIGHT`, then
    /// the projectability check unless `RAW_PATH` is set. `STOP_ON_OCCUPANT`
    /// is an extra stop on top of whichever terrain check applies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProjectFlags: u8 {
        /// Keep going past the target until something else stops the path.
        const PASS_THROUGH = 0x01;
        /// Only cells that resist disintegration stop the path.
        const STOP_AT_DISINTEGRATION_BARRIER = 0x02;
        /// Cells that break line of sight stop the path.
        const REQUIRE_LINE_OF_SIGHT = 0x04;
        /// Ignore terrain entirely.
        const RAW_PATH = 0x08;
        /// Stop on the first cell holding the player or a monster.
        const STOP_ON_OCCUPANT = 0x10;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProjectFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProjectFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(ProjectFlags::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain_bolt() {
        assert_eq!(ProjectFlags::default(), ProjectFlags::empty());
    }

    #[test]
    fn flags_are_distinct_bits() {
        let all = [
            ProjectFlags::PASS_THROUGH,
            ProjectFlags::STOP_AT_DISINTEGRATION_BARRIER,
            ProjectFlags::REQUIRE_LINE_OF_SIGHT,
            ProjectFlags::RAW_PATH,
            ProjectFlags::STOP_ON_OCCUPANT,
        ];
        let combined = all.iter().fold(ProjectFlags::empty(), |acc, f| acc | *f);
        assert_eq!(combined, ProjectFlags::all());
        assert_eq!(combined.bits().count_ones(), 5);
    }
}
