//! Terrain features and the flags that drive projection.

use bitflags::bitflags;

bitflags! {
    /// Terrain properties consulted by projections.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FeatureFlags: u8 {
        /// Sight passes through.
        const LOS = 0x01;
        /// Bolts and beams pass through.
        const PROJECT = 0x02;
        /// Disintegration destroys it.
        const HURT_DISI = 0x04;
        /// Cannot be altered by any means.
        const PERMANENT = 0x08;
    }
}

/// A terrain feature occupying one dungeon cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    #[default]
    Floor,
    Granite,
    Permanent,
    ClosedDoor,
    OpenDoor,
    Rubble,
    GlassWall,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Floor,
        Feature::Granite,
        Feature::Permanent,
        Feature::ClosedDoor,
        Feature::OpenDoor,
        Feature::Rubble,
        Feature::GlassWall,
    ];

    pub const fn flags(self) -> FeatureFlags {
        match self {
            Feature::Floor | Feature::OpenDoor => FeatureFlags::LOS.union(FeatureFlags::PROJECT),
            Feature::Granite | Feature::ClosedDoor | Feature::Rubble => FeatureFlags::HURT_DISI,
            Feature::Permanent => FeatureFlags::PERMANENT,
            Feature::GlassWall => FeatureFlags::LOS.union(FeatureFlags::HURT_DISI),
        }
    }

    #[inline]
    pub const fn los(self) -> bool {
        self.flags().contains(FeatureFlags::LOS)
    }

    #[inline]
    pub const fn projectable(self) -> bool {
        self.flags().contains(FeatureFlags::PROJECT)
    }

    /// Whether a disintegration effect halts here: anything that blocks
    /// projections and is either permanent or immune to disintegration.
    pub const fn stops_disintegration(self) -> bool {
        let f = self.flags();
        !f.contains(FeatureFlags::PROJECT)
            && (!f.contains(FeatureFlags::HURT_DISI) || f.contains(FeatureFlags::PERMANENT))
    }

    /// Map character.
    pub const fn rune(self) -> char {
        match self {
            Feature::Floor => '.',
            Feature::Granite => '#',
            Feature::Permanent => 'X',
            Feature::ClosedDoor => '+',
            Feature::OpenDoor => '\'',
            Feature::Rubble => ':',
            Feature::GlassWall => '=',
        }
    }

    pub fn from_rune(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.rune() == ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runes_round_trip() {
        for f in Feature::ALL {
            assert_eq!(Feature::from_rune(f.rune()), Some(f));
        }
        assert_eq!(Feature::from_rune('?'), None);
    }

    #[test]
    fn open_cells_pass_everything() {
        for f in [Feature::Floor, Feature::OpenDoor] {
            assert!(f.los());
            assert!(f.projectable());
            assert!(!f.stops_disintegration());
        }
    }

    #[test]
    fn disintegration_cuts_through_rock_but_not_permanent_walls() {
        assert!(!Feature::Granite.stops_disintegration());
        assert!(!Feature::Rubble.stops_disintegration());
        assert!(!Feature::ClosedDoor.stops_disintegration());
        assert!(Feature::Permanent.stops_disintegration());
    }

    #[test]
    fn glass_lets_sight_but_not_bolts_through() {
        assert!(Feature::GlassWall.los());
        assert!(!Feature::GlassWall.projectable());
    }
}
