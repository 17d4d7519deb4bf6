use thiserror::Error;

/// Default reach of bolts and beams.
pub const MAX_RANGE: i32 = 18;

/// Reach inside the monster arena, where fights are watched from afar.
pub const ARENA_MAX_RANGE: i32 = MAX_RANGE * 2;

/// Errors from validating a [`ProjectConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveRange { field: &'static str, value: i32 },
}

/// Range limits for projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectConfig {
    pub max_range: i32,
    pub arena_max_range: i32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            max_range: MAX_RANGE,
            arena_max_range: ARENA_MAX_RANGE,
        }
    }
}

impl ProjectConfig {
    /// The range limit in effect, depending on whether the caster is in the
    /// arena.
    pub fn max_range(&self, arena: bool) -> i32 {
        if arena { self.arena_max_range } else { self.max_range }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("max_range", self.max_range), ("arena_max_range", self.arena_max_range)] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveRange { field, value });
            }
        }
        Ok(())
    }
}
