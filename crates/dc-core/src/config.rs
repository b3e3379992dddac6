//! Placement tuning: retry budgets and distance constants

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Retry budgets and thresholds used by placement and pathfinding.
///
/// Every search the engine runs is bounded by one of these. Missing fields
/// take their default when loading from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Random cells tried when searching for a spawn location
    pub location_tries: u32,
    /// Random cells tried when looking for a cell next to a staircase
    pub stair_tries: u32,
    /// Picks tried when a stair arrival needs a stair-using monster
    pub stair_pick_tries: u32,
    /// Offsets tried around the leader when placing an escort
    pub band_offset_tries: u32,
    /// Outer iterations of the normal monster picker
    pub pick_iterations: u32,
    /// Redraws of a class that cannot appear here
    pub redraw_limit: u32,
    /// Candidates tried when choosing a base for a zombie
    pub zombie_pick_attempts: u32,
    /// Squared line-of-sight radius
    pub los_radius_sq: i32,
    /// Squared distance counted as "close to the player"
    pub close_radius_sq: i32,
    /// Highest power fuzz may reach in the main dungeon
    pub ood_cap: i32,
    /// Highest power the normal picker works with
    pub max_pick_level: i32,
    /// Slowest a zombie may become
    pub min_zombie_speed: i32,
    /// Size of the live monster table
    pub monster_capacity: usize,
    /// Slots kept free from wandering monsters
    pub wandering_reserve: usize,
    /// Slots a band must leave free
    pub band_reserve: usize,
    /// Levels out of depth before a monster is noted as interesting
    pub ood_interest_margin: i32,
    /// Rarity at or below which a monster is noted as interesting
    pub rare_interest_threshold: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            location_tries: 45,
            stair_tries: 320,
            stair_pick_tries: 300,
            band_offset_tries: 1000,
            pick_iterations: 10_000,
            redraw_limit: 2000,
            zombie_pick_attempts: 10_000,
            los_radius_sq: crate::LOS_RADIUS_SQ,
            close_radius_sq: 64,
            ood_cap: crate::OOD_CAP,
            max_pick_level: crate::MAX_PICK_LEVEL,
            min_zombie_speed: 3,
            monster_capacity: crate::MAX_MONSTERS,
            wandering_reserve: 50,
            band_reserve: 30,
            ood_interest_margin: 5,
            rare_interest_threshold: 5,
        }
    }
}

impl PlacementConfig {
    /// Reject budgets that would make every search fail immediately
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monster_capacity <= self.wandering_reserve {
            return Err(ConfigError::Invalid(format!(
                "monster_capacity {} must exceed wandering_reserve {}",
                self.monster_capacity, self.wandering_reserve
            )));
        }
        if self.location_tries == 0 || self.pick_iterations == 0 || self.redraw_limit == 0 {
            return Err(ConfigError::Invalid(
                "retry budgets must be nonzero".to_string(),
            ));
        }
        if self.los_radius_sq <= 0 {
            return Err(ConfigError::Invalid(
                "los_radius_sq must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = PlacementConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.location_tries, 45);
        assert_eq!(config.stair_tries, 320);
        assert_eq!(config.zombie_pick_attempts, 10_000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PlacementConfig::from_json(r#"{"location_tries": 10}"#).unwrap();
        assert_eq!(config.location_tries, 10);
        assert_eq!(config.band_offset_tries, 1000);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PlacementConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            PlacementConfig::from_json(r#"{"monster_capacity": 10}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PlacementConfig::load("/nonexistent/placement.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
