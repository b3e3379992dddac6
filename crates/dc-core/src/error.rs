//! Error types for placement, registry data and configuration

use thiserror::Error;

use crate::dungeon::Coord;
use crate::monster::MonsterType;

/// Corrupted or inconsistent monster data.
///
/// These never happen with a correct roster; callers treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no class registered for {0}")]
    UnknownClass(MonsterType),

    #[error("class {0} registered twice")]
    DuplicateClass(MonsterType),

    #[error("{0} cannot be raised as undead")]
    NotZombifiable(MonsterType),

    #[error("{0} has no habitable terrain")]
    NoHabitat(MonsterType),

    #[error("class {kind} is inconsistent: {reason}")]
    Inconsistent {
        kind: MonsterType,
        reason: &'static str,
    },
}

/// Why a placement produced no monster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no monster type could be chosen")]
    NoMonsterType,

    #[error("no valid location after {0} tries")]
    NoLocation(u32),

    #[error("monster table is full")]
    TableFull,

    #[error("position {0} is not available")]
    Occupied(Coord),

    #[error("no zombifiable base creature found")]
    NoZombieBase,

    #[error("placement rejected: {0}")]
    Rejected(&'static str),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl PlacementError {
    /// Expected outcomes the caller skips over; registry errors are not
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PlacementError::Registry(_))
    }
}

/// Error loading a placement configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "std")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
