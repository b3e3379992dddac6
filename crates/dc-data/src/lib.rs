//! dc-data: Static monster data for the placement engine
//!
//! Contains the monster roster and the equipment handed out at spawn.

pub mod monsters;
pub mod outfit;

pub use monsters::{find_class, monster_classes, roster};
pub use outfit::Outfitter;

use dc_core::RegistryError;

/// The shipped roster with starting equipment
pub fn registry() -> Result<Outfitter, RegistryError> {
    Ok(Outfitter::new(roster()?))
}
