//! dc-core: Monster placement and pathfinding engine
//!
//! Picks monster types for a dungeon place, composes escort bands, builds
//! zombies and other derived undead, finds habitable spawn cells and runs the
//! reverse A* search monsters use to walk towards a destination.
//!
//! All game state the engine touches is passed in explicitly through
//! [`WorldContext`]; static monster data comes from a [`MonsterRegistry`]
//! implementation (see the `dc-data` crate for the shipped roster).

pub mod config;
pub mod dungeon;
pub mod error;
pub mod monster;
pub mod pathfind;
pub mod place;
pub mod world;

mod consts;
mod rng;

pub use config::PlacementConfig;
pub use consts::*;
pub use error::{ConfigError, PlacementError, RegistryError};
pub use monster::MonsterRegistry;
pub use rng::GameRng;
pub use world::{PlacementEvent, PlayerState, WorldContext};
