//! Dungeon terrain as seen by the placement engine

mod coord;
mod feature;
pub mod habitat;
mod map;
mod place;
mod trap;

pub use coord::{Coord, DIRECTIONS};
pub use feature::{DungeonFeature, StairKind};
pub use habitat::{Habitat, Medium, can_submerge, monster_habitable};
pub use map::{MapGrid, MapMask, MapParseError, StairContact, StairProximity};
pub use place::{Branch, BranchSet, LevelType, Place};
pub use trap::{Trap, TrapKind};
