//! Monster system
//!
//! Contains monster type identifiers, class templates, the registry they are
//! served from, and live instances in the monster table.

mod arena;
pub mod class;
mod live;
pub mod registry;
mod types;

pub use arena::MonsterArena;
pub use class::{BranchSpawn, ClassFlags, Genus, Holiness, Intelligence, MonsterClass, MonsterSize};
pub use live::{
    Attitude, Behaviour, DEATH_GODS, EnchantKind, Enchantment, God, Item, ItemKind, LiveMonster,
    MonsterFlags, MonsterId, MonsterStats,
};
pub use registry::{MonsterRegistry, Roster};
pub use types::{
    DRACONIAN_COLOURS, DRACONIAN_JOBS, DerivedFamily, DerivedKind, MonsterType, ZombieSize,
};
