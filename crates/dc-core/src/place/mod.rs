//! Monster placement
//!
//! A [`PlacementRequest`] names what to create and where. Placement picks a
//! concrete monster type, finds a cell for it, rolls its stats and adds any
//! escort band the leader brings along.

mod band;
mod location;
mod orchestrator;
mod request;
mod selector;
mod zombie;

pub use band::{BandChoice, BandType, band_member, choose_band};
pub use location::{
    Location, LocationSpec, can_place_on_trap, find_escort_location, find_location,
    valid_generation_location,
};
pub use orchestrator::{mons_place, place_monster, player_angers_monster};
pub use request::{GenFlags, MonsterChoice, PlacementRequest, Proximity, RequestedBehaviour};
pub use selector::{
    PickedMonster, Resolved, VaultEntry, VaultSpawn, fuzz_power, pick_random_monster,
    pick_zot_exit_defender, resolve_draconian, resolve_monster_type,
};
pub use zombie::{ZombieRequest, derived_stats, make_zombie, pick_local_zombifiable_monster};
