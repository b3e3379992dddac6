//! Game state handed to placement
//!
//! The engine never reaches for ambient globals. Everything it reads or
//! changes (terrain, monster table, player, random state) lives in a
//! [`WorldContext`] passed in by the caller.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::dungeon::{Coord, MapGrid, Place, StairKind};
use crate::monster::{God, LiveMonster, MonsterArena, MonsterId, MonsterType};
use crate::place::VaultSpawn;
use crate::rng::GameRng;

/// What placement needs to know about the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub pos: Coord,
    /// God the player worships
    pub religion: God,
    /// Stuck in a net; cannot be shoved off a staircase
    pub caught: bool,
    /// Climbing back up with the Orb
    pub ascending_with_orb: bool,
}

impl PlayerState {
    pub fn at(pos: Coord) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }
}

/// Things that happened during a placement the UI may want to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementEvent {
    /// A monster walked in through a staircase or gate
    ArrivedViaStairs { id: MonsterId, stair: StairKind },
    /// A monster arriving on the player's staircase pushed the player aside
    PlayerShoved {
        id: MonsterId,
        from: Coord,
        to: Coord,
        stair: StairKind,
    },
}

/// Level state placement operates on
#[derive(Debug, Clone)]
pub struct WorldContext {
    pub map: MapGrid,
    pub monsters: MonsterArena,
    pub player: PlayerState,
    pub place: Place,

    /// Turns the player has spent on this level
    pub turns_on_level: i32,

    pub rng: GameRng,
    pub config: PlacementConfig,

    /// Uniques generated so far this game
    pub uniques: BTreeSet<MonsterType>,

    /// Events since the caller last drained them
    pub events: Vec<PlacementEvent>,

    /// Random monster list of the current portal vault
    pub vault_spawns: Vec<VaultSpawn>,
}

impl WorldContext {
    pub fn new(map: MapGrid, place: Place, player_pos: Coord, seed: u64) -> Self {
        Self::with_config(map, place, player_pos, seed, PlacementConfig::default())
    }

    pub fn with_config(
        map: MapGrid,
        place: Place,
        player_pos: Coord,
        seed: u64,
        config: PlacementConfig,
    ) -> Self {
        Self {
            map,
            monsters: MonsterArena::new(config.monster_capacity),
            player: PlayerState::at(player_pos),
            place,
            turns_on_level: 0,
            rng: GameRng::new(seed),
            config,
            uniques: BTreeSet::new(),
            events: Vec::new(),
            vault_spawns: Vec::new(),
        }
    }

    /// A monster or the player stands on `pos`
    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.player.pos == pos || self.map.monster_at(pos).is_some()
    }

    pub fn monster(&self, id: MonsterId) -> Option<&LiveMonster> {
        self.monsters.get(id)
    }

    pub fn monster_at(&self, pos: Coord) -> Option<&LiveMonster> {
        self.map.monster_at(pos).and_then(|id| self.monsters.get(id))
    }

    /// Store a monster in the table and link it into the monster grid
    pub fn insert_monster(
        &mut self,
        make: impl FnOnce(MonsterId) -> LiveMonster,
    ) -> Option<MonsterId> {
        let id = self.monsters.allocate(make)?;
        if let Some(pos) = self.monsters.get(id).map(|m| m.pos) {
            self.map.set_monster_at(pos, Some(id));
        }
        Some(id)
    }

    /// Free a monster's slot and unlink it from the grid
    pub fn remove_monster(&mut self, id: MonsterId) -> Option<LiveMonster> {
        let monster = self.monsters.remove(id)?;
        if self.map.monster_at(monster.pos) == Some(id) {
            self.map.set_monster_at(monster.pos, None);
        }
        Some(monster)
    }

    /// Move the player, returning where they were
    pub fn swap_player_to(&mut self, to: Coord) -> Coord {
        std::mem::replace(&mut self.player.pos, to)
    }

    /// Take the events recorded so far
    pub fn drain_events(&mut self) -> Vec<PlacementEvent> {
        std::mem::take(&mut self.events)
    }
}
