//! Fixed-capacity live monster table

use serde::{Deserialize, Serialize};

use super::{LiveMonster, MonsterId};

/// Live monster table with a stack of free slots.
///
/// Slots are handed out lowest index first. A slot stays owned by its
/// monster until `remove` frees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterArena {
    slots: Vec<Option<LiveMonster>>,
    free: Vec<u32>,
}

impl MonsterArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            free: (0..capacity as u32).rev().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots
    pub fn count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Reserve a slot and store the monster built by `make`
    pub fn allocate(&mut self, make: impl FnOnce(MonsterId) -> LiveMonster) -> Option<MonsterId> {
        let index = self.free.pop()?;
        let id = MonsterId(index);
        let mut monster = make(id);
        monster.id = id;
        self.slots[index as usize] = Some(monster);
        Some(id)
    }

    pub fn get(&self, id: MonsterId) -> Option<&LiveMonster> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut LiveMonster> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Free a slot, returning its monster
    pub fn remove(&mut self, id: MonsterId) -> Option<LiveMonster> {
        let monster = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id.0);
        // Keep the lowest free index on top
        self.free.sort_unstable_by(|a, b| b.cmp(a));
        Some(monster)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveMonster> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}

impl Default for MonsterArena {
    fn default() -> Self {
        Self::new(crate::MAX_MONSTERS)
    }
}
