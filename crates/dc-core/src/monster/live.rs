//! Live monster instances

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::MonsterType;
use crate::dungeon::Coord;

/// Index of a monster in the live monster table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gods a monster may worship
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum God {
    #[default]
    NoGod,
    Zin,
    TheShiningOne,
    Elyvilon,
    Kikubaaqudgha,
    Yredelemnul,
    Makhleb,
    Xom,
    Beogh,
    Lugonu,
    Jiyva,
    Trog,
    Okawaru,
}

impl God {
    /// Zin, the Shining One and Elyvilon
    pub const fn is_good(&self) -> bool {
        matches!(self, God::Zin | God::TheShiningOne | God::Elyvilon)
    }

    /// Gods that hate holy beings
    pub const fn is_evil(&self) -> bool {
        matches!(
            self,
            God::Kikubaaqudgha | God::Yredelemnul | God::Makhleb | God::Lugonu
        )
    }
}

/// The three death and chaos gods priests pick from
pub const DEATH_GODS: [God; 3] = [God::Kikubaaqudgha, God::Yredelemnul, God::Makhleb];

bitflags! {
    /// Per-instance monster flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MonsterFlags: u32 {
        /// Part of a band
        const BAND_MEMBER   = 0x0001;
        /// Given by a god
        const GOD_GIFT      = 0x0002;
        /// Killing it gives no experience
        const NO_REWARD     = 0x0004;
        /// Was generated neutral
        const WAS_NEUTRAL   = 0x0008;
        /// Worth noting in the level notes
        const INTERESTING   = 0x0010;
        /// Placed this turn
        const JUST_SUMMONED = 0x0020;
    }
}

impl Serialize for MonsterFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonsterFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(MonsterFlags::from_bits_truncate(bits))
    }
}

/// How a monster regards the player
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Attitude {
    #[default]
    Hostile,
    Neutral,
    StrictNeutral,
    GoodNeutral,
    Friendly,
}

impl Attitude {
    pub const fn is_neutral(&self) -> bool {
        matches!(
            self,
            Attitude::Neutral | Attitude::StrictNeutral | Attitude::GoodNeutral
        )
    }
}

/// What a monster is doing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Behaviour {
    Sleep,
    #[default]
    Wander,
    Seek,
}

/// Timed effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum EnchantKind {
    Invis,
    Confusion,
    Shapeshifter,
    Submerged,
    Abjuration,
    Charm,
}

/// An active timed effect; duration 0 lasts until removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    pub kind: EnchantKind,
    pub duration: u8,
}

/// Coarse item classes handed out at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ItemKind {
    Weapon,
    Missile,
    Armour,
    Wand,
    Potion,
    Scroll,
}

/// Starting equipment carried by a monster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
}

impl Item {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }
}

/// Stat block produced from a class definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonsterStats {
    pub hit_dice: i32,
    pub hp: i32,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,
}

/// Monster instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveMonster {
    /// Table slot
    pub id: MonsterId,

    pub kind: MonsterType,

    /// Original creature of a zombie or polymorphed form
    pub base_kind: Option<MonsterType>,

    pub pos: Coord,

    pub hit_dice: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,

    /// Energy accumulated towards the next action
    pub speed_increment: i32,

    pub enchantments: Vec<Enchantment>,

    /// Carried items
    pub inventory: Vec<Item>,

    /// Wielded weapon index in inventory
    pub wielded: Option<usize>,

    pub god: God,
    pub flags: MonsterFlags,
    pub attitude: Attitude,
    pub behaviour: Behaviour,

    /// Leader of the band this monster escorts
    pub band_leader: Option<MonsterId>,
}

impl LiveMonster {
    pub fn new(id: MonsterId, kind: MonsterType, pos: Coord) -> Self {
        Self {
            id,
            kind,
            base_kind: None,
            pos,
            hit_dice: 0,
            hp: 0,
            max_hp: 0,
            ac: 0,
            ev: 0,
            speed: 0,
            speed_increment: 70,
            enchantments: Vec::new(),
            inventory: Vec::new(),
            wielded: None,
            god: God::NoGod,
            flags: MonsterFlags::empty(),
            attitude: Attitude::Hostile,
            behaviour: Behaviour::Wander,
            band_leader: None,
        }
    }

    /// Copy a freshly rolled stat block onto this monster
    pub fn apply_stats(&mut self, stats: MonsterStats) {
        self.hit_dice = stats.hit_dice;
        self.hp = stats.hp;
        self.max_hp = stats.hp;
        self.ac = stats.ac;
        self.ev = stats.ev;
        self.speed = stats.speed;
    }

    pub fn has_ench(&self, kind: EnchantKind) -> bool {
        self.enchantments.iter().any(|e| e.kind == kind)
    }

    /// Add an enchantment; an existing one of the same kind keeps the longer duration
    pub fn add_ench(&mut self, kind: EnchantKind, duration: u8) {
        if let Some(existing) = self.enchantments.iter_mut().find(|e| e.kind == kind) {
            existing.duration = existing.duration.max(duration);
        } else {
            self.enchantments.push(Enchantment { kind, duration });
        }
    }

    pub fn del_ench(&mut self, kind: EnchantKind) {
        self.enchantments.retain(|e| e.kind != kind);
    }

    pub fn is_friendly(&self) -> bool {
        self.attitude == Attitude::Friendly
    }

    /// Wield the first unwielded weapon in the pack.
    ///
    /// Wielding takes time: it spends the action energy in
    /// `speed_increment`. Callers initialising a monster restore it.
    pub fn wield_melee_weapon(&mut self) -> bool {
        let Some(slot) = self
            .inventory
            .iter()
            .enumerate()
            .position(|(i, item)| item.is_weapon() && Some(i) != self.wielded)
        else {
            return false;
        };
        if self.wielded.is_none() {
            self.wielded = Some(slot);
        }
        self.speed_increment -= 10;
        true
    }
}
