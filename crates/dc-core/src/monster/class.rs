//! Monster class templates (static data for each monster type)

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{MonsterType, ZombieSize};
use crate::dungeon::{Branch, Habitat};

/// Monster body size
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum MonsterSize {
    Tiny = 0,
    Little = 1,
    Small = 2,
    #[default]
    Medium = 3,
    Large = 4,
    Big = 5,
    Giant = 6,
    Huge = 7,
}

/// How clever a class is; governs doors and tracking range
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Intelligence {
    Plant,
    Insect,
    Animal,
    #[default]
    Normal,
    High,
}

/// What a class is made of, spiritually speaking
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Holiness {
    #[default]
    Natural,
    Undead,
    Demonic,
    Holy,
    Nonliving,
    Plant,
}

/// Broad family used for god affiliation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Genus {
    #[default]
    Other,
    Orc,
    Elf,
    Draconian,
    Jelly,
}

bitflags! {
    /// Static class properties
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClassFlags: u32 {
        /// Flies under its own power
        const FLIES        = 0x0000_0001;
        /// Floats; counts as airborne
        const LEVITATES    = 0x0000_0002;
        /// Can open closed doors
        const OPENS_DOORS  = 0x0000_0004;
        /// Follows the player through staircases
        const USES_STAIRS  = 0x0000_0008;
        /// Worships a god of its own
        const PRIEST       = 0x0000_0010;
        /// At most one per game
        const UNIQUE       = 0x0000_0020;
        /// Wields a weapon in each hand
        const TWO_WEAPONS  = 0x0000_0040;
        /// Starts invisible
        const INVISIBLE    = 0x0000_0080;
        /// Permanently confused
        const CONFUSED     = 0x0000_0100;
        /// Hides under water or lava
        const SUBMERGES    = 0x0000_0200;
        /// Never moves
        const STATIONARY   = 0x0000_0400;
        /// An animated statue; never sleeps
        const STATUE       = 0x0000_0800;
        /// Changes form at will
        const SHAPESHIFTER = 0x0000_1000;
        /// Leaves a skeleton
        const HAS_SKELETON = 0x0000_2000;
        /// Can appear in the Abyss
        const ABYSS        = 0x0000_4000;
        /// Starts with equipment
        const EQUIPPED     = 0x0000_8000;
        /// Casts spells
        const SPELLCASTER  = 0x0001_0000;
        /// Dissolves items, and doors with them
        const EATS_ITEMS   = 0x0002_0000;
        /// Offends Zin
        const UNCLEAN      = 0x0004_0000;
        /// Offends Zin
        const CHAOTIC      = 0x0008_0000;
        /// Offends good gods
        const EVIL         = 0x0010_0000;
    }
}

impl Serialize for ClassFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClassFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(ClassFlags::from_bits_truncate(bits))
    }
}

/// Where a class is native: branch, absolute depth and rarity there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSpawn {
    pub branch: Branch,
    /// Absolute depth the class is most at home at
    pub level: i32,
    /// 0 (never) to 100 (very common)
    pub rarity: u8,
}

impl BranchSpawn {
    pub const fn new(branch: Branch, level: i32, rarity: u8) -> Self {
        Self {
            branch,
            level,
            rarity,
        }
    }
}

/// Level reported for a class that is not native to a branch
pub const DEPTH_NOWHERE: i32 = 999;

/// Monster class template
#[derive(Debug, Clone)]
pub struct MonsterClass {
    pub kind: MonsterType,

    /// Monster name
    pub name: &'static str,

    pub genus: Genus,

    /// Hit dice (experience level)
    pub hit_dice: i32,

    /// Hit points per hit die: `hp_min + random2(hp_rand + 1)`
    pub hp_min: i32,
    pub hp_rand: i32,

    /// Armour class
    pub ac: i32,

    /// Evasion
    pub ev: i32,

    /// Base speed (10 = normal, 0 = never acts)
    pub speed: i32,

    pub size: MonsterSize,

    /// Size class when raised as undead; `None` for creatures that can't be
    pub zombie_size: Option<ZombieSize>,

    pub habitat: Habitat,
    pub intelligence: Intelligence,
    pub holiness: Holiness,
    pub flags: ClassFlags,

    /// Native branches with depth and rarity
    pub spawns: Vec<BranchSpawn>,

    /// Weight in the Abyss/Pandemonium accept roll
    pub abyss_rarity: u8,
}

impl MonsterClass {
    /// A medium land creature with no native branches
    pub fn new(kind: MonsterType, name: &'static str) -> Self {
        Self {
            kind,
            name,
            genus: Genus::Other,
            hit_dice: 1,
            hp_min: 2,
            hp_rand: 3,
            ac: 0,
            ev: 10,
            speed: 10,
            size: MonsterSize::Medium,
            zombie_size: None,
            habitat: Habitat::LAND,
            intelligence: Intelligence::Normal,
            holiness: Holiness::Natural,
            flags: ClassFlags::empty(),
            spawns: Vec::new(),
            abyss_rarity: 0,
        }
    }

    pub fn hd(mut self, hit_dice: i32, hp_min: i32, hp_rand: i32) -> Self {
        self.hit_dice = hit_dice;
        self.hp_min = hp_min;
        self.hp_rand = hp_rand;
        self
    }

    pub fn defence(mut self, ac: i32, ev: i32) -> Self {
        self.ac = ac;
        self.ev = ev;
        self
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn size(mut self, size: MonsterSize, zombie_size: Option<ZombieSize>) -> Self {
        self.size = size;
        self.zombie_size = zombie_size;
        self
    }

    pub fn genus(mut self, genus: Genus) -> Self {
        self.genus = genus;
        self
    }

    pub fn habitat(mut self, habitat: Habitat) -> Self {
        self.habitat = habitat;
        self
    }

    pub fn intelligence(mut self, intelligence: Intelligence) -> Self {
        self.intelligence = intelligence;
        self
    }

    pub fn holiness(mut self, holiness: Holiness) -> Self {
        self.holiness = holiness;
        self
    }

    pub fn flags(mut self, flags: ClassFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn spawn(mut self, branch: Branch, level: i32, rarity: u8) -> Self {
        self.spawns.push(BranchSpawn::new(branch, level, rarity));
        self
    }

    pub fn abyss(mut self, rarity: u8) -> Self {
        self.abyss_rarity = rarity;
        self.flags |= ClassFlags::ABYSS;
        self
    }

    /// Flying or levitating
    pub fn is_airborne(&self) -> bool {
        self.flags
            .intersects(ClassFlags::FLIES | ClassFlags::LEVITATES)
    }

    /// Never moves, either by flag or because it has no speed
    pub fn is_stationary(&self) -> bool {
        self.flags.contains(ClassFlags::STATIONARY) || self.speed == 0
    }

    pub fn is_unique(&self) -> bool {
        self.flags.contains(ClassFlags::UNIQUE)
    }

    pub fn is_priest(&self) -> bool {
        self.flags.contains(ClassFlags::PRIEST)
    }

    /// Can be raised as a zombie, skeleton, simulacrum or spectral thing
    pub fn is_zombifiable(&self) -> bool {
        self.zombie_size.is_some() && !self.is_unique() && !self.kind.is_zombified()
    }

    pub fn can_use_stairs(&self) -> bool {
        self.flags.contains(ClassFlags::USES_STAIRS)
    }

    /// Spawn entry for `branch`, if the class is native there
    pub fn spawn_in(&self, branch: Branch) -> Option<&BranchSpawn> {
        self.spawns.iter().find(|s| s.branch == branch)
    }
}

/// Bare test template: land creature native to the main dungeon
#[cfg(test)]
pub(crate) fn test_class(kind: MonsterType, level: i32, rarity: u8) -> MonsterClass {
    MonsterClass::new(kind, "test monster")
        .hd(level.max(1), 3, 5)
        .defence(2, 10)
        .flags(ClassFlags::USES_STAIRS | ClassFlags::HAS_SKELETON)
        .size(MonsterSize::Medium, Some(ZombieSize::Small))
        .spawn(Branch::Dungeon, level, rarity)
}
