//! Branches, level types and dungeon places

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// Dungeon branches
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Branch {
    #[default]
    Dungeon = 0,
    Temple = 1,
    OrcishMines = 2,
    ElvenHalls = 3,
    Lair = 4,
    Swamp = 5,
    Shoals = 6,
    SnakePit = 7,
    Hive = 8,
    Vaults = 9,
    Crypt = 10,
    Tomb = 11,
    HallOfBlades = 12,
    Zot = 13,
    Vestibule = 14,
    Dis = 15,
    Gehenna = 16,
    Cocytus = 17,
    Tartarus = 18,
}

impl Branch {
    /// Absolute depth of the branch's first level
    pub const fn entry_depth(&self) -> i32 {
        match self {
            Branch::Dungeon => 0,
            Branch::Temple => 4,
            Branch::OrcishMines => 6,
            Branch::ElvenHalls => 10,
            Branch::Lair => 8,
            Branch::Swamp => 11,
            Branch::Shoals => 11,
            Branch::SnakePit => 13,
            Branch::Hive => 10,
            Branch::Vaults => 13,
            Branch::Crypt => 17,
            Branch::Tomb => 20,
            Branch::HallOfBlades => 18,
            Branch::Zot => 26,
            Branch::Vestibule => 27,
            Branch::Dis | Branch::Gehenna | Branch::Cocytus | Branch::Tartarus => 27,
        }
    }

    /// The four hells and their vestibule
    pub const fn is_hell(&self) -> bool {
        matches!(
            self,
            Branch::Vestibule | Branch::Dis | Branch::Gehenna | Branch::Cocytus | Branch::Tartarus
        )
    }

    pub const fn mask(&self) -> BranchSet {
        BranchSet::from_bits_truncate(1 << (*self as u32))
    }
}

bitflags! {
    /// Set of branches, used by roster entries
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BranchSet: u32 {
        const DUNGEON = 1 << 0;
        const TEMPLE = 1 << 1;
        const ORCISH_MINES = 1 << 2;
        const ELVEN_HALLS = 1 << 3;
        const LAIR = 1 << 4;
        const SWAMP = 1 << 5;
        const SHOALS = 1 << 6;
        const SNAKE_PIT = 1 << 7;
        const HIVE = 1 << 8;
        const VAULTS = 1 << 9;
        const CRYPT = 1 << 10;
        const TOMB = 1 << 11;
        const HALL_OF_BLADES = 1 << 12;
        const ZOT = 1 << 13;
        const VESTIBULE = 1 << 14;
        const DIS = 1 << 15;
        const GEHENNA = 1 << 16;
        const COCYTUS = 1 << 17;
        const TARTARUS = 1 << 18;
    }
}

/// Kind of level, independent of branch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum LevelType {
    #[default]
    Dungeon,
    Labyrinth,
    Abyss,
    Pandemonium,
    PortalVault,
}

/// A location in the dungeon: branch, depth within it and level type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Place {
    pub branch: Branch,
    /// 1-based depth inside the branch
    pub depth: i32,
    pub level_type: LevelType,
}

impl Place {
    pub const fn new(branch: Branch, depth: i32) -> Self {
        Self {
            branch,
            depth,
            level_type: LevelType::Dungeon,
        }
    }

    pub const fn abyss() -> Self {
        Self {
            branch: Branch::Dungeon,
            depth: 1,
            level_type: LevelType::Abyss,
        }
    }

    pub const fn pandemonium() -> Self {
        Self {
            branch: Branch::Dungeon,
            depth: 1,
            level_type: LevelType::Pandemonium,
        }
    }

    pub const fn with_level_type(mut self, level_type: LevelType) -> Self {
        self.level_type = level_type;
        self
    }

    /// Zero-based absolute depth, the power value placement works with
    pub const fn absdepth(&self) -> i32 {
        match self.level_type {
            LevelType::Abyss => crate::ABYSS_POWER,
            LevelType::Pandemonium => crate::PANDEMONIUM_POWER,
            _ => self.branch.entry_depth() + self.depth - 1,
        }
    }

    /// Regular levels of the main dungeon trunk
    pub const fn is_main_dungeon(&self) -> bool {
        matches!(self.level_type, LevelType::Dungeon) && matches!(self.branch, Branch::Dungeon)
    }

    /// Abyss or Pandemonium
    pub const fn is_chaotic_realm(&self) -> bool {
        matches!(self.level_type, LevelType::Abyss | LevelType::Pandemonium)
    }

    /// Pack a place into a single integer, as used by vault spawn lists
    pub const fn packed(&self) -> u16 {
        ((self.branch as u16) << 8) | (self.depth as u16 & 0xFF)
    }

    /// Inverse of `packed` (dungeon level type)
    pub fn from_packed(packed: u16) -> Option<Self> {
        use strum::IntoEnumIterator;
        let branch = Branch::iter().find(|b| *b as u16 == packed >> 8)?;
        Some(Self::new(branch, (packed & 0xFF) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absdepth() {
        assert_eq!(Place::new(Branch::Dungeon, 1).absdepth(), 0);
        assert_eq!(Place::new(Branch::Lair, 3).absdepth(), 10);
        assert_eq!(Place::abyss().absdepth(), 51);
        assert_eq!(Place::pandemonium().absdepth(), 52);
    }

    #[test]
    fn test_packed_roundtrip() {
        let place = Place::new(Branch::SnakePit, 4);
        assert_eq!(Place::from_packed(place.packed()), Some(place));
    }

    #[test]
    fn test_branch_mask() {
        assert_eq!(Branch::Lair.mask(), BranchSet::LAIR);
        assert_eq!(Branch::Tartarus.mask(), BranchSet::TARTARUS);
        assert!(Branch::Gehenna.is_hell());
        assert!(!Branch::Crypt.is_hell());
    }

    #[test]
    fn test_main_dungeon() {
        assert!(Place::new(Branch::Dungeon, 3).is_main_dungeon());
        assert!(!Place::new(Branch::Lair, 3).is_main_dungeon());
        assert!(!Place::abyss().is_main_dungeon());
    }
}
