//! Dungeon features (terrain kinds)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain kind of a single map cell.
///
/// Ordered roughly from most to least obstructive: everything before
/// `Lava` is solid, `Floor` and later are walkable ground.
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
pub enum DungeonFeature {
    #[default]
    RockWall = 0,
    StoneWall = 1,
    PermaRockWall = 2,
    ClosedDoor = 3,
    SecretDoor = 4,
    Statue = 5,
    Lava = 10,
    DeepWater = 11,
    ShallowWater = 12,
    Floor = 20,
    OpenDoor = 21,
    Altar = 22,
    Fountain = 23,
    StairsDown = 30,
    StairsUp = 31,
    EscapeHatchDown = 32,
    EscapeHatchUp = 33,
    BranchStairsDown = 34,
    BranchStairsUp = 35,
    PortalGate = 36,
}

/// Where a staircase leads, as seen from the cell it is on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum StairKind {
    /// Leads deeper; monsters arriving through it come up
    Down,
    /// Leads shallower; monsters arriving through it come down
    Up,
    /// Portal or gateway
    Gate,
}

impl DungeonFeature {
    /// Rock, stone and permanent rock walls
    pub const fn is_wall(&self) -> bool {
        matches!(
            self,
            DungeonFeature::RockWall | DungeonFeature::StoneWall | DungeonFeature::PermaRockWall
        )
    }

    /// Anything that blocks movement outright (walls, doors, statues)
    pub const fn is_solid(&self) -> bool {
        (*self as u8) < (DungeonFeature::Lava as u8)
    }

    /// Closed or secret door
    pub const fn is_closed_door(&self) -> bool {
        matches!(self, DungeonFeature::ClosedDoor | DungeonFeature::SecretDoor)
    }

    /// Any kind of door, open or not
    pub const fn is_door(&self) -> bool {
        matches!(
            self,
            DungeonFeature::ClosedDoor | DungeonFeature::SecretDoor | DungeonFeature::OpenDoor
        )
    }

    /// Walkable dry ground (floor, open doors, altars, fountains, stairs)
    pub const fn is_floor_like(&self) -> bool {
        (*self as u8) >= (DungeonFeature::Floor as u8)
    }

    /// Deep or shallow water
    pub const fn is_watery(&self) -> bool {
        matches!(self, DungeonFeature::DeepWater | DungeonFeature::ShallowWater)
    }

    /// Lava or deep water: cells nobody can be shoved onto
    pub const fn is_hazard(&self) -> bool {
        matches!(self, DungeonFeature::Lava | DungeonFeature::DeepWater)
    }

    /// Staircases, hatches and gates
    pub const fn is_stair(&self) -> bool {
        (*self as u8) >= (DungeonFeature::StairsDown as u8)
    }

    /// Escape hatches are one-way and never count as arrival points
    pub const fn is_escape_hatch(&self) -> bool {
        matches!(
            self,
            DungeonFeature::EscapeHatchDown | DungeonFeature::EscapeHatchUp
        )
    }

    /// Direction of a staircase, if this is one
    pub const fn stair_kind(&self) -> Option<StairKind> {
        match self {
            DungeonFeature::StairsDown
            | DungeonFeature::EscapeHatchDown
            | DungeonFeature::BranchStairsDown => Some(StairKind::Down),
            DungeonFeature::StairsUp
            | DungeonFeature::EscapeHatchUp
            | DungeonFeature::BranchStairsUp => Some(StairKind::Up),
            DungeonFeature::PortalGate => Some(StairKind::Gate),
            _ => None,
        }
    }

    /// True when a straight line of movement may pass over this feature.
    ///
    /// Walkable ground and shallow water always pass; deep water only when
    /// `allow_deep_water` is set.
    pub const fn allows_straight_move(&self, allow_deep_water: bool) -> bool {
        match self {
            DungeonFeature::ShallowWater => true,
            DungeonFeature::DeepWater => allow_deep_water,
            _ => self.is_floor_like(),
        }
    }

    /// Display glyph used by the command-line driver
    pub const fn glyph(&self) -> char {
        match self {
            DungeonFeature::RockWall | DungeonFeature::StoneWall => '#',
            DungeonFeature::PermaRockWall => 'X',
            DungeonFeature::ClosedDoor => '+',
            DungeonFeature::SecretDoor => '#',
            DungeonFeature::Statue => '8',
            DungeonFeature::Lava => '{',
            DungeonFeature::DeepWater => '~',
            DungeonFeature::ShallowWater => '-',
            DungeonFeature::Floor => '.',
            DungeonFeature::OpenDoor => '\'',
            DungeonFeature::Altar => '_',
            DungeonFeature::Fountain => '}',
            DungeonFeature::StairsDown
            | DungeonFeature::EscapeHatchDown
            | DungeonFeature::BranchStairsDown => '>',
            DungeonFeature::StairsUp
            | DungeonFeature::EscapeHatchUp
            | DungeonFeature::BranchStairsUp => '<',
            DungeonFeature::PortalGate => '^',
        }
    }

    /// Inverse of `glyph` for map strings (`#` reads as rock)
    pub const fn from_glyph(c: char) -> Option<Self> {
        Some(match c {
            '#' => DungeonFeature::RockWall,
            'X' => DungeonFeature::PermaRockWall,
            '+' => DungeonFeature::ClosedDoor,
            '=' => DungeonFeature::SecretDoor,
            '8' => DungeonFeature::Statue,
            '{' => DungeonFeature::Lava,
            '~' => DungeonFeature::DeepWater,
            '-' => DungeonFeature::ShallowWater,
            '.' => DungeonFeature::Floor,
            '\'' => DungeonFeature::OpenDoor,
            '_' => DungeonFeature::Altar,
            '}' => DungeonFeature::Fountain,
            '>' => DungeonFeature::StairsDown,
            '<' => DungeonFeature::StairsUp,
            '^' => DungeonFeature::PortalGate,
            _ => return None,
        })
    }
}
