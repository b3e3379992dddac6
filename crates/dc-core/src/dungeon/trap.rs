//! Traps

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Coord;

/// Trap kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TrapKind {
    Dart,
    Arrow,
    Spear,
    Axe,
    Blade,
    Bolt,
    Needle,
    Net,
    Teleport,
    Alarm,
    Zot,
    Shaft,
}

impl TrapKind {
    /// Traps whose effect is a nuisance rather than damage; allies that know
    /// about them prefer a detour but will still cross.
    pub const fn is_nuisance(&self) -> bool {
        matches!(self, TrapKind::Alarm | TrapKind::Zot)
    }
}

/// Trap on the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trap {
    pub pos: Coord,
    pub kind: TrapKind,
    /// The player has seen this trap
    pub known: bool,
}

impl Trap {
    pub const fn new(pos: Coord, kind: TrapKind) -> Self {
        Self {
            pos,
            kind,
            known: false,
        }
    }

    /// Same trap, marked as known to the player
    pub const fn known(mut self) -> Self {
        self.known = true;
        self
    }
}
