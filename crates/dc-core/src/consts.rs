//! Engine-wide constants

/// Default map width
pub const GXM: usize = 80;

/// Default map height
pub const GYM: usize = 70;

/// Size of the live monster table
pub const MAX_MONSTERS: usize = 700;

/// Upper bound on leader + escorts; a band holds at most `BIG_BAND - 1` escorts
pub const BIG_BAND: usize = 20;

/// Squared line-of-sight radius
pub const LOS_RADIUS_SQ: i32 = 64;

/// Line-of-sight radius
pub const LOS_RADIUS: i32 = 8;

/// Power value that selects the Abyss/Pandemonium picking rules
pub const ABYSS_POWER: i32 = 51;

/// Power value used for Pandemonium placements
pub const PANDEMONIUM_POWER: i32 = 52;

/// Highest depth a normal dungeon pick may be fuzzed up to
pub const OOD_CAP: i32 = 27;

/// Highest level the normal selector will ever look for
pub const MAX_PICK_LEVEL: i32 = 30;

/// Longest summon duration that still counts as abjurable
pub const MAX_ABJURATION: u8 = 6;
