//! Terrain grid queried by placement and pathfinding

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Coord, DungeonFeature, StairKind, Trap};
use crate::monster::MonsterId;
use crate::rng::GameRng;

bitflags! {
    /// Per-cell restrictions set by the level builder.
    ///
    /// A placement request carries its own mask; a cell is off limits when
    /// the two intersect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MapMask: u16 {
        /// Part of a vault
        const VAULT       = 0x0001;
        /// No random monsters
        const NO_MONSTERS = 0x0002;
        /// No pools
        const NO_POOL     = 0x0004;
        /// No doors
        const NO_DOOR     = 0x0008;
        /// No traps
        const NO_TRAP     = 0x0010;
        /// Opaque to the level builder
        const OPAQUE      = 0x0020;
    }
}

impl Serialize for MapMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(MapMask::from_bits_truncate(bits))
    }
}

/// How a cell relates to the nearest staircase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StairProximity {
    /// No staircase in the surrounding 3x3 block
    None,
    /// A staircase is adjacent (or underneath)
    Near,
    /// The adjacent staircase is the one the player is standing on
    PlayerOnStairs,
}

/// Result of `MapGrid::near_stairs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairContact {
    pub proximity: StairProximity,
    pub stair: Option<StairKind>,
    /// Cell holding the staircase
    pub stair_pos: Option<Coord>,
}

impl StairContact {
    pub const NONE: StairContact = StairContact {
        proximity: StairProximity::None,
        stair: None,
        stair_pos: None,
    };
}

/// Error parsing a map from text rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapParseError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown map glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Coord },
}

/// Terrain grid for one level.
///
/// Cells are indexed `[x][y]`. Out-of-bounds queries behave like permanent
/// rock so callers can look at neighbours freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapGrid {
    width: i32,
    height: i32,

    /// Terrain
    cells: Vec<Vec<DungeonFeature>>,

    /// Builder restrictions
    masks: Vec<Vec<MapMask>>,

    /// Sanctuary cells
    sanctuary: Vec<Vec<bool>>,

    /// Monster grid (monster ID at each position)
    #[serde(skip)]
    monster_grid: Vec<Vec<Option<MonsterId>>>,

    /// Traps
    pub traps: Vec<Trap>,
}

impl Default for MapGrid {
    fn default() -> Self {
        Self::new(crate::GXM, crate::GYM)
    }
}

impl MapGrid {
    /// Create a map of solid rock
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, DungeonFeature::RockWall)
    }

    /// Create a map with every cell set to `feature`
    pub fn filled(width: usize, height: usize, feature: DungeonFeature) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            cells: vec![vec![feature; height]; width],
            masks: vec![vec![MapMask::empty(); height]; width],
            sanctuary: vec![vec![false; height]; width],
            monster_grid: vec![vec![None; height]; width],
            traps: Vec::new(),
        }
    }

    /// Parse a map from equal-length rows of glyphs (see `DungeonFeature::glyph`)
    pub fn from_rows(rows: &[&str]) -> Result<Self, MapParseError> {
        let first = rows.first().ok_or(MapParseError::Empty)?;
        let width = first.chars().count();
        let mut map = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapParseError::Ragged {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let pos = Coord::new(x as i32, y as i32);
                let feature = DungeonFeature::from_glyph(glyph)
                    .ok_or(MapParseError::UnknownGlyph { glyph, pos })?;
                map.cells[x][y] = feature;
            }
        }
        Ok(map)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Check if position is on the map
    pub const fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Terrain at `pos` (permanent rock outside the map)
    pub fn feature_at(&self, pos: Coord) -> DungeonFeature {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize][pos.y as usize]
        } else {
            DungeonFeature::PermaRockWall
        }
    }

    pub fn set_feature(&mut self, pos: Coord, feature: DungeonFeature) {
        if self.in_bounds(pos) {
            self.cells[pos.x as usize][pos.y as usize] = feature;
        }
    }

    /// Fill a rectangle (inclusive corners) with `feature`
    pub fn fill_rect(&mut self, a: Coord, b: Coord, feature: DungeonFeature) {
        for x in a.x.min(b.x)..=a.x.max(b.x) {
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                self.set_feature(Coord::new(x, y), feature);
            }
        }
    }

    pub fn mask_at(&self, pos: Coord) -> MapMask {
        if self.in_bounds(pos) {
            self.masks[pos.x as usize][pos.y as usize]
        } else {
            MapMask::empty()
        }
    }

    pub fn set_mask(&mut self, pos: Coord, mask: MapMask) {
        if self.in_bounds(pos) {
            self.masks[pos.x as usize][pos.y as usize] = mask;
        }
    }

    /// True when the cell carries none of the restrictions in `mask`
    pub fn unforbidden(&self, pos: Coord, mask: MapMask) -> bool {
        !self.mask_at(pos).intersects(mask)
    }

    pub fn is_sanctuary(&self, pos: Coord) -> bool {
        self.in_bounds(pos) && self.sanctuary[pos.x as usize][pos.y as usize]
    }

    pub fn set_sanctuary(&mut self, pos: Coord, on: bool) {
        if self.in_bounds(pos) {
            self.sanctuary[pos.x as usize][pos.y as usize] = on;
        }
    }

    /// Get trap at position
    pub fn trap_at(&self, pos: Coord) -> Option<&Trap> {
        self.traps.iter().find(|t| t.pos == pos)
    }

    /// Add a trap, replacing any trap already on that cell
    pub fn add_trap(&mut self, trap: Trap) {
        self.traps.retain(|t| t.pos != trap.pos);
        self.traps.push(trap);
    }

    /// Monster standing on `pos`
    pub fn monster_at(&self, pos: Coord) -> Option<MonsterId> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.monster_grid
            .get(pos.x as usize)
            .and_then(|col| col.get(pos.y as usize))
            .copied()
            .flatten()
    }

    pub(crate) fn set_monster_at(&mut self, pos: Coord, id: Option<MonsterId>) {
        if !self.in_bounds(pos) {
            return;
        }
        // Rebuild after deserialization, where the grid is skipped.
        if self.monster_grid.len() != self.width as usize {
            self.monster_grid = vec![vec![None; self.height as usize]; self.width as usize];
        }
        self.monster_grid[pos.x as usize][pos.y as usize] = id;
    }

    /// Uniformly random in-bounds cell
    pub fn random_in_bounds(&self, rng: &mut GameRng) -> Coord {
        Coord::new(rng.random2(self.width), rng.random2(self.height))
    }

    /// All staircase cells
    pub fn stairs(&self) -> impl Iterator<Item = (Coord, StairKind)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).filter_map(move |y| {
                let pos = Coord::new(x, y);
                self.feature_at(pos).stair_kind().map(|kind| (pos, kind))
            })
        })
    }

    /// Look for a staircase in the 3x3 block around `pos`.
    ///
    /// Escape hatches are ignored. Once a staircase under the player has
    /// been seen it is not overwritten by other nearby staircases.
    pub fn near_stairs(&self, pos: Coord, player: Coord) -> StairContact {
        let mut contact = StairContact::NONE;
        if !self.in_bounds(pos) {
            return contact;
        }
        for dx in -1..=1 {
            for dy in -1..=1 {
                let p = Coord::new(pos.x + dx, pos.y + dy);
                if !self.in_bounds(p) {
                    continue;
                }
                let feat = self.feature_at(p);
                if !feat.is_stair() || feat.is_escape_hatch() {
                    continue;
                }
                if contact.proximity < StairProximity::PlayerOnStairs {
                    contact = StairContact {
                        proximity: if p == player {
                            StairProximity::PlayerOnStairs
                        } else {
                            StairProximity::Near
                        },
                        stair: feat.stair_kind(),
                        stair_pos: Some(p),
                    };
                }
            }
        }
        contact
    }

    /// Check whether a monster could walk straight from `from` to `to`.
    ///
    /// The endpoints are not examined; every cell strictly between them on
    /// the Bresenham line must allow movement. Lines longer than the
    /// line-of-sight radius never count as straight.
    pub fn can_go_straight(
        &self,
        from: Coord,
        to: Coord,
        allow_deep_water: bool,
        los_radius_sq: i32,
    ) -> bool {
        if from.distance_sq(to) > los_radius_sq {
            return false;
        }

        let mut x = from.x;
        let mut y = from.y;
        let dx = (to.x - x).abs();
        let dy = -(to.y - y).abs();
        let sx = if x < to.x { 1 } else { -1 };
        let sy = if y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x == to.x && y == to.y {
                return true;
            }
            if (x != from.x || y != from.y)
                && !self
                    .feature_at(Coord::new(x, y))
                    .allows_straight_move(allow_deep_water)
            {
                return false;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Render the map as text, letting `overlay` replace glyphs
    pub fn render(&self, overlay: impl Fn(Coord) -> Option<char>) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Coord::new(x, y);
                out.push(overlay(pos).unwrap_or_else(|| self.feature_at(pos).glyph()));
            }
            out.push('\n');
        }
        out
    }
}
