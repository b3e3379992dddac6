//! Map coordinates

use core::fmt;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A cell position on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Direction offsets indexed 0..8, clockwise starting west.
///
/// Even indices are orthogonal, odd indices diagonal, and `dir + 4` is
/// always the opposite direction.
pub const DIRECTIONS: [Coord; 8] = [
    Coord { x: -1, y: 0 },
    Coord { x: -1, y: -1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: 1 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 1 },
];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in direction `dir` (taken modulo 8)
    pub const fn step(self, dir: usize) -> Self {
        let d = DIRECTIONS[dir % 8];
        Self {
            x: self.x + d.x,
            y: self.y + d.y,
        }
    }

    /// Chebyshev distance (king moves)
    pub fn grid_distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Squared Euclidean distance
    pub fn distance_sq(self, other: Coord) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// True when `other` is one king move away
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && self.grid_distance(other) == 1
    }

    /// All eight neighbours, in `DIRECTIONS` order
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        (0..8).map(move |dir| self.step(dir))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}
