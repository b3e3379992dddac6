//! Random number service for placement and pathfinding
//!
//! Uses a seeded ChaCha RNG so that a placement run can be replayed from its
//! seed. The helpers mirror the small vocabulary the placement rules are
//! written in: `random2`, `random2avg`, `coinflip`, `one_chance_in` and a
//! weighted table draw.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Engine random number generator
///
/// Wraps ChaCha8Rng for reproducible placement runs.
/// Only the seed is serialized; a restored generator starts over from it.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `0..n`. Returns 0 when `n <= 0`.
    pub fn random2(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Average of `rolls` draws, biased towards the middle of `0..max`.
    ///
    /// The first draw is `random2(max)`, the others `random2(max + 1)`, and
    /// the sum is divided by `rolls`, so the result stays in `0..max`.
    pub fn random2avg(&mut self, max: i32, rolls: i32) -> i32 {
        if rolls <= 0 {
            return 0;
        }
        let mut sum = self.random2(max);
        for _ in 1..rolls {
            sum += self.random2(max + 1);
        }
        sum / rolls
    }

    /// Uniform integer in `low..=high` (order of the bounds does not matter)
    pub fn random_range(&mut self, low: i32, high: i32) -> i32 {
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        lo + self.random2(hi - lo + 1)
    }

    /// Returns true half of the time
    pub fn coinflip(&mut self) -> bool {
        self.random2(2) == 0
    }

    /// Returns true with probability 1/n (always true for n <= 1)
    pub fn one_chance_in(&mut self, n: i32) -> bool {
        n <= 1 || self.random2(n) == 0
    }

    /// Returns true with probability x/y
    pub fn x_chance_in_y(&mut self, x: i32, y: i32) -> bool {
        if x <= 0 {
            return false;
        }
        if x >= y {
            return true;
        }
        self.random2(y) < x
    }

    /// Sum of `num` rolls of `1..=size`
    pub fn roll_dice(&mut self, num: i32, size: i32) -> i32 {
        if size <= 0 {
            return 0;
        }
        (0..num.max(0)).map(|_| 1 + self.random2(size)).sum()
    }

    /// Hit point roll: each hit die yields `min_hp + random2(rand_hp + 1)`
    pub fn hit_points(&mut self, hit_dice: i32, min_hp: i32, rand_hp: i32) -> i32 {
        (0..hit_dice.max(0))
            .map(|_| min_hp + self.random2(rand_hp + 1))
            .sum()
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.random2(items.len() as i32) as usize])
        }
    }

    /// Weighted draw over `(weight, outcome)` pairs.
    ///
    /// Returns `None` when the table is empty or every weight is zero.
    pub fn choose_weighted<T: Copy>(&mut self, table: &[(u32, T)]) -> Option<T> {
        let total: u32 = table.iter().map(|(w, _)| *w).sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.rng.gen_range(0..total);
        for &(weight, outcome) in table {
            if roll < weight {
                return Some(outcome);
            }
            roll -= weight;
        }
        table.iter().rev().find(|(w, _)| *w > 0).map(|&(_, o)| o)
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random2(i as i32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(feature = "std")]
impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.random2(10);
            assert!((0..10).contains(&n));
        }
    }

    #[test]
    fn test_random2_nonpositive() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.random2(0), 0);
        assert_eq!(rng.random2(-5), 0);
    }

    #[test]
    fn test_random2avg_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let n = rng.random2avg(100, 2);
            assert!((0..100).contains(&n));
        }
        assert_eq!(rng.random2avg(100, 0), 0);
    }

    #[test]
    fn test_random2avg_centres() {
        let mut rng = GameRng::new(11);
        let extremes = (0..2000)
            .map(|_| rng.random2avg(100, 2))
            .filter(|&n| !(10..90).contains(&n))
            .count();
        // A single uniform draw would land outside 10..90 about 20% of the time.
        assert!(extremes < 200, "too many extremes: {extremes}");
    }

    #[test]
    fn test_random_range_inclusive() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let n = rng.random_range(-3, 3);
            assert!((-3..=3).contains(&n));
            seen[(n + 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.random_range(4, 4), 4);
    }

    #[test]
    fn test_one_chance_in_degenerate() {
        let mut rng = GameRng::new(1);
        assert!(rng.one_chance_in(1));
        assert!(rng.one_chance_in(0));
    }

    #[test]
    fn test_x_chance_in_y_edges() {
        let mut rng = GameRng::new(1);
        assert!(!rng.x_chance_in_y(0, 10));
        assert!(rng.x_chance_in_y(10, 10));
    }

    #[test]
    fn test_hit_points_range() {
        let mut rng = GameRng::new(5);
        for _ in 0..200 {
            let hp = rng.hit_points(3, 5, 4);
            assert!((15..=27).contains(&hp));
        }
        assert_eq!(rng.hit_points(0, 5, 4), 0);
    }

    #[test]
    fn test_roll_dice_range() {
        let mut rng = GameRng::new(9);
        for _ in 0..200 {
            let n = rng.roll_dice(2, 6);
            assert!((2..=12).contains(&n));
        }
    }

    #[test]
    fn test_choose_weighted_skips_zero() {
        let mut rng = GameRng::new(12);
        let table = [(0, 'a'), (5, 'b'), (0, 'c')];
        for _ in 0..100 {
            assert_eq!(rng.choose_weighted(&table), Some('b'));
        }
    }

    #[test]
    fn test_choose_weighted_empty() {
        let mut rng = GameRng::new(12);
        let table: [(u32, u8); 0] = [];
        assert_eq!(rng.choose_weighted(&table), None);
        assert_eq!(rng.choose_weighted(&[(0, 1u8)]), None);
    }

    #[test]
    fn test_rng_reproducibility() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.random2avg(100, 2), rng2.random2avg(100, 2));
        }
    }

    #[test]
    fn test_rng_serde_keeps_seed() {
        let rng = GameRng::new(99);
        let json = serde_json::to_string(&rng).unwrap();
        let back: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed(), 99);
    }
}
