//! Monster pathfinding
//!
//! A reverse A* search: it starts at the destination and expands towards
//! the monster, so the backtracking pointers left behind lead from the
//! monster to the destination. Frontier cells live in buckets keyed by
//! their estimated total path length, which keeps the search ordered
//! without a heap.
//!
//! The heuristic is the Chebyshev distance to the monster, which never
//! overestimates a king-move path, so a cell popped from the frontier is
//! never improved later.

use log::{debug, trace};

use crate::LOS_RADIUS;
use crate::dungeon::{Coord, DungeonFeature, MapGrid, Place, TrapKind, monster_habitable};
use crate::error::RegistryError;
use crate::monster::{ClassFlags, Intelligence, LiveMonster, MonsterClass, MonsterRegistry};
use crate::place::can_place_on_trap;

const INFINITE_DISTANCE: i32 = i32::MAX;

/// Neighbour order: diagonals first, orthogonals last. When both cost the
/// same the orthogonal step is recorded last and wins ties in the bucket,
/// which keeps paths from zigzagging.
const NEIGHBOUR_ORDER: [usize; 8] = [1, 3, 5, 7, 0, 2, 4, 6];

/// How far a monster will track a target it can't see (0 = unlimited)
pub fn tracking_range(class: &MonsterClass, native: bool) -> i32 {
    let range = match class.intelligence {
        Intelligence::Plant => 2,
        Intelligence::Insect => 4,
        Intelligence::Animal => 5,
        Intelligence::Normal => LOS_RADIUS,
        Intelligence::High => 0,
    };
    if range > 0 && native { range + 3 } else { range }
}

/// The monster a path is searched for
#[derive(Debug, Clone, Copy)]
pub struct PathfindSubject<'a> {
    /// Class whose movement rules apply (the base creature of a zombie)
    pub class: &'a MonsterClass,
    pub pos: Coord,
    pub friendly: bool,
    /// Native to the current branch; knows its secret doors and traps
    pub native: bool,
}

impl<'a> PathfindSubject<'a> {
    /// Describe a live monster standing in `place`
    pub fn for_monster<R: MonsterRegistry + ?Sized>(
        monster: &LiveMonster,
        registry: &'a R,
        place: &Place,
    ) -> Result<Self, RegistryError> {
        let kind = match monster.base_kind {
            Some(base) if monster.kind.is_zombified() => base,
            _ => monster.kind,
        };
        let class = registry.require(kind)?;
        Ok(Self {
            class,
            pos: monster.pos,
            friendly: monster.is_friendly(),
            native: class.spawn_in(place.branch).is_some(),
        })
    }

    fn is_amphibious(&self) -> bool {
        self.class.habitat.is_amphibious()
    }

    /// Monsters only dodge traps they know about. Allies know what the
    /// player knows; natives know every trap of their home.
    fn knows_trap(&self, known_to_player: bool) -> bool {
        if self.friendly {
            known_to_player
        } else {
            self.native
        }
    }
}

/// Reverse A* search for one monster
#[derive(Debug)]
pub struct MonsterPathfind<'a> {
    map: &'a MapGrid,
    los_radius_sq: i32,
    subject: Option<PathfindSubject<'a>>,

    /// Where the search begins (the destination)
    start: Coord,
    /// Where the search ends (the monster)
    target: Coord,
    pos: Coord,

    allow_diagonals: bool,
    range: i32,
    found: bool,

    min_length: i32,
    max_length: i32,

    dist: Vec<i32>,
    /// Direction from each cell one step back towards the destination
    prev: Vec<u8>,
    /// Frontier cells by estimated total path length
    buckets: Vec<Vec<Coord>>,
}

impl<'a> MonsterPathfind<'a> {
    pub fn new(map: &'a MapGrid, los_radius_sq: i32) -> Self {
        let cells = (map.width().max(0) * map.height().max(0)) as usize;
        Self {
            map,
            los_radius_sq,
            subject: None,
            start: Coord::default(),
            target: Coord::default(),
            pos: Coord::default(),
            allow_diagonals: true,
            range: 0,
            found: false,
            min_length: 0,
            max_length: 0,
            dist: vec![INFINITE_DISTANCE; cells],
            prev: vec![0; cells],
            buckets: Vec::new(),
        }
    }

    /// Limit how far from the monster the search may wander (0 = no limit).
    /// Negative values are ignored.
    pub fn set_range(&mut self, range: i32) {
        if range >= 0 {
            self.range = range;
        }
    }

    pub fn range(&self) -> i32 {
        self.range
    }

    /// Search for a path from `subject` to `dest`.
    ///
    /// The destination itself is never checked for traversability, so a
    /// path may end next to a target the monster cannot actually enter.
    pub fn init_pathfind(
        &mut self,
        subject: PathfindSubject<'a>,
        dest: Coord,
        allow_diagonals: bool,
    ) -> bool {
        self.subject = Some(subject);
        self.start = dest;
        self.target = subject.pos;
        self.pos = dest;
        self.allow_diagonals = allow_diagonals;
        self.found = false;

        if self.start == self.target {
            self.found = true;
            return true;
        }
        if !self.map.in_bounds(self.start) || !self.map.in_bounds(self.target) {
            return false;
        }

        self.found = self.start_pathfind();
        if !self.found {
            debug!(
                "no path for {} from {} to {}",
                subject.class.name, self.target, self.start
            );
        }
        self.found
    }

    fn start_pathfind(&mut self) -> bool {
        self.min_length = self.pos.grid_distance(self.target);
        self.max_length = self.min_length;
        self.dist.fill(INFINITE_DISTANCE);
        self.buckets.clear();
        let start = self.index(self.pos);
        self.dist[start] = 0;

        loop {
            if self.calc_path_to_neighbours() {
                return true;
            }
            if !self.get_best_position() {
                return false;
            }
        }
    }

    /// Relax every neighbour of the current cell; true once the monster's
    /// own cell is reached.
    fn calc_path_to_neighbours(&mut self) -> bool {
        let here = self.dist[self.index(self.pos)];

        for dir in NEIGHBOUR_ORDER {
            if !self.allow_diagonals && dir % 2 == 1 {
                continue;
            }
            let npos = self.pos.step(dir);
            if !self.map.in_bounds(npos) || !self.traversable(npos) {
                continue;
            }
            if self.range > 0 && self.estimated_cost(npos) > self.range {
                continue;
            }

            let distance = here + self.travel_cost(npos);
            let idx = self.index(npos);
            let old_dist = self.dist[idx];
            if distance >= old_dist {
                continue;
            }

            let total = distance + self.estimated_cost(npos);
            if old_dist == INFINITE_DISTANCE {
                self.push_frontier(npos, total);
                self.max_length = self.max_length.max(total);
            } else {
                let old_total = old_dist + self.estimated_cost(npos);
                if let Some(bucket) = self.buckets.get_mut(old_total as usize)
                    && let Some(i) = bucket.iter().position(|&c| c == npos)
                {
                    bucket.remove(i);
                }
                self.push_frontier(npos, total);
            }

            self.dist[idx] = distance;
            self.prev[idx] = ((dir + 4) % 8) as u8;

            if npos == self.target {
                trace!("reached {} at distance {distance}", self.target);
                return true;
            }
        }
        false
    }

    /// Pop the most recent cell of the lowest non-empty bucket
    fn get_best_position(&mut self) -> bool {
        for length in self.min_length..=self.max_length {
            let Some(bucket) = self.buckets.get_mut(length as usize) else {
                break;
            };
            if let Some(pos) = bucket.pop() {
                self.min_length = length;
                self.pos = pos;
                return true;
            }
        }
        false
    }

    fn push_frontier(&mut self, pos: Coord, total: i32) {
        let slot = total as usize;
        if self.buckets.len() <= slot {
            self.buckets.resize_with(slot + 1, Vec::new);
        }
        self.buckets[slot].push(pos);
    }

    /// Every step of the last path found, from the monster's cell to the
    /// destination. Empty when the last search failed.
    pub fn backtrack(&self) -> Vec<Coord> {
        if !self.found {
            return Vec::new();
        }

        let mut path = vec![self.target];
        let mut pos = self.target;
        // Each step moves strictly closer in search distance, so the walk
        // can't be longer than the map.
        for _ in 0..self.dist.len() {
            if pos == self.start {
                return path;
            }
            pos = pos.step(self.prev[self.index(pos)] as usize);
            if !self.map.in_bounds(pos) {
                break;
            }
            path.push(pos);
        }
        if pos == self.start {
            path
        } else {
            Vec::new()
        }
    }

    /// The last path reduced to turning points.
    ///
    /// A cell becomes a waypoint when the monster could no longer walk in a
    /// straight line from the previous waypoint past it. The destination is
    /// always the final entry.
    pub fn calc_waypoints(&self) -> Vec<Coord> {
        let path = self.backtrack();
        let Some(&last) = path.last() else {
            return path;
        };
        let allow_deep = self.subject.is_some_and(|s| s.is_amphibious());

        let mut waypoints = Vec::new();
        let mut pos = path[0];
        for i in 1..path.len() {
            if !self
                .map
                .can_go_straight(pos, path[i], allow_deep, self.los_radius_sq)
            {
                pos = path[i - 1];
                waypoints.push(pos);
            }
        }
        if pos != last {
            waypoints.push(last);
        }
        waypoints
    }

    fn traversable(&self, pos: Coord) -> bool {
        let Some(subject) = self.subject else {
            return self.map.feature_at(pos).is_floor_like();
        };
        let class = subject.class;
        let feat = self.map.feature_at(pos);

        let smart = class.intelligence >= Intelligence::Normal;
        if feat == DungeonFeature::ClosedDoor || (feat == DungeonFeature::SecretDoor && smart) {
            // Allies only use secret doors of a branch they call home.
            let knows_door =
                feat == DungeonFeature::ClosedDoor || !subject.friendly || subject.native;
            if knows_door
                && monster_habitable(class, DungeonFeature::Floor)
                && class
                    .flags
                    .intersects(ClassFlags::EATS_ITEMS | ClassFlags::OPENS_DOORS)
            {
                return true;
            }
        }

        if !monster_habitable(class, feat) {
            return false;
        }

        if let Some(trap) = self.map.trap_at(pos) {
            if trap.kind == TrapKind::Zot && subject.friendly && subject.knows_trap(trap.known) {
                return false;
            }
            if !can_place_on_trap(Some(class), trap.kind) {
                return false;
            }
        }
        true
    }

    fn travel_cost(&self, npos: Coord) -> i32 {
        let Some(subject) = self.subject else {
            return 1;
        };
        let here = self.map.feature_at(self.pos);
        let there = self.map.feature_at(npos);

        if here.is_closed_door() || there.is_closed_door() {
            return 2;
        }

        let airborne = subject.class.is_airborne();
        if !airborne
            && !subject.is_amphibious()
            && (here == DungeonFeature::ShallowWater || there == DungeonFeature::ShallowWater)
        {
            return 2;
        }

        if let Some(trap) = self.map.trap_at(npos) {
            let knows = subject.knows_trap(trap.known);
            if trap.kind.is_nuisance() {
                return if knows && subject.friendly { 3 } else { 1 };
            }
            if knows && !airborne {
                return 2;
            }
        }
        1
    }

    fn estimated_cost(&self, pos: Coord) -> i32 {
        pos.grid_distance(self.target)
    }

    fn index(&self, pos: Coord) -> usize {
        (pos.y * self.map.width() + pos.x) as usize
    }
}
