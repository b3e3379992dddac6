//! Monster type selection
//!
//! Turns a [`PlacementRequest`] into a concrete monster type and the power
//! it was picked at. Random picks weigh each class by its rarity in the
//! current branch and by how far its native depth lies from the requested
//! power; the Abyss and Pandemonium use their own rarity.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::location::find_stair_candidate;
use super::request::{MonsterChoice, PlacementRequest, Proximity};
use crate::config::PlacementConfig;
use crate::dungeon::{Branch, Coord, LevelType, Place, StairKind, StairProximity};
use crate::error::PlacementError;
use crate::monster::{
    ClassFlags, DRACONIAN_COLOURS, DRACONIAN_JOBS, MonsterRegistry, MonsterType,
};
use crate::rng::GameRng;
use crate::world::WorldContext;

// ============================================================================
// Portal vault monster lists
// ============================================================================

/// One entry of a portal vault's random monster list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultEntry {
    /// A specific monster, or a random draconian
    Fixed {
        choice: MonsterChoice,
        base: Option<MonsterType>,
    },
    /// Whatever is native to the packed place (see [`Place::packed`])
    Native(u16),
}

/// Weighted vault list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSpawn {
    pub weight: u32,
    pub entry: VaultEntry,
}

impl VaultSpawn {
    pub fn fixed(weight: u32, kind: MonsterType) -> Self {
        Self {
            weight,
            entry: VaultEntry::Fixed {
                choice: MonsterChoice::Fixed(kind),
                base: None,
            },
        }
    }

    pub fn native(weight: u32, place: Place) -> Self {
        Self {
            weight,
            entry: VaultEntry::Native(place.packed()),
        }
    }
}

// ============================================================================
// Random picks
// ============================================================================

/// Result of a random pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedMonster {
    pub kind: MonsterType,
    /// Power after lowering and fuzzing
    pub power: i32,
    /// The class is native well below the requested power
    pub out_of_depth: bool,
}

/// Occasionally push a main-dungeon power deeper the longer the player
/// lingers on the level. Never lowers the power, never exceeds the cap.
pub fn fuzz_power(power: i32, turns_on_level: i32, rng: &mut GameRng, cap: i32) -> i32 {
    if power > cap {
        return power;
    }
    let mut level = power;

    if turns_on_level > 700 - level * 117 && rng.one_chance_in(7) {
        level += (rng.random2avg(9, 2) - 4).max(0);
    }

    if turns_on_level > 1400 - level * 117 && rng.one_chance_in(5000) {
        level += rng.random2(12);
    }

    level.min(cap)
}

/// Pick a random monster suitable for `place` at `power`.
///
/// Returns `None` when nothing can be generated there or the iteration
/// budget runs out.
pub fn pick_random_monster(
    registry: &(impl MonsterRegistry + ?Sized),
    place: &Place,
    power: i32,
    turns_on_level: i32,
    rng: &mut GameRng,
    config: &PlacementConfig,
) -> Option<PickedMonster> {
    if place.level_type == LevelType::Labyrinth || place.branch == Branch::Temple {
        return None;
    }

    if power == crate::ABYSS_POWER || place.is_chaotic_realm() {
        return pick_abyss_monster(registry, power, rng, config);
    }

    let mut level = power;
    if place.is_main_dungeon() && rng.one_chance_in(4) {
        level = rng.random2(power);
    }
    let original = level;

    if place.is_main_dungeon() && level <= config.ood_cap {
        level = fuzz_power(level, turns_on_level, rng, config.ood_cap);
    }
    level = level.min(config.max_pick_level);

    let classes = registry.classes();
    for _ in 0..config.pick_iterations {
        let mut drawn = None;
        for _ in 0..config.redraw_limit {
            let class = rng.choose(classes)?;
            let rarity = registry.rarity(class.kind, place);
            if rarity > 0 {
                drawn = Some((class.kind, rarity as i32));
                break;
            }
        }
        let Some((kind, rarity)) = drawn else {
            debug!("no class with nonzero rarity at {:?}", place);
            return None;
        };

        let native = registry.level(kind, place);
        let diff = native - level;
        let chance = rarity - diff * diff;
        if diff.abs() <= 5 && rng.random2avg(100, 2) <= chance {
            trace!("picked {kind} at power {level} (native {native})");
            return Some(PickedMonster {
                kind,
                power: level,
                out_of_depth: native > original + 5,
            });
        }
    }

    debug!(
        "gave up picking a monster for {:?} at power {level}",
        place
    );
    None
}

fn pick_abyss_monster(
    registry: &(impl MonsterRegistry + ?Sized),
    power: i32,
    rng: &mut GameRng,
    config: &PlacementConfig,
) -> Option<PickedMonster> {
    let classes = registry.classes();
    for _ in 0..config.pick_iterations {
        let mut drawn = None;
        for _ in 0..config.redraw_limit {
            let class = rng.choose(classes)?;
            if class.flags.contains(ClassFlags::ABYSS) {
                drawn = Some(class);
                break;
            }
        }
        let class = drawn?;

        if rng.random2avg(100, 2) <= class.abyss_rarity as i32 || rng.one_chance_in(100) {
            return Some(PickedMonster {
                kind: class.kind,
                power,
                out_of_depth: false,
            });
        }
    }
    debug!("gave up picking an abyss monster");
    None
}

// ============================================================================
// Draconians
// ============================================================================

/// Scorchers never come in white
fn drac_colour_incompatible(job: MonsterType, colour: MonsterType) -> bool {
    job == MonsterType::DraconianScorcher && colour == MonsterType::WhiteDraconian
}

/// Resolve one of the random draconian choices.
///
/// With a colour base, `RandomDraconian` returns either that colour or a
/// job compatible with it.
pub fn resolve_draconian(
    choice: MonsterChoice,
    base: Option<MonsterType>,
    rng: &mut GameRng,
    config: &PlacementConfig,
) -> Option<MonsterType> {
    match choice {
        MonsterChoice::RandomBaseDraconian => rng.choose(&DRACONIAN_COLOURS).copied(),
        MonsterChoice::RandomNonbaseDraconian => rng.choose(&DRACONIAN_JOBS).copied(),
        MonsterChoice::RandomDraconian => {
            let all: Vec<MonsterType> = DRACONIAN_COLOURS
                .iter()
                .chain(DRACONIAN_JOBS.iter())
                .copied()
                .collect();
            let colour = base.filter(|b| b.is_draconian_colour());
            for _ in 0..config.redraw_limit {
                let drawn = *rng.choose(&all)?;
                match colour {
                    None => return Some(drawn),
                    Some(c) if drawn == c => return Some(drawn),
                    Some(c) if drawn.is_draconian_job() && !drac_colour_incompatible(drawn, c) => {
                        return Some(drawn);
                    }
                    Some(_) => {}
                }
            }
            None
        }
        MonsterChoice::Fixed(kind) => Some(kind),
        MonsterChoice::Random | MonsterChoice::Wandering => None,
    }
}

// ============================================================================
// Zot exit defenders
// ============================================================================

const ZOT_DEFENDERS: &[(u32, MonsterType)] = &[
    (92, MonsterType::Imp),
    (80, MonsterType::Hellion),
    (25, MonsterType::HellHound),
    (24, MonsterType::AbominationLarge),
    (21, MonsterType::AbominationSmall),
    (20, MonsterType::RedDevil),
    (14, MonsterType::PitFiend),
];

/// Demon sent after a player climbing out with the Orb
pub fn pick_zot_exit_defender(rng: &mut GameRng) -> MonsterType {
    if rng.one_chance_in(11) {
        return MonsterType::PandemoniumDemon;
    }
    rng.choose_weighted(ZOT_DEFENDERS)
        .unwrap_or(MonsterType::Imp)
}

// ============================================================================
// Request resolution
// ============================================================================

/// Outcome of resolving a request's monster choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub kind: MonsterType,
    /// Base creature carried through for zombies and draconians
    pub base: Option<MonsterType>,
    pub power: i32,
    /// Proximity after any degradation
    pub proximity: Proximity,
    /// Staircase the monster arrives through
    pub stair: Option<StairKind>,
    /// Cell next to the staircase chosen for a stair arrival
    pub candidate: Option<Coord>,
    /// Staircase cell; the player's cell when they stand on it
    pub stair_pos: Option<Coord>,
    pub stair_proximity: StairProximity,
    pub out_of_depth: bool,
}

/// Everything about an arrival that is settled before the type is chosen
#[derive(Debug, Clone, Copy)]
struct Arrival {
    base: Option<MonsterType>,
    power: i32,
    proximity: Proximity,
    stair: Option<StairKind>,
    candidate: Option<Coord>,
    stair_pos: Option<Coord>,
    stair_proximity: StairProximity,
}

impl Arrival {
    fn new(request: &PlacementRequest) -> Self {
        Self {
            base: request.base,
            power: request.power,
            proximity: request.proximity,
            stair: None,
            candidate: None,
            stair_pos: None,
            stair_proximity: StairProximity::None,
        }
    }

    fn with_kind(self, kind: MonsterType) -> Resolved {
        Resolved {
            kind,
            base: self.base,
            power: self.power,
            proximity: self.proximity,
            stair: self.stair,
            candidate: self.candidate,
            stair_pos: self.stair_pos,
            stair_proximity: self.stair_proximity,
            out_of_depth: false,
        }
    }

    fn with_pick(mut self, picked: PickedMonster) -> Resolved {
        self.power = picked.power;
        Resolved {
            out_of_depth: picked.out_of_depth,
            ..self.with_kind(picked.kind)
        }
    }
}

/// Turn the request's choice into a concrete monster type.
///
/// Only the world's random state is advanced; the stair candidate for a
/// `NearStairs` request is found here but nothing is moved.
pub fn resolve_monster_type(
    world: &mut WorldContext,
    registry: &(impl MonsterRegistry + ?Sized),
    request: &PlacementRequest,
) -> Result<Resolved, PlacementError> {
    let mut arrival = Arrival::new(request);

    if request.proximity == Proximity::NearStairs && request.pos.is_none() {
        match find_stair_candidate(world, request.map_mask) {
            Some((pos, contact)) => {
                arrival.candidate = Some(pos);
                arrival.stair = contact.stair;
                arrival.stair_pos = contact.stair_pos;
                arrival.stair_proximity = contact.proximity;
            }
            None => {
                debug!("no staircase to arrive through; placing away from the player");
                arrival.proximity = Proximity::AwayFromPlayer;
            }
        }
    }

    match request.choice {
        MonsterChoice::Fixed(kind) => Ok(arrival.with_kind(kind)),
        choice if choice.is_draconian() => {
            let kind = resolve_draconian(choice, request.base, &mut world.rng, &world.config)
                .ok_or(PlacementError::NoMonsterType)?;
            Ok(arrival.with_kind(kind))
        }
        _ => resolve_random(world, registry, arrival),
    }
}

fn resolve_random(
    world: &mut WorldContext,
    registry: &(impl MonsterRegistry + ?Sized),
    mut arrival: Arrival,
) -> Result<Resolved, PlacementError> {
    // Monsters coming up a down staircase come from deeper
    let mut stair_shift = 0;
    if arrival.proximity == Proximity::NearStairs {
        match arrival.stair {
            Some(StairKind::Down) => stair_shift = 1,
            Some(StairKind::Up) if arrival.power <= 0 => {
                arrival.proximity = Proximity::AwayFromPlayer;
            }
            Some(StairKind::Up) => stair_shift = -1,
            _ => {}
        }
    }
    arrival.power += stair_shift;

    if world.place.branch == Branch::HallOfBlades {
        return Ok(arrival.with_kind(MonsterType::DancingWeapon));
    }

    let mut place = world.place;
    if place.level_type == LevelType::PortalVault {
        if let Some(entry) = world.rng.choose_weighted(&vault_table(&world.vault_spawns)) {
            match entry {
                VaultEntry::Fixed { choice, base } => {
                    let kind = resolve_draconian(choice, base, &mut world.rng, &world.config);
                    if let Some(kind) = kind {
                        arrival.base = base;
                        return Ok(arrival.with_kind(kind));
                    }
                }
                VaultEntry::Native(packed) => {
                    if let Some(native) = Place::from_packed(packed) {
                        if arrival.power == world.place.absdepth() + stair_shift {
                            arrival.power = native.absdepth() + stair_shift;
                        }
                        place = native;
                    }
                }
            }
        } else {
            place = place.with_level_type(LevelType::Dungeon);
        }
    }

    let turns = world.turns_on_level;
    let pick = |world: &mut WorldContext, power: i32| {
        pick_random_monster(registry, &place, power, turns, &mut world.rng, &world.config)
            .ok_or(PlacementError::NoMonsterType)
    };

    let requested_power = arrival.power;
    if arrival.proximity == Proximity::NearStairs {
        for _ in 0..world.config.stair_pick_tries {
            let picked = pick(world, requested_power)?;
            let uses_stairs = registry
                .class(picked.kind)
                .is_some_and(|c| c.can_use_stairs());
            if uses_stairs {
                return Ok(arrival.with_pick(picked));
            }
        }
        debug!("no stair-using monster found; placing away from the player");
        arrival.proximity = Proximity::AwayFromPlayer;
        arrival.power -= stair_shift;
    }

    let picked = pick(world, arrival.power)?;
    Ok(arrival.with_pick(picked))
}

fn vault_table(spawns: &[VaultSpawn]) -> Vec<(u32, VaultEntry)> {
    spawns.iter().map(|s| (s.weight, s.entry)).collect()
}
