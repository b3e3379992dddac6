//! Spawn location search

use log::{debug, trace};

use super::request::Proximity;
use super::selector::Resolved;
use crate::dungeon::{
    Coord, MapMask, StairContact, StairProximity, TrapKind, monster_habitable,
};
use crate::error::PlacementError;
use crate::monster::{MonsterClass, MonsterSize};
use crate::world::WorldContext;

/// Whether a monster may be generated on a trap of `kind`.
///
/// Teleport traps never host a new monster; shafts only hold monsters that
/// would not fall down them. `None` stands for a not yet chosen monster.
pub fn can_place_on_trap(class: Option<&MonsterClass>, kind: TrapKind) -> bool {
    match kind {
        TrapKind::Teleport => false,
        TrapKind::Shaft => class.is_some_and(|c| c.is_airborne() || c.size == MonsterSize::Tiny),
        _ => true,
    }
}

/// What a location must suit
#[derive(Debug, Clone, Copy)]
pub struct LocationSpec<'a> {
    /// Class whose habitat the cell must match (the base of a zombie)
    pub habitat: &'a MonsterClass,
    /// Class of the monster actually placed
    pub mover: &'a MonsterClass,
    pub proximity: Proximity,
    /// Allies may appear in sanctuaries
    pub friendly: bool,
    pub map_mask: MapMask,
}

/// A chosen spawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub pos: Coord,
    /// Proximity actually honoured
    pub proximity: Proximity,
    /// Player to be moved from the first cell to the second
    pub shove: Option<(Coord, Coord)>,
}

/// Whether `pos` can receive a monster described by `spec`
pub fn valid_generation_location(
    world: &WorldContext,
    spec: &LocationSpec<'_>,
    pos: Coord,
) -> bool {
    let map = &world.map;
    if !map.in_bounds(pos) || map.monster_at(pos).is_some() || world.player.pos == pos {
        return false;
    }

    if !monster_habitable(spec.habitat, map.feature_at(pos)) {
        return false;
    }

    if map.is_sanctuary(pos) && !spec.friendly {
        return false;
    }

    if !map.unforbidden(pos, spec.map_mask) {
        return false;
    }

    if spec.proximity == Proximity::AwayFromPlayer
        && world.player.pos.distance_sq(pos) < world.config.close_radius_sq
    {
        return false;
    }

    map.trap_at(pos)
        .is_none_or(|trap| can_place_on_trap(Some(spec.mover), trap.kind))
}

/// Look for a free cell next to a staircase for a monster to arrive on
pub(crate) fn find_stair_candidate(
    world: &mut WorldContext,
    mask: MapMask,
) -> Option<(Coord, StairContact)> {
    for _ in 0..world.config.stair_tries {
        let pos = world.map.random_in_bounds(&mut world.rng);
        if world.is_occupied(pos) || !world.map.unforbidden(pos, mask) {
            continue;
        }
        if world.map.feature_at(pos).is_solid() {
            continue;
        }
        if world
            .map
            .trap_at(pos)
            .is_some_and(|trap| !can_place_on_trap(None, trap.kind))
        {
            continue;
        }

        let contact = world.map.near_stairs(pos, world.player.pos);
        if contact.proximity > StairProximity::None {
            trace!("stair candidate {pos} ({:?})", contact.proximity);
            return Some((pos, contact));
        }
    }
    None
}

/// Find a cell for a monster with no fixed position.
///
/// Stair arrivals use the candidate found while resolving the monster
/// type. When that fails the search degrades to a cell away from the
/// player, as does an arrival the player's staircase can't accommodate.
pub fn find_location(
    world: &mut WorldContext,
    spec: &LocationSpec<'_>,
    resolved: &Resolved,
) -> Result<Location, PlacementError> {
    let mut spec = *spec;

    if spec.proximity == Proximity::NearStairs {
        let blocked_stair = resolved.stair_proximity == StairProximity::PlayerOnStairs
            && (spec.mover.speed == 0
                || resolved
                    .candidate
                    .is_some_and(|c| world.map.feature_at(c).is_hazard()));
        if resolved.candidate.is_none() || spec.mover.is_stationary() || blocked_stair {
            spec.proximity = Proximity::AwayFromPlayer;
        }
    }

    let limit = world.config.location_tries;
    let mut tries = 0;
    while tries < limit {
        tries += 1;

        let pos = match (spec.proximity, resolved.candidate) {
            (Proximity::NearStairs, Some(candidate)) => candidate,
            _ => world.map.random_in_bounds(&mut world.rng),
        };

        if !valid_generation_location(world, &spec, pos) {
            if spec.proximity == Proximity::NearStairs {
                spec.proximity = Proximity::AwayFromPlayer;
                tries = 0;
            }
            continue;
        }

        let player = world.player.pos;
        let close = player.distance_sq(pos) < world.config.close_radius_sq;
        match spec.proximity {
            Proximity::Anywhere => {
                if player.grid_distance(pos) < 2 + world.rng.random2(3) {
                    continue;
                }
            }
            Proximity::CloseToPlayer if !close => continue,
            Proximity::AwayFromPlayer if close => continue,
            Proximity::NearStairs => {
                if resolved.stair_proximity == StairProximity::PlayerOnStairs {
                    if world.player.caught {
                        spec.proximity = Proximity::AwayFromPlayer;
                        tries = 0;
                        continue;
                    }
                    // The monster takes the staircase, the player the candidate
                    let stair = resolved.stair_pos.unwrap_or(player);
                    return Ok(Location {
                        pos: stair,
                        proximity: spec.proximity,
                        shove: Some((stair, pos)),
                    });
                }
            }
            _ => {}
        }

        return Ok(Location {
            pos,
            proximity: spec.proximity,
            shove: None,
        });
    }

    debug!("no location for {} after {limit} tries", spec.mover.kind);
    Err(PlacementError::NoLocation(limit))
}

/// Cell for an escort: the anchor itself if usable, else a random cell
/// within three steps of it
pub fn find_escort_location(
    world: &mut WorldContext,
    spec: &LocationSpec<'_>,
    anchor: Coord,
) -> Option<Coord> {
    if valid_generation_location(world, spec, anchor) {
        return Some(anchor);
    }

    for _ in 0..world.config.band_offset_tries {
        let offset = Coord::new(world.rng.random_range(-3, 3), world.rng.random_range(-3, 3));
        let pos = anchor + offset;
        if valid_generation_location(world, spec, pos) {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Branch, DungeonFeature, Habitat, MapGrid, Place, StairKind, Trap};
    use crate::monster::class::test_class;
    use crate::monster::{ClassFlags, LiveMonster, MonsterType};
    use crate::place::request::PlacementRequest;
    use proptest::prelude::*;

    fn floor_world() -> WorldContext {
        WorldContext::new(
            MapGrid::filled(30, 30, DungeonFeature::Floor),
            Place::new(Branch::Dungeon, 3),
            Coord::new(15, 15),
            21,
        )
    }

    fn spec<'a>(class: &'a MonsterClass, proximity: Proximity) -> LocationSpec<'a> {
        LocationSpec {
            habitat: class,
            mover: class,
            proximity,
            friendly: false,
            map_mask: MapMask::empty(),
        }
    }

    fn unresolved() -> Resolved {
        let request = PlacementRequest::random();
        let mut world = floor_world();
        let roster =
            crate::monster::Roster::new(vec![test_class(MonsterType::Orc, 2, 10)]).unwrap();
        crate::place::resolve_monster_type(&mut world, &roster, &request.with_power(2)).unwrap()
    }

    #[test]
    fn test_trap_rules() {
        let orc = test_class(MonsterType::Orc, 3, 10);
        let mut bat = test_class(MonsterType::Bat, 1, 10);
        bat.flags |= ClassFlags::FLIES;
        assert!(!can_place_on_trap(Some(&bat), TrapKind::Teleport));
        assert!(can_place_on_trap(Some(&bat), TrapKind::Shaft));
        assert!(!can_place_on_trap(Some(&orc), TrapKind::Shaft));
        assert!(!can_place_on_trap(None, TrapKind::Shaft));
        assert!(can_place_on_trap(Some(&orc), TrapKind::Dart));
    }

    #[test]
    fn test_valid_rejects_occupied_and_player() {
        let mut world = floor_world();
        let orc = test_class(MonsterType::Orc, 3, 10);
        let s = spec(&orc, Proximity::Anywhere);
        assert!(!valid_generation_location(&world, &s, Coord::new(15, 15)));
        assert!(!valid_generation_location(&world, &s, Coord::new(-1, 4)));

        let pos = Coord::new(3, 3);
        assert!(valid_generation_location(&world, &s, pos));
        world.insert_monster(|id| LiveMonster::new(id, MonsterType::Rat, pos));
        assert!(!valid_generation_location(&world, &s, pos));
    }

    #[test]
    fn test_valid_habitat_sanctuary_mask() {
        let mut world = floor_world();
        let orc = test_class(MonsterType::Orc, 3, 10);
        let fish = test_class(MonsterType::BigFish, 3, 10).habitat(Habitat::WATER);
        let water = Coord::new(2, 2);
        world.map.set_feature(water, DungeonFeature::DeepWater);
        assert!(!valid_generation_location(&world, &spec(&orc, Proximity::Anywhere), water));
        assert!(valid_generation_location(&world, &spec(&fish, Proximity::Anywhere), water));

        let holy = Coord::new(4, 4);
        world.map.set_sanctuary(holy, true);
        let mut s = spec(&orc, Proximity::Anywhere);
        assert!(!valid_generation_location(&world, &s, holy));
        s.friendly = true;
        assert!(valid_generation_location(&world, &s, holy));

        let vault = Coord::new(6, 6);
        world.map.set_mask(vault, MapMask::VAULT);
        s.map_mask = MapMask::VAULT;
        assert!(!valid_generation_location(&world, &s, vault));
    }

    #[test]
    fn test_valid_away_needs_distance() {
        let world = floor_world();
        let orc = test_class(MonsterType::Orc, 3, 10);
        let s = spec(&orc, Proximity::AwayFromPlayer);
        assert!(!valid_generation_location(&world, &s, Coord::new(17, 17)));
        assert!(valid_generation_location(&world, &s, Coord::new(1, 1)));
    }

    #[test]
    fn test_valid_teleport_trap() {
        let mut world = floor_world();
        let orc = test_class(MonsterType::Orc, 3, 10);
        let pos = Coord::new(8, 8);
        world.map.add_trap(Trap::new(pos, TrapKind::Teleport));
        assert!(!valid_generation_location(&world, &spec(&orc, Proximity::Anywhere), pos));
    }

    #[test]
    fn test_close_to_player() {
        let mut world = floor_world();
        let orc = test_class(MonsterType::Orc, 3, 10);
        let resolved = unresolved();
        for _ in 0..20 {
            let loc = find_location(&mut world, &spec(&orc, Proximity::CloseToPlayer), &resolved)
                .unwrap();
            assert!(world.player.pos.distance_sq(loc.pos) < 64);
            assert_eq!(loc.shove, None);
        }
    }

    #[test]
    fn test_close_radius_boundary_counts_as_away() {
        let mut world = WorldContext::new(
            MapGrid::new(30, 30),
            Place::new(Branch::Dungeon, 3),
            Coord::new(10, 10),
            5,
        );
        world.map.set_feature(Coord::new(10, 10), DungeonFeature::Floor);
        let edge = Coord::new(18, 10);
        world.map.set_feature(edge, DungeonFeature::Floor);
        assert_eq!(world.player.pos.distance_sq(edge), 64);
        world.config.location_tries = 5000;

        let orc = test_class(MonsterType::Orc, 3, 10);
        let resolved = unresolved();
        let close = find_location(&mut world, &spec(&orc, Proximity::CloseToPlayer), &resolved);
        assert_eq!(close, Err(PlacementError::NoLocation(5000)));

        let away = spec(&orc, Proximity::AwayFromPlayer);
        assert!(valid_generation_location(&world, &away, edge));
        let loc = find_location(&mut world, &away, &resolved).unwrap();
        assert_eq!(loc.pos, edge);
        assert_eq!(loc.proximity, Proximity::AwayFromPlayer);
    }

    #[test]
    fn test_no_habitable_cell() {
        let mut world = floor_world();
        let fish = test_class(MonsterType::BigFish, 3, 10).habitat(Habitat::WATER);
        let resolved = unresolved();
        let err = find_location(&mut world, &spec(&fish, Proximity::Anywhere), &resolved)
            .unwrap_err();
        assert_eq!(err, PlacementError::NoLocation(45));
    }

    #[test]
    fn test_stationary_stair_arrival_degrades() {
        let mut world = floor_world();
        let plant = MonsterClass::new(MonsterType::Plant, "plant").speed(0);
        let mut resolved = unresolved();
        resolved.candidate = Some(Coord::new(3, 4));
        resolved.stair = Some(StairKind::Down);
        resolved.stair_pos = Some(Coord::new(3, 3));
        resolved.stair_proximity = StairProximity::Near;
        let loc = find_location(&mut world, &spec(&plant, Proximity::NearStairs), &resolved)
            .unwrap();
        assert_eq!(loc.proximity, Proximity::AwayFromPlayer);
    }

    #[test]
    fn test_player_on_stairs_shoved() {
        let mut world = floor_world();
        let stair = world.player.pos;
        world.map.set_feature(stair, DungeonFeature::StairsUp);
        let orc = test_class(MonsterType::Orc, 3, 10);
        let mut resolved = unresolved();
        let candidate = Coord::new(14, 15);
        resolved.candidate = Some(candidate);
        resolved.stair = Some(StairKind::Up);
        resolved.stair_pos = Some(stair);
        resolved.stair_proximity = StairProximity::PlayerOnStairs;

        let loc =
            find_location(&mut world, &spec(&orc, Proximity::NearStairs), &resolved).unwrap();
        assert_eq!(loc.pos, stair);
        assert_eq!(loc.shove, Some((stair, candidate)));
        assert_eq!(loc.proximity, Proximity::NearStairs);
    }

    #[test]
    fn test_caught_player_not_shoved() {
        let mut world = floor_world();
        world.player.caught = true;
        let stair = world.player.pos;
        world.map.set_feature(stair, DungeonFeature::StairsUp);
        let orc = test_class(MonsterType::Orc, 3, 10);
        let mut resolved = unresolved();
        resolved.candidate = Some(Coord::new(14, 15));
        resolved.stair_pos = Some(stair);
        resolved.stair_proximity = StairProximity::PlayerOnStairs;

        let loc =
            find_location(&mut world, &spec(&orc, Proximity::NearStairs), &resolved).unwrap();
        assert_eq!(loc.proximity, Proximity::AwayFromPlayer);
        assert_eq!(loc.shove, None);
    }

    #[test]
    fn test_stair_candidate_next_to_stairs() {
        let mut world = floor_world();
        world.config.stair_tries = 20_000;
        world.map.set_feature(Coord::new(5, 5), DungeonFeature::StairsDown);
        let (pos, contact) = find_stair_candidate(&mut world, MapMask::empty()).unwrap();
        assert!(pos.grid_distance(Coord::new(5, 5)) <= 1);
        assert_eq!(contact.stair, Some(StairKind::Down));
    }

    #[test]
    fn test_escort_uses_free_anchor_then_offsets() {
        let mut world = floor_world();
        let orc = test_class(MonsterType::Orc, 3, 10);
        let s = spec(&orc, Proximity::Anywhere);
        let anchor = Coord::new(5, 5);
        assert_eq!(find_escort_location(&mut world, &s, anchor), Some(anchor));

        world.insert_monster(|id| LiveMonster::new(id, MonsterType::Orc, anchor));
        let pos = find_escort_location(&mut world, &s, anchor).unwrap();
        assert_ne!(pos, anchor);
        assert!(pos.grid_distance(anchor) <= 3);
    }

    proptest! {
        #[test]
        fn prop_found_location_is_valid(seed in any::<u64>(), walls in 0usize..200) {
            let mut world = floor_world();
            world.rng = crate::rng::GameRng::new(seed);
            for i in 0..walls {
                let pos = world.map.random_in_bounds(&mut world.rng);
                let feature = if i % 3 == 0 {
                    DungeonFeature::DeepWater
                } else {
                    DungeonFeature::RockWall
                };
                world.map.set_feature(pos, feature);
            }
            let orc = test_class(MonsterType::Orc, 3, 10);
            let s = spec(&orc, Proximity::Anywhere);
            let resolved = unresolved();
            if let Ok(loc) = find_location(&mut world, &s, &resolved) {
                prop_assert!(valid_generation_location(&world, &s, loc.pos));
                prop_assert!(world.player.pos.grid_distance(loc.pos) >= 2);
            }
        }
    }
}
