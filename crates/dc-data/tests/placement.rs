use std::collections::HashSet;

use dc_core::dungeon::{Branch, Coord, DungeonFeature, MapGrid, Place, monster_habitable};
use dc_core::monster::{ClassFlags, MonsterFlags, MonsterRegistry, MonsterType};
use dc_core::pathfind::{MonsterPathfind, PathfindSubject};
use dc_core::place::{PlacementRequest, mons_place, place_monster};
use dc_core::{PlacementEvent, WorldContext};
use proptest::prelude::*;

fn floor_world(place: Place, seed: u64) -> WorldContext {
    WorldContext::new(
        MapGrid::filled(50, 50, DungeonFeature::Floor),
        place,
        Coord::new(25, 25),
        seed,
    )
}

#[test]
fn test_populate_dungeon_level() {
    let registry = dc_data::registry().unwrap();
    let mut world = floor_world(Place::new(Branch::Dungeon, 6), 1);

    let placed = (0..30)
        .filter_map(|_| mons_place(&mut world, &registry, &PlacementRequest::random()).ok())
        .count();
    assert!(placed >= 15, "only {placed} placements succeeded");

    let mut cells = HashSet::new();
    for monster in world.monsters.iter() {
        assert!(cells.insert(monster.pos), "two monsters on {}", monster.pos);
        assert_eq!(world.map.monster_at(monster.pos), Some(monster.id));
        assert_ne!(monster.pos, world.player.pos);
        assert!(monster.hp >= 1);
    }
}

#[test]
fn test_warlord_brings_escorts() {
    let registry = dc_data::registry().unwrap();
    let mut world = floor_world(Place::new(Branch::OrcishMines, 4), 2);
    let request = PlacementRequest::fixed(MonsterType::OrcWarlord)
        .with_power(10)
        .permit_bands();

    let leader = place_monster(&mut world, &registry, &request).unwrap();
    let escorts: Vec<_> = world
        .monsters
        .iter()
        .filter(|m| m.id != leader)
        .collect();
    assert!(escorts.len() >= 5, "{} escorts", escorts.len());
    for escort in escorts {
        assert_eq!(escort.band_leader, Some(leader));
        assert!(escort.flags.contains(MonsterFlags::BAND_MEMBER));
    }
}

#[test]
fn test_hall_of_blades_animates_weapons() {
    let registry = dc_data::registry().unwrap();
    let mut world = floor_world(Place::new(Branch::HallOfBlades, 1), 3);
    let id = mons_place(&mut world, &registry, &PlacementRequest::random()).unwrap();
    let blade = world.monster(id).unwrap();
    assert_eq!(blade.kind, MonsterType::DancingWeapon);
    let wielded = blade.wielded.and_then(|i| blade.inventory.get(i)).unwrap();
    assert!(wielded.is_weapon());
}

#[test]
fn test_abyss_spawns_abyss_natives() {
    let registry = dc_data::registry().unwrap();
    let mut world = floor_world(Place::abyss(), 4);
    for _ in 0..10 {
        let Ok(id) = mons_place(&mut world, &registry, &PlacementRequest::random()) else {
            continue;
        };
        let monster = world.monster(id).unwrap();
        let kind = monster.base_kind.unwrap_or(monster.kind);
        let class = registry.require(kind).unwrap();
        assert!(class.flags.contains(ClassFlags::ABYSS), "{kind}");
    }
}

#[test]
fn test_local_zombies_at_depth() {
    let registry = dc_data::registry().unwrap();
    let mut world = floor_world(Place::new(Branch::Dungeon, 10), 5);
    for kind in [MonsterType::ZombieSmall, MonsterType::SkeletonLarge, MonsterType::SpectralThing] {
        let id = place_monster(&mut world, &registry, &PlacementRequest::fixed(kind).with_power(9))
            .unwrap();
        let zombie = world.monster(id).unwrap();
        let base = registry.require(zombie.base_kind.unwrap()).unwrap();
        assert!(base.is_zombifiable());
        assert!(zombie.kind.is_zombified());
    }
}

#[test]
fn test_stair_arrival_with_roster() {
    let registry = dc_data::registry().unwrap();
    let mut world = floor_world(Place::new(Branch::Dungeon, 4), 6);
    world.config.stair_tries = 50_000;
    world.map.set_feature(Coord::new(10, 10), DungeonFeature::StairsUp);
    let request = PlacementRequest::fixed(MonsterType::Kobold)
        .with_proximity(dc_core::place::Proximity::NearStairs);

    let id = place_monster(&mut world, &registry, &request).unwrap();
    assert!(world.monster(id).unwrap().pos.grid_distance(Coord::new(10, 10)) <= 1);
    assert!(matches!(
        world.drain_events().as_slice(),
        [PlacementEvent::ArrivedViaStairs { .. }]
    ));
}

#[test]
fn test_placed_monster_walks_to_player() {
    let registry = dc_data::registry().unwrap();
    let mut world = WorldContext::new(
        MapGrid::from_rows(&[
            "##############",
            "#............#",
            "#.##########.#",
            "#.#........#.#",
            "#.#........+.#",
            "#.##########.#",
            "#............#",
            "##############",
        ])
        .unwrap(),
        Place::new(Branch::Dungeon, 4),
        Coord::new(5, 4),
        7,
    );
    let request = PlacementRequest::fixed(MonsterType::Orc).at(Coord::new(1, 1)).force_place();
    let id = place_monster(&mut world, &registry, &request).unwrap();
    let orc = world.monster(id).unwrap();

    let subject = PathfindSubject::for_monster(orc, &registry, &world.place).unwrap();
    let mut pathfind = MonsterPathfind::new(&world.map, world.config.los_radius_sq);
    assert!(pathfind.init_pathfind(subject, world.player.pos, true));
    let path = pathfind.backtrack();
    assert!(path.contains(&Coord::new(11, 4)), "orcs open the door");
    assert_eq!(pathfind.calc_waypoints().last(), Some(&world.player.pos));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_random_spawns_fit_their_terrain(seed in any::<u64>(), depth in 1i32..20) {
        let registry = dc_data::registry().unwrap();
        let rows = [
            "################",
            "#......~~~.....#",
            "#......~~~.....#",
            "#...{{.---.....#",
            "#...{{.---.....#",
            "#..............#",
            "################",
        ];
        let mut world = WorldContext::new(
            MapGrid::from_rows(&rows).unwrap(),
            Place::new(Branch::Dungeon, depth),
            Coord::new(1, 1),
            seed,
        );
        for _ in 0..5 {
            if let Ok(id) = mons_place(&mut world, &registry, &PlacementRequest::random()) {
                let monster = world.monster(id).unwrap();
                let kind = match monster.base_kind {
                    Some(base) if monster.kind.is_zombified() => base,
                    _ => monster.kind,
                };
                let class = registry.require(kind).unwrap();
                let feature = world.map.feature_at(monster.pos);
                prop_assert!(monster_habitable(class, feature), "{} on {}", kind, feature);
            }
        }
    }
}
