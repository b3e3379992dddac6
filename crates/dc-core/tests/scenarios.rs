use dc_core::dungeon::{Branch, Coord, DungeonFeature, MapGrid, Place};
use dc_core::monster::{ClassFlags, MonsterClass, MonsterSize, MonsterType, Roster, ZombieSize};
use dc_core::pathfind::{MonsterPathfind, PathfindSubject};
use dc_core::place::{PlacementRequest, Proximity, place_monster};
use dc_core::{PlacementConfig, PlacementError, PlacementEvent, WorldContext};

fn rat() -> MonsterClass {
    MonsterClass::new(MonsterType::Rat, "rat")
        .hd(1, 2, 3)
        .size(MonsterSize::Tiny, Some(ZombieSize::Small))
        .flags(ClassFlags::HAS_SKELETON | ClassFlags::USES_STAIRS)
        .spawn(Branch::Dungeon, 1, 10)
}

fn floor_world(width: usize, height: usize, player: Coord, seed: u64) -> WorldContext {
    WorldContext::new(
        MapGrid::filled(width, height, DungeonFeature::Floor),
        Place::new(Branch::Dungeon, 1),
        player,
        seed,
    )
}

#[test]
fn test_fixed_rat_lands_away_from_player() {
    let roster = Roster::new(vec![rat()]).unwrap();
    for seed in 0..20 {
        let player = Coord::new(5, 5);
        let mut world = floor_world(10, 10, player, seed);
        let request = PlacementRequest::fixed(MonsterType::Rat)
            .with_proximity(Proximity::Anywhere)
            .with_power(1);

        let id = place_monster(&mut world, &roster, &request).unwrap();
        let monster = world.monster(id).unwrap();
        assert_eq!(monster.kind, MonsterType::Rat);
        assert!(monster.pos.grid_distance(player) >= 2, "seed {seed}: {}", monster.pos);
    }
}

#[test]
fn test_small_skeleton_without_small_bases_gives_up() {
    let troll = MonsterClass::new(MonsterType::Troll, "troll")
        .hd(7, 5, 5)
        .size(MonsterSize::Large, Some(ZombieSize::Big))
        .flags(ClassFlags::HAS_SKELETON)
        .spawn(Branch::Dungeon, 1, 10);
    let skeleton = MonsterClass::new(MonsterType::SkeletonSmall, "small skeleton");
    let roster = Roster::new(vec![troll, skeleton]).unwrap();

    let config = PlacementConfig {
        zombie_pick_attempts: 500,
        ..PlacementConfig::default()
    };
    let mut world = WorldContext::with_config(
        MapGrid::filled(20, 20, DungeonFeature::Floor),
        Place::new(Branch::Dungeon, 1),
        Coord::new(10, 10),
        3,
        config,
    );
    let request = PlacementRequest::fixed(MonsterType::SkeletonSmall).with_power(1);

    assert_eq!(
        place_monster(&mut world, &roster, &request),
        Err(PlacementError::NoZombieBase)
    );
    assert_eq!(world.monsters.count(), 0);
}

#[test]
fn test_stationary_arrival_never_shoves_player() {
    let plant = MonsterClass::new(MonsterType::Plant, "plant")
        .speed(0)
        .flags(ClassFlags::STATIONARY)
        .spawn(Branch::Dungeon, 1, 10);
    let roster = Roster::new(vec![plant]).unwrap();

    for seed in 0..10 {
        let player = Coord::new(15, 15);
        let mut world = floor_world(30, 30, player, seed);
        world.map.set_feature(player, DungeonFeature::StairsUp);
        let request = PlacementRequest::fixed(MonsterType::Plant)
            .with_proximity(Proximity::NearStairs)
            .with_power(1);

        let id = place_monster(&mut world, &roster, &request).unwrap();
        let monster = world.monster(id).unwrap();

        assert_eq!(world.player.pos, player);
        assert!(monster.pos.distance_sq(player) >= world.config.close_radius_sq);
        assert!(
            !world
                .drain_events()
                .iter()
                .any(|e| matches!(e, PlacementEvent::PlayerShoved { .. }))
        );
    }
}

#[test]
fn test_corridor_path_and_single_waypoint() {
    let map = MapGrid::from_rows(&["##########", "#........#", "##########"]).unwrap();
    let class = rat();
    let monster = Coord::new(2, 1);
    let dest = Coord::new(7, 1);
    let subject = PathfindSubject {
        class: &class,
        pos: monster,
        friendly: false,
        native: true,
    };

    let mut pathfind = MonsterPathfind::new(&map, PlacementConfig::default().los_radius_sq);
    assert!(pathfind.init_pathfind(subject, dest, true));

    let path = pathfind.backtrack();
    assert_eq!(path.len(), 6);
    assert_eq!(path.first(), Some(&monster));
    assert_eq!(path.last(), Some(&dest));
    assert_eq!(pathfind.calc_waypoints(), vec![dest]);
}
