//! Placement driver
//!
//! [`place_monster`] resolves a request, finds a cell, builds the monster
//! and its escorts and links them into the world. [`mons_place`] is the
//! entry point for level population and wandering spawns; it adds table
//! capacity checks, depth translation and the player's religion.

use log::{debug, trace};

use super::band::{BandChoice, band_member, choose_band};
use super::location::{Location, LocationSpec, find_escort_location, find_location};
use super::request::{GenFlags, MonsterChoice, PlacementRequest, Proximity, RequestedBehaviour};
use super::selector::{pick_zot_exit_defender, resolve_monster_type};
use super::zombie::{ZombieRequest, make_zombie};
use crate::dungeon::{Coord, DungeonFeature, LevelType, Place, can_submerge, monster_habitable};
use crate::error::{PlacementError, RegistryError};
use crate::monster::class::DEPTH_NOWHERE;
use crate::monster::{
    Attitude, Behaviour, ClassFlags, DEATH_GODS, EnchantKind, Genus, God, Holiness, Item,
    LiveMonster, MonsterClass, MonsterFlags, MonsterId, MonsterRegistry, MonsterType,
};
use crate::rng::GameRng;
use crate::world::{PlacementEvent, WorldContext};

// ============================================================================
// Entry points
// ============================================================================

/// Place a monster as the level builder or the wandering spawner would.
///
/// Power is taken from the current place; the request's own power is
/// ignored.
pub fn mons_place<R: MonsterRegistry + ?Sized>(
    world: &mut WorldContext,
    registry: &R,
    request: &PlacementRequest,
) -> Result<MonsterId, PlacementError> {
    let count = world.monsters.count();
    let capacity = world.monsters.capacity();
    let mut request = request.clone();

    if request.choice == MonsterChoice::Wandering {
        if count > capacity.saturating_sub(world.config.wandering_reserve) {
            debug!("too many monsters for a wandering spawn ({count})");
            return Err(PlacementError::TableFull);
        }
        request.choice = MonsterChoice::Random;
    }

    if count + 1 >= capacity {
        return Err(PlacementError::TableFull);
    }

    let place = world.place;
    if world.player.ascending_with_orb
        && request.choice == MonsterChoice::Random
        && place.level_type == LevelType::Dungeon
        && !request.is_summoned()
    {
        request.choice = MonsterChoice::Fixed(pick_zot_exit_defender(&mut world.rng));
        request.flags |= GenFlags::PERMIT_BANDS;
    } else if request.choice == MonsterChoice::Random
        || place.level_type == LevelType::Pandemonium
    {
        request.flags |= GenFlags::PERMIT_BANDS;
    }

    request.power = match place.level_type {
        LevelType::Abyss => crate::ABYSS_POWER,
        LevelType::Pandemonium => crate::PANDEMONIUM_POWER,
        _ => place.absdepth(),
    };

    let id = place_monster(world, registry, &request)?;

    if let Some(monster) = world.monsters.get_mut(id) {
        match request.behaviour {
            RequestedBehaviour::Friendly => monster.flags |= MonsterFlags::NO_REWARD,
            b if b.is_neutral() => monster.flags |= MonsterFlags::WAS_NEUTRAL,
            RequestedBehaviour::Charmed => {
                monster.attitude = Attitude::Hostile;
                monster.add_ench(EnchantKind::Charm, 0);
            }
            _ => {}
        }
    }

    if !request.flags.contains(GenFlags::FORCE_BEHAVIOUR) {
        player_angers_monster(world, registry, id);
    }

    Ok(id)
}

/// Place the monster a request describes, together with any escort band.
///
/// Returns the leader's id. Escorts that can't be placed are skipped.
pub fn place_monster<R: MonsterRegistry + ?Sized>(
    world: &mut WorldContext,
    registry: &R,
    request: &PlacementRequest,
) -> Result<MonsterId, PlacementError> {
    if let Some(pos) = request.pos
        && world.map.monster_at(pos).is_some()
    {
        return Err(PlacementError::Occupied(pos));
    }

    let resolved = resolve_monster_type(world, registry, request)?;
    let class = registry.require(resolved.kind)?;
    if class.is_unique() && world.uniques.contains(&resolved.kind) {
        return Err(PlacementError::Rejected("unique already generated"));
    }

    let protected_level = resolved.out_of_depth
        && world.turns_on_level < 1400 - world.place.absdepth() * 117;
    let band = if request.flags.contains(GenFlags::PERMIT_BANDS) && !protected_level {
        choose_band(resolved.kind, resolved.power, &world.place, &mut world.rng)
    } else {
        BandChoice::NONE
    };
    let escorts: Vec<MonsterType> = (0..band.size)
        .filter_map(|_| band_member(band.band, resolved.power, &mut world.rng))
        .collect();

    let habitat = habitat_class(registry, resolved.kind, resolved.base)?;
    let spec = LocationSpec {
        habitat,
        mover: class,
        proximity: if request.pos.is_some() {
            Proximity::Anywhere
        } else {
            resolved.proximity
        },
        friendly: request.is_friendly(),
        map_mask: request.map_mask,
    };

    let location = match request.pos {
        Some(pos) => Location {
            pos: explicit_position(
                world,
                &spec,
                pos,
                request.flags.contains(GenFlags::FORCE_PLACE),
            )?,
            proximity: request.proximity,
            shove: None,
        },
        None => find_location(world, &spec, &resolved)?,
    };

    let leader = place_one(
        world,
        registry,
        &Spawn {
            kind: resolved.kind,
            base: resolved.base,
            power: resolved.power,
            pos: location.pos,
            request,
        },
    )?;

    if let Some((from, to)) = location.shove {
        world.swap_player_to(to);
        if let Some(stair) = resolved.stair {
            world.events.push(PlacementEvent::PlayerShoved {
                id: leader,
                from,
                to,
                stair,
            });
        }
        return Ok(leader);
    }

    if location.proximity == Proximity::NearStairs {
        if let Some(stair) = resolved.stair {
            world.events.push(PlacementEvent::ArrivedViaStairs { id: leader, stair });
        }
        // Stair arrivals come alone
        return Ok(leader);
    }

    if escorts.is_empty() || leader.index() + world.config.band_reserve >= world.monsters.capacity()
    {
        return Ok(leader);
    }

    let (anchor, leader_god) = match world.monsters.get_mut(leader) {
        Some(monster) => {
            monster.flags |= MonsterFlags::BAND_MEMBER;
            (monster.pos, monster.god)
        }
        None => return Ok(leader),
    };
    let priest = class.is_priest();

    for kind in escorts {
        if registry.class(kind).is_some_and(MonsterClass::is_unique)
            && world.uniques.contains(&kind)
        {
            continue;
        }
        match place_escort(world, registry, request, kind, resolved.power, anchor) {
            Ok(id) => {
                if let Some(escort) = world.monsters.get_mut(id) {
                    escort.flags |= MonsterFlags::BAND_MEMBER;
                    if band.natural_leader {
                        escort.band_leader = Some(leader);
                    }
                    if priest {
                        escort.god = leader_god;
                    }
                }
            }
            Err(err) if err.is_recoverable() => {
                debug!("skipping {kind} escort of {leader}: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(leader)
}

/// Turn an allied or neutral monster hostile if the player's god objects to it.
///
/// Returns true when the monster was angered.
pub fn player_angers_monster<R: MonsterRegistry + ?Sized>(
    world: &mut WorldContext,
    registry: &R,
    id: MonsterId,
) -> bool {
    let religion = world.player.religion;
    let Some(monster) = world.monsters.get_mut(id) else {
        return false;
    };
    let Some(class) = registry.class(monster.kind) else {
        return false;
    };

    let wont_attack = monster.is_friendly()
        || monster.attitude.is_neutral()
        || monster.has_ench(EnchantKind::Charm);
    if !wont_attack {
        return false;
    }

    let unholy = matches!(class.holiness, Holiness::Undead | Holiness::Demonic)
        || class.flags.contains(ClassFlags::EVIL);
    let offends = religion.is_good() && unholy
        || religion.is_evil() && class.holiness == Holiness::Holy
        || religion == God::Zin && class.flags.intersects(ClassFlags::UNCLEAN | ClassFlags::CHAOTIC)
        || religion == God::Trog && class.flags.contains(ClassFlags::SPELLCASTER);

    if offends {
        debug!("{religion} is offended by {} {id}", monster.kind);
        monster.attitude = Attitude::Hostile;
        monster.del_ench(EnchantKind::Charm);
    }
    offends
}

// ============================================================================
// Single monsters
// ============================================================================

/// One monster to build at a known cell
struct Spawn<'a> {
    kind: MonsterType,
    base: Option<MonsterType>,
    power: i32,
    pos: Coord,
    request: &'a PlacementRequest,
}

/// Class whose habitat decides where a monster may stand
fn habitat_class<R: MonsterRegistry + ?Sized>(
    registry: &R,
    kind: MonsterType,
    base: Option<MonsterType>,
) -> Result<&MonsterClass, RegistryError> {
    match base {
        Some(base) if kind.is_zombified() => registry.require(base),
        _ => registry.require(kind),
    }
}

fn explicit_position(
    world: &mut WorldContext,
    spec: &LocationSpec<'_>,
    pos: Coord,
    force: bool,
) -> Result<Coord, PlacementError> {
    if force {
        if world.map.in_bounds(pos) && !world.is_occupied(pos) {
            return Ok(pos);
        }
        return Err(PlacementError::Occupied(pos));
    }
    find_escort_location(world, spec, pos)
        .ok_or(PlacementError::NoLocation(world.config.band_offset_tries))
}

fn place_escort<R: MonsterRegistry + ?Sized>(
    world: &mut WorldContext,
    registry: &R,
    request: &PlacementRequest,
    kind: MonsterType,
    power: i32,
    anchor: Coord,
) -> Result<MonsterId, PlacementError> {
    let class = registry.require(kind)?;
    let spec = LocationSpec {
        habitat: class,
        mover: class,
        proximity: Proximity::Anywhere,
        friendly: request.is_friendly(),
        map_mask: request.map_mask,
    };
    let pos = find_escort_location(world, &spec, anchor)
        .ok_or(PlacementError::NoLocation(world.config.band_offset_tries))?;
    place_one(
        world,
        registry,
        &Spawn {
            kind,
            base: None,
            power,
            pos,
            request,
        },
    )
}

/// Build a single monster and store it in the table
fn place_one<R: MonsterRegistry + ?Sized>(
    world: &mut WorldContext,
    registry: &R,
    spawn: &Spawn<'_>,
) -> Result<MonsterId, PlacementError> {
    if world.monsters.count() >= world.monsters.capacity() {
        return Err(PlacementError::TableFull);
    }

    let request = spawn.request;
    let feature = world.map.feature_at(spawn.pos);
    let mut monster = LiveMonster::new(MonsterId(0), spawn.kind, spawn.pos);

    match spawn.kind.derived_kind() {
        Some(derived) => {
            let zombie = ZombieRequest {
                base: spawn.base,
                derived,
                power: spawn.power,
            };
            make_zombie(
                &mut monster,
                registry,
                &zombie,
                &world.place,
                Some(feature),
                &mut world.rng,
                &world.config,
            )?;
        }
        None => {
            let stats = registry.define_monster(spawn.kind, &mut world.rng)?;
            monster.apply_stats(stats);
        }
    }
    // Zombies may have been resized
    let class = registry.require(monster.kind)?;

    monster.god = assign_god(class, request.god, &world.place, &mut world.rng);
    if request.god.is_some() {
        monster.flags |= MonsterFlags::GOD_GIFT;
    }

    if class.flags.contains(ClassFlags::INVISIBLE) {
        monster.add_ench(EnchantKind::Invis, 0);
    }
    if class.flags.contains(ClassFlags::CONFUSED) {
        monster.add_ench(EnchantKind::Confusion, 0);
    }
    if class.flags.contains(ClassFlags::SHAPESHIFTER) {
        monster.add_ench(EnchantKind::Shapeshifter, 0);
        let tries = world.config.redraw_limit;
        polymorph_randomly(&mut monster, registry, feature, &mut world.rng, tries)?;
    }
    if can_submerge(class, feature) && !world.rng.one_chance_in(5) {
        monster.add_ench(EnchantKind::Submerged, 0);
    }
    monster.flags |= MonsterFlags::JUST_SUMMONED;

    let summoned = request.is_summoned();
    let form = registry.require(monster.kind)?;
    if monster.kind == MonsterType::DancingWeapon {
        give_item(&mut monster, registry, spawn.power, summoned, &mut world.rng);
        if !monster.inventory.iter().any(Item::is_weapon) {
            return Err(PlacementError::Rejected("dancing weapon without a weapon"));
        }
        wield_keeping_energy(&mut monster);
    } else if form.flags.contains(ClassFlags::EQUIPPED) {
        give_item(&mut monster, registry, spawn.power, summoned, &mut world.rng);
        if form.flags.contains(ClassFlags::TWO_WEAPONS) {
            give_item(&mut monster, registry, spawn.power, summoned, &mut world.rng);
        }
        wield_keeping_energy(&mut monster);
    }

    monster.attitude = Attitude::Hostile;
    monster.behaviour = match request.behaviour {
        RequestedBehaviour::Sleep => Behaviour::Sleep,
        RequestedBehaviour::Seek => Behaviour::Seek,
        _ => Behaviour::Wander,
    };
    if class.flags.contains(ClassFlags::STATUE) {
        monster.behaviour = Behaviour::Wander;
    }
    monster.attitude = match request.behaviour {
        RequestedBehaviour::Friendly => Attitude::Friendly,
        RequestedBehaviour::GoodNeutral => Attitude::GoodNeutral,
        RequestedBehaviour::Neutral => Attitude::Neutral,
        RequestedBehaviour::StrictNeutral => Attitude::StrictNeutral,
        _ => Attitude::Hostile,
    };

    if summoned {
        monster.add_ench(EnchantKind::Abjuration, request.summon_duration);
    }

    // Notes go by the class that was generated, not a shapeshifter's disguise
    if is_interesting(world, registry, class, &monster) {
        monster.flags |= MonsterFlags::INTERESTING;
    }

    let kind = monster.kind;
    let pos = monster.pos;
    let id = world
        .insert_monster(move |_| monster)
        .ok_or(PlacementError::TableFull)?;
    if class.is_unique() {
        world.uniques.insert(class.kind);
    }
    trace!("placed {kind} {id} at {pos}");
    Ok(id)
}

fn give_item<R: MonsterRegistry + ?Sized>(
    monster: &mut LiveMonster,
    registry: &R,
    power: i32,
    summoned: bool,
    rng: &mut GameRng,
) {
    if let Some(item) = registry.give_item(monster, power, summoned, rng) {
        monster.inventory.push(item);
    }
}

/// Wield a weapon without spending the monster's first action
fn wield_keeping_energy(monster: &mut LiveMonster) {
    let energy = monster.speed_increment;
    monster.wield_melee_weapon();
    monster.speed_increment = energy;
}

fn assign_god(
    class: &MonsterClass,
    requested: Option<God>,
    place: &Place,
    rng: &mut GameRng,
) -> God {
    if let Some(god) = requested {
        return god;
    }

    let abyss = place.level_type == LevelType::Abyss;
    if class.is_priest() {
        if class.genus == Genus::Orc && !rng.one_chance_in(7) {
            return God::Beogh;
        }
        return rng.choose(&DEATH_GODS).copied().unwrap_or_default();
    }

    if class.genus == Genus::Orc {
        if rng.one_chance_in(7) {
            God::NoGod
        } else {
            God::Beogh
        }
    } else if class.kind == MonsterType::RoyalJelly {
        God::Jiyva
    } else if class.holiness == Holiness::Holy {
        if abyss && rng.one_chance_in(7) {
            God::Xom
        } else {
            God::TheShiningOne
        }
    } else if class.holiness == Holiness::Demonic && abyss && !rng.one_chance_in(7) {
        God::Lugonu
    } else {
        God::NoGod
    }
}

/// Switch a shapeshifter into some other form it could stand in
fn polymorph_randomly<R: MonsterRegistry + ?Sized>(
    monster: &mut LiveMonster,
    registry: &R,
    feature: DungeonFeature,
    rng: &mut GameRng,
    tries: u32,
) -> Result<(), PlacementError> {
    for _ in 0..tries {
        let Some(target) = rng.choose(registry.classes()) else {
            break;
        };
        if target.is_unique()
            || target.kind == monster.kind
            || target.kind.is_zombified()
            || target.flags.contains(ClassFlags::SHAPESHIFTER)
            || !monster_habitable(target, feature)
        {
            continue;
        }
        let stats = registry.define_monster(target.kind, rng)?;
        monster.base_kind = Some(monster.kind);
        monster.kind = target.kind;
        monster.apply_stats(stats);
        return Ok(());
    }
    Ok(())
}

/// Worth a line in the level notes
fn is_interesting<R: MonsterRegistry + ?Sized>(
    world: &WorldContext,
    registry: &R,
    class: &MonsterClass,
    monster: &LiveMonster,
) -> bool {
    if class.is_unique() {
        return true;
    }
    if monster.is_friendly() {
        return false;
    }

    let place = &world.place;
    let level = registry.level(class.kind, place);
    if place.is_main_dungeon()
        && level >= place.absdepth() + world.config.ood_interest_margin
        && level < DEPTH_NOWHERE
    {
        return true;
    }

    let rarity = registry.rarity(class.kind, place);
    place.level_type == LevelType::Dungeon
        && rarity > 0
        && rarity <= world.config.rare_interest_threshold
        && monster.hit_dice > 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Branch, MapGrid, StairKind};
    use crate::monster::class::test_class;
    use crate::monster::{ItemKind, Roster};

    fn floor_world(place: Place) -> WorldContext {
        WorldContext::new(
            MapGrid::filled(40, 40, DungeonFeature::Floor),
            place,
            Coord::new(20, 20),
            31,
        )
    }

    fn dungeon() -> Place {
        Place::new(Branch::Dungeon, 5)
    }

    /// Registry that arms everything with a short sword
    struct Armoury(Roster);

    impl MonsterRegistry for Armoury {
        fn classes(&self) -> &[MonsterClass] {
            self.0.classes()
        }

        fn class(&self, kind: MonsterType) -> Option<&MonsterClass> {
            self.0.class(kind)
        }

        fn give_item(
            &self,
            _monster: &LiveMonster,
            _power: i32,
            _summoned: bool,
            _rng: &mut GameRng,
        ) -> Option<Item> {
            Some(Item::new(ItemKind::Weapon, "short sword"))
        }
    }

    fn roster(classes: Vec<MonsterClass>) -> Roster {
        Roster::new(classes).unwrap()
    }

    #[test]
    fn test_fixed_placement_basics() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        let id = place_monster(&mut world, &r, &PlacementRequest::fixed(MonsterType::Goblin))
            .unwrap();
        let goblin = world.monster(id).unwrap();
        assert_eq!(goblin.kind, MonsterType::Goblin);
        assert!(goblin.flags.contains(MonsterFlags::JUST_SUMMONED));
        assert_eq!(goblin.attitude, Attitude::Hostile);
        assert_eq!(world.map.monster_at(goblin.pos), Some(id));
        assert!(goblin.hp >= 1);
    }

    #[test]
    fn test_explicit_position_occupied() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        let pos = Coord::new(4, 4);
        let request = PlacementRequest::fixed(MonsterType::Goblin).at(pos);
        let id = place_monster(&mut world, &r, &request).unwrap();
        assert_eq!(world.monster(id).map(|m| m.pos), Some(pos));
        assert_eq!(
            place_monster(&mut world, &r, &request),
            Err(PlacementError::Occupied(pos))
        );
    }

    #[test]
    fn test_unknown_class_is_fatal() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        let err = place_monster(&mut world, &r, &PlacementRequest::fixed(MonsterType::Titan))
            .unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_unique_only_once() {
        let r = roster(vec![
            test_class(MonsterType::Sigmund, 5, 0).flags(ClassFlags::UNIQUE),
        ]);
        let mut world = floor_world(dungeon());
        let request = PlacementRequest::fixed(MonsterType::Sigmund);
        let id = place_monster(&mut world, &r, &request).unwrap();
        assert!(world.monster(id).unwrap().flags.contains(MonsterFlags::INTERESTING));
        assert!(world.uniques.contains(&MonsterType::Sigmund));
        assert_eq!(
            place_monster(&mut world, &r, &request),
            Err(PlacementError::Rejected("unique already generated"))
        );
    }

    #[test]
    fn test_summon_and_friendly() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        let request = PlacementRequest::fixed(MonsterType::Goblin)
            .summoned(3)
            .with_behaviour(RequestedBehaviour::Friendly)
            .with_god(God::Okawaru);
        let id = place_monster(&mut world, &r, &request).unwrap();
        let goblin = world.monster(id).unwrap();
        assert_eq!(goblin.attitude, Attitude::Friendly);
        assert_eq!(goblin.behaviour, Behaviour::Wander);
        assert_eq!(goblin.god, God::Okawaru);
        assert!(goblin.flags.contains(MonsterFlags::GOD_GIFT));
        assert!(
            goblin
                .enchantments
                .iter()
                .any(|e| e.kind == EnchantKind::Abjuration && e.duration == 3)
        );
    }

    #[test]
    fn test_sleeping_request() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        let request =
            PlacementRequest::fixed(MonsterType::Goblin).with_behaviour(RequestedBehaviour::Sleep);
        let id = place_monster(&mut world, &r, &request).unwrap();
        assert_eq!(world.monster(id).unwrap().behaviour, Behaviour::Sleep);
    }

    #[test]
    fn test_orc_priest_gods() {
        let priest = test_class(MonsterType::OrcPriest, 3, 10)
            .genus(Genus::Orc)
            .flags(ClassFlags::PRIEST);
        let mut rng = GameRng::new(2);
        for _ in 0..100 {
            let god = assign_god(&priest, None, &dungeon(), &mut rng);
            assert!(god == God::Beogh || DEATH_GODS.contains(&god));
        }
        let orc = test_class(MonsterType::Orc, 3, 10).genus(Genus::Orc);
        for _ in 0..100 {
            let god = assign_god(&orc, None, &dungeon(), &mut rng);
            assert!(god == God::Beogh || god == God::NoGod);
        }
    }

    #[test]
    fn test_holy_and_jelly_gods() {
        let mut rng = GameRng::new(3);
        let angel = MonsterClass::new(MonsterType::Angel, "angel").holiness(Holiness::Holy);
        assert_eq!(assign_god(&angel, None, &dungeon(), &mut rng), God::TheShiningOne);
        let jelly = MonsterClass::new(MonsterType::RoyalJelly, "royal jelly");
        assert_eq!(assign_god(&jelly, None, &dungeon(), &mut rng), God::Jiyva);
        let rat = test_class(MonsterType::Rat, 1, 10);
        assert_eq!(assign_god(&rat, None, &dungeon(), &mut rng), God::NoGod);
    }

    #[test]
    fn test_equipped_wield_keeps_energy() {
        let r = Armoury(roster(vec![
            test_class(MonsterType::OrcWarrior, 4, 10)
                .flags(ClassFlags::EQUIPPED | ClassFlags::TWO_WEAPONS),
        ]));
        let mut world = floor_world(dungeon());
        let id = place_monster(&mut world, &r, &PlacementRequest::fixed(MonsterType::OrcWarrior))
            .unwrap();
        let warrior = world.monster(id).unwrap();
        assert_eq!(warrior.inventory.len(), 2);
        assert_eq!(warrior.wielded, Some(0));
        assert_eq!(warrior.speed_increment, 70);
    }

    #[test]
    fn test_dancing_weapon_needs_weapon() {
        let blade = MonsterClass::new(MonsterType::DancingWeapon, "dancing weapon")
            .flags(ClassFlags::FLIES);
        let r = roster(vec![blade.clone()]);
        let mut world = floor_world(dungeon());
        let request = PlacementRequest::fixed(MonsterType::DancingWeapon);
        assert_eq!(
            place_monster(&mut world, &r, &request),
            Err(PlacementError::Rejected("dancing weapon without a weapon"))
        );
        assert_eq!(world.monsters.count(), 0);

        let armed = Armoury(roster(vec![blade]));
        let id = place_monster(&mut world, &armed, &request).unwrap();
        assert_eq!(world.monster(id).unwrap().wielded, Some(0));
    }

    #[test]
    fn test_enchantments_from_flags() {
        let r = roster(vec![
            test_class(MonsterType::Harpy, 3, 10)
                .flags(ClassFlags::INVISIBLE | ClassFlags::CONFUSED),
        ]);
        let mut world = floor_world(dungeon());
        let id = place_monster(&mut world, &r, &PlacementRequest::fixed(MonsterType::Harpy))
            .unwrap();
        let harpy = world.monster(id).unwrap();
        assert!(harpy.has_ench(EnchantKind::Invis));
        assert!(harpy.has_ench(EnchantKind::Confusion));
    }

    #[test]
    fn test_shapeshifter_takes_another_form() {
        let r = roster(vec![
            test_class(MonsterType::Shapeshifter, 5, 5).flags(ClassFlags::SHAPESHIFTER),
            test_class(MonsterType::Goblin, 3, 10),
        ]);
        let mut world = floor_world(dungeon());
        let id = place_monster(&mut world, &r, &PlacementRequest::fixed(MonsterType::Shapeshifter))
            .unwrap();
        let shifter = world.monster(id).unwrap();
        assert!(shifter.has_ench(EnchantKind::Shapeshifter));
        assert_eq!(shifter.kind, MonsterType::Goblin);
        assert_eq!(shifter.base_kind, Some(MonsterType::Shapeshifter));
    }

    #[test]
    fn test_band_escorts_follow_leader() {
        let r = roster(vec![
            test_class(MonsterType::OrcKnight, 8, 10).genus(Genus::Orc),
            test_class(MonsterType::Orc, 1, 10).genus(Genus::Orc),
            test_class(MonsterType::OrcWarrior, 4, 10).genus(Genus::Orc),
            test_class(MonsterType::Warg, 6, 10),
            test_class(MonsterType::OrcWizard, 3, 10).genus(Genus::Orc),
            test_class(MonsterType::OrcPriest, 5, 10)
                .genus(Genus::Orc)
                .flags(ClassFlags::PRIEST),
            test_class(MonsterType::Ogre, 7, 10),
            test_class(MonsterType::Troll, 9, 10),
            test_class(MonsterType::OrcSorcerer, 8, 10).genus(Genus::Orc),
        ]);
        let mut world = floor_world(dungeon());
        let request = PlacementRequest::fixed(MonsterType::OrcKnight).permit_bands();
        let leader = place_monster(&mut world, &r, &request).unwrap();

        let knight = world.monster(leader).unwrap();
        assert!(knight.flags.contains(MonsterFlags::BAND_MEMBER));
        let escorts: Vec<&LiveMonster> = world
            .monsters
            .iter()
            .filter(|m| m.band_leader == Some(leader))
            .collect();
        assert!((3..=6).contains(&escorts.len()));
        for escort in escorts {
            assert!(escort.flags.contains(MonsterFlags::BAND_MEMBER));
            assert!(escort.pos.grid_distance(knight.pos) <= 3);
        }
    }

    #[test]
    fn test_near_stairs_arrival_event() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        world.config.stair_tries = 50_000;
        world.map.set_feature(Coord::new(5, 5), DungeonFeature::StairsDown);
        let request = PlacementRequest::fixed(MonsterType::Goblin)
            .with_proximity(Proximity::NearStairs);
        let id = place_monster(&mut world, &r, &request).unwrap();
        assert_eq!(
            world.drain_events(),
            vec![PlacementEvent::ArrivedViaStairs {
                id,
                stair: StairKind::Down
            }]
        );
        assert!(world.monster(id).unwrap().pos.grid_distance(Coord::new(5, 5)) <= 1);
    }

    #[test]
    fn test_mons_place_wandering_reserve() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 100)]);
        let config = crate::PlacementConfig {
            monster_capacity: 60,
            wandering_reserve: 50,
            ..Default::default()
        };
        let mut world = WorldContext::with_config(
            MapGrid::filled(40, 40, DungeonFeature::Floor),
            Place::new(Branch::Dungeon, 4),
            Coord::new(20, 20),
            5,
            config,
        );
        for _ in 0..11 {
            world.insert_monster(|id| LiveMonster::new(id, MonsterType::Rat, Coord::new(0, 0)));
        }
        let wandering = PlacementRequest::new(MonsterChoice::Wandering);
        assert_eq!(mons_place(&mut world, &r, &wandering), Err(PlacementError::TableFull));
        assert!(mons_place(&mut world, &r, &PlacementRequest::random()).is_ok());
    }

    #[test]
    fn test_mons_place_charmed() {
        let r = roster(vec![test_class(MonsterType::Goblin, 3, 10)]);
        let mut world = floor_world(dungeon());
        let request = PlacementRequest::fixed(MonsterType::Goblin)
            .with_behaviour(RequestedBehaviour::Charmed);
        let id = mons_place(&mut world, &r, &request).unwrap();
        let goblin = world.monster(id).unwrap();
        assert_eq!(goblin.attitude, Attitude::Hostile);
        assert!(goblin.has_ench(EnchantKind::Charm));
    }

    #[test]
    fn test_good_god_angers_undead_ally() {
        let r = roster(vec![
            test_class(MonsterType::Mummy, 6, 10).holiness(Holiness::Undead),
        ]);
        let mut world = floor_world(dungeon());
        world.player.religion = God::Elyvilon;
        let request = PlacementRequest::fixed(MonsterType::Mummy)
            .with_behaviour(RequestedBehaviour::Friendly);
        let id = mons_place(&mut world, &r, &request).unwrap();
        let mummy = world.monster(id).unwrap();
        assert_eq!(mummy.attitude, Attitude::Hostile);
        assert!(mummy.flags.contains(MonsterFlags::NO_REWARD));

        let forced = request.force_behaviour();
        let id = mons_place(&mut world, &r, &forced).unwrap();
        assert_eq!(world.monster(id).unwrap().attitude, Attitude::Friendly);
    }

    #[test]
    fn test_zombie_uses_base_stats() {
        let r = Armoury(roster(vec![
            test_class(MonsterType::Goblin, 3, 10),
            MonsterClass::new(MonsterType::ZombieSmall, "small zombie").holiness(Holiness::Undead),
        ]));
        let mut world = floor_world(dungeon());
        let request =
            PlacementRequest::fixed(MonsterType::ZombieSmall).with_base(MonsterType::Goblin);
        let id = place_monster(&mut world, &r, &request).unwrap();
        let zombie = world.monster(id).unwrap();
        assert_eq!(zombie.kind, MonsterType::ZombieSmall);
        assert_eq!(zombie.base_kind, Some(MonsterType::Goblin));
        assert_eq!(zombie.hit_dice, 3);
        assert!(zombie.inventory.is_empty());
    }
}
