//! Zombies, skeletons, simulacra and spectral things
//!
//! A derived undead is built from a base creature: the base's stat block is
//! rolled normally, then weakened according to the derived form.

use log::{debug, trace};

use crate::config::PlacementConfig;
use crate::dungeon::{Branch, DungeonFeature, LevelType, Place, monster_habitable};
use crate::error::{PlacementError, RegistryError};
use crate::monster::{
    ClassFlags, DerivedFamily, DerivedKind, LiveMonster, MonsterClass, MonsterRegistry,
    MonsterStats, MonsterType,
};
use crate::rng::GameRng;

/// What to raise, and how strong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZombieRequest {
    /// Base creature; `None` picks one native to the place
    pub base: Option<MonsterType>,
    pub derived: DerivedKind,
    pub power: i32,
}

/// Branches where rarity does not restrict which corpses get raised
fn ignores_zombie_rarity(place: &Place) -> bool {
    place.level_type != LevelType::Dungeon
        || place.branch.is_hell()
        || matches!(
            place.branch,
            Branch::Zot
                | Branch::Temple
                | Branch::Crypt
                | Branch::Tomb
                | Branch::HallOfBlades
                | Branch::SnakePit
        )
}

/// Base creature fits the derived form and the target cell
fn good_zombie(
    class: &MonsterClass,
    derived: DerivedKind,
    feature: Option<DungeonFeature>,
) -> bool {
    if let Some(feature) = feature
        && !monster_habitable(class, feature)
    {
        return false;
    }

    if derived.family() == DerivedFamily::Skeleton
        && !class.flags.contains(ClassFlags::HAS_SKELETON)
    {
        return false;
    }

    match derived.size_class() {
        Some(size) => class.zombie_size == Some(size),
        None => true,
    }
}

/// Native depth of a class used to judge zombie strength. Classes not
/// native to the branch fall back to their main-dungeon depth, then to
/// their hit dice.
fn zombie_level(
    registry: &(impl MonsterRegistry + ?Sized),
    class: &MonsterClass,
    place: &Place,
) -> i32 {
    class
        .spawn_in(place.branch)
        .or_else(|| class.spawn_in(Branch::Dungeon))
        .map(|s| s.level)
        .unwrap_or_else(|| {
            let level = registry.level(class.kind, place);
            if level == crate::monster::class::DEPTH_NOWHERE {
                class.hit_dice
            } else {
                level
            }
        })
}

/// Choose a base creature for a derived undead raised at `place`.
///
/// `feature` is the terrain of the target cell, when known. Gives up and
/// returns `None` after `zombie_pick_attempts` candidates.
pub fn pick_local_zombifiable_monster(
    registry: &(impl MonsterRegistry + ?Sized),
    place: &Place,
    power: i32,
    derived: DerivedKind,
    feature: Option<DungeonFeature>,
    rng: &mut GameRng,
    config: &PlacementConfig,
) -> Option<MonsterType> {
    let power = power.min(config.ood_cap);
    let candidates: Vec<&MonsterClass> = registry
        .classes()
        .iter()
        .filter(|c| c.is_zombifiable() && c.kind.species() == c.kind)
        .collect();

    let mut ignore_rarity = ignores_zombie_rarity(place);
    let mut relax = 5;

    for _ in 0..config.zombie_pick_attempts {
        let class = *rng.choose(&candidates)?;

        if !ignore_rarity && rng.one_chance_in(1000) {
            ignore_rarity = true;
        }

        let rarity = registry.rarity(class.kind, place) as i32;
        if !ignore_rarity && rarity == 0 {
            continue;
        }

        if !good_zombie(class, derived, feature) {
            continue;
        }

        let level = zombie_level(registry, class, place) - 4;
        let diff = level - power;
        let chance = if ignore_rarity {
            100
        } else {
            rarity - diff * diff / 2
        };

        if power > level - relax && power < level + relax && rng.random2avg(100, 2) <= chance {
            trace!("raising a {} as {derived}", class.kind);
            return Some(class.kind);
        }

        // Every so often widen the depth window
        if rng.one_chance_in(5) {
            relax += 1;
        }
    }

    debug!("no zombifiable base for {derived} at power {power}");
    None
}

/// Weaken a base stat block into a derived undead's
pub fn derived_stats(
    base: MonsterStats,
    family: DerivedFamily,
    rng: &mut GameRng,
    min_speed: i32,
) -> MonsterStats {
    let floors = |s: &mut MonsterStats| {
        s.ac = s.ac.max(0);
        s.ev = s.ev.max(0);
        s.speed = s.speed.max(min_speed);
    };

    let mut stats = base;
    stats.ac -= 2;
    stats.ev -= 5;
    stats.speed -= 2;
    floors(&mut stats);

    let hd = stats.hit_dice;
    match family {
        DerivedFamily::Zombie => {
            stats.hp = rng.hit_points(hd, 6, 5);
        }
        DerivedFamily::Skeleton => {
            stats.hp = rng.hit_points(hd, 5, 4);
            stats.ac -= 4;
            stats.ev -= 2;
        }
        DerivedFamily::Simulacrum => {
            stats.hp = rng.hit_points(hd, 1, 4);
        }
        DerivedFamily::Spectral => {
            stats.hp = rng.hit_points(hd, 4, 4);
            stats.ac += 4;
        }
    }
    stats.hp = stats.hp.max(1);
    floors(&mut stats);
    stats
}

/// Turn `monster` into a derived undead.
///
/// An explicit base must be zombifiable; draconian colours and rat species
/// are reduced to their common species first. The finished monster's type
/// is the requested family at the base's size.
pub fn make_zombie(
    monster: &mut LiveMonster,
    registry: &(impl MonsterRegistry + ?Sized),
    request: &ZombieRequest,
    place: &Place,
    feature: Option<DungeonFeature>,
    rng: &mut GameRng,
    config: &PlacementConfig,
) -> Result<(), PlacementError> {
    let base = match request.base {
        Some(kind) => {
            let class = registry.require(kind)?;
            if !class.is_zombifiable() {
                return Err(RegistryError::NotZombifiable(kind).into());
            }
            let species = kind.species();
            if registry.class(species).is_some() {
                species
            } else {
                kind
            }
        }
        None => pick_local_zombifiable_monster(
            registry,
            place,
            request.power,
            request.derived,
            feature,
            rng,
            config,
        )
        .ok_or(PlacementError::NoZombieBase)?,
    };

    let class = registry.require(base)?;
    let size = class
        .zombie_size
        .ok_or(RegistryError::NotZombifiable(base))?;

    let derived = request.derived.resized(size);
    let base_stats = registry.define_monster(base, rng)?;
    let stats = derived_stats(base_stats, derived.family(), rng, config.min_zombie_speed);

    monster.kind = derived.monster_type();
    monster.base_kind = Some(base);
    monster.apply_stats(stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Coord, Habitat};
    use crate::monster::class::test_class;
    use crate::monster::{MonsterId, MonsterSize, Roster, ZombieSize};

    fn big(kind: MonsterType, level: i32) -> MonsterClass {
        test_class(kind, level, 50).size(MonsterSize::Large, Some(ZombieSize::Big))
    }

    fn blank() -> LiveMonster {
        LiveMonster::new(MonsterId(0), MonsterType::ZombieSmall, Coord::new(1, 1))
    }

    #[test]
    fn test_picks_matching_size() {
        let roster = Roster::new(vec![
            test_class(MonsterType::Goblin, 3, 50),
            big(MonsterType::Ogre, 5),
        ])
        .unwrap();
        let place = Place::new(Branch::Dungeon, 6);
        let mut rng = GameRng::new(11);
        let config = PlacementConfig::default();
        for _ in 0..20 {
            let kind = pick_local_zombifiable_monster(
                &roster,
                &place,
                3,
                DerivedKind::LargeZombie,
                Some(DungeonFeature::Floor),
                &mut rng,
                &config,
            );
            assert_eq!(kind, Some(MonsterType::Ogre));
        }
    }

    #[test]
    fn test_no_candidate_gives_up() {
        let roster = Roster::new(vec![big(MonsterType::Ogre, 5), big(MonsterType::Troll, 8)])
            .unwrap();
        let place = Place::new(Branch::Dungeon, 6);
        let mut rng = GameRng::new(12);
        let config = PlacementConfig {
            zombie_pick_attempts: 500,
            ..Default::default()
        };
        let kind = pick_local_zombifiable_monster(
            &roster,
            &place,
            5,
            DerivedKind::SmallSkeleton,
            None,
            &mut rng,
            &config,
        );
        assert_eq!(kind, None);
    }

    #[test]
    fn test_skeleton_needs_bones() {
        let mut boneless = test_class(MonsterType::Goblin, 3, 50);
        boneless.flags.remove(ClassFlags::HAS_SKELETON);
        assert!(!good_zombie(&boneless, DerivedKind::SmallSkeleton, None));
        assert!(good_zombie(&boneless, DerivedKind::SmallZombie, None));
        assert!(good_zombie(&boneless, DerivedKind::SpectralThing, None));
    }

    #[test]
    fn test_habitat_checked_at_target() {
        let fish = test_class(MonsterType::BigFish, 3, 50).habitat(Habitat::WATER);
        assert!(!good_zombie(&fish, DerivedKind::SmallZombie, Some(DungeonFeature::Floor)));
        assert!(good_zombie(&fish, DerivedKind::SmallZombie, Some(DungeonFeature::DeepWater)));
    }

    #[test]
    fn test_explicit_base_resizes() {
        let roster = Roster::new(vec![big(MonsterType::Ogre, 5)]).unwrap();
        let mut monster = blank();
        let mut rng = GameRng::new(3);
        let request = ZombieRequest {
            base: Some(MonsterType::Ogre),
            derived: DerivedKind::SmallZombie,
            power: 5,
        };
        make_zombie(
            &mut monster,
            &roster,
            &request,
            &Place::default(),
            None,
            &mut rng,
            &PlacementConfig::default(),
        )
        .unwrap();
        assert_eq!(monster.kind, MonsterType::ZombieLarge);
        assert_eq!(monster.base_kind, Some(MonsterType::Ogre));
    }

    #[test]
    fn test_unzombifiable_base_is_error() {
        let roster = Roster::new(vec![
            test_class(MonsterType::Sigmund, 5, 0).flags(ClassFlags::UNIQUE),
        ])
        .unwrap();
        let mut monster = blank();
        let mut rng = GameRng::new(3);
        let request = ZombieRequest {
            base: Some(MonsterType::Sigmund),
            derived: DerivedKind::SmallZombie,
            power: 5,
        };
        let err = make_zombie(
            &mut monster,
            &roster,
            &request,
            &Place::default(),
            None,
            &mut rng,
            &PlacementConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlacementError::Registry(RegistryError::NotZombifiable(MonsterType::Sigmund))
        ));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_draconian_base_canonicalised() {
        let drac = |kind| {
            test_class(kind, 18, 10).size(MonsterSize::Large, Some(ZombieSize::Big))
        };
        let roster = Roster::new(vec![
            drac(MonsterType::Draconian),
            drac(MonsterType::RedDraconian),
        ])
        .unwrap();
        let mut monster = blank();
        let mut rng = GameRng::new(4);
        let request = ZombieRequest {
            base: Some(MonsterType::RedDraconian),
            derived: DerivedKind::LargeSkeleton,
            power: 18,
        };
        make_zombie(
            &mut monster,
            &roster,
            &request,
            &Place::default(),
            None,
            &mut rng,
            &PlacementConfig::default(),
        )
        .unwrap();
        assert_eq!(monster.base_kind, Some(MonsterType::Draconian));
        assert_eq!(monster.kind, MonsterType::SkeletonLarge);
    }

    #[test]
    fn test_derived_stat_floors() {
        let mut rng = GameRng::new(5);
        let base = MonsterStats {
            hit_dice: 4,
            hp: 20,
            ac: 1,
            ev: 3,
            speed: 4,
        };
        let skeleton = derived_stats(base, DerivedFamily::Skeleton, &mut rng, 3);
        assert_eq!(skeleton.ac, 0);
        assert_eq!(skeleton.ev, 0);
        assert_eq!(skeleton.speed, 3);
        assert!((20..=36).contains(&skeleton.hp));

        let spectral = derived_stats(base, DerivedFamily::Spectral, &mut rng, 3);
        assert_eq!(spectral.ac, 4);
        assert!((16..=32).contains(&spectral.hp));
    }

    #[test]
    fn test_zombie_hp_per_die() {
        let mut rng = GameRng::new(6);
        let base = MonsterStats {
            hit_dice: 3,
            hp: 1,
            ac: 5,
            ev: 10,
            speed: 10,
        };
        let zombie = derived_stats(base, DerivedFamily::Zombie, &mut rng, 3);
        assert!((18..=33).contains(&zombie.hp));
        assert_eq!(zombie.ac, 3);
        assert_eq!(zombie.ev, 5);
        assert_eq!(zombie.speed, 8);
    }
}
