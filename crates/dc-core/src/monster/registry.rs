//! Monster class registry
//!
//! Placement never owns monster data. It asks a [`MonsterRegistry`] for class
//! templates, per-branch rarity and starting equipment. [`Roster`] is the
//! plain in-memory implementation used by the shipped data and by tests.

use log::warn;
use strum::EnumCount;

use super::class::DEPTH_NOWHERE;
use super::{ClassFlags, Item, LiveMonster, MonsterClass, MonsterStats, MonsterType};
use crate::dungeon::{Medium, Place};
use crate::error::RegistryError;
use crate::rng::GameRng;

/// Source of static monster data
pub trait MonsterRegistry {
    /// Every registered class, in a stable order
    fn classes(&self) -> &[MonsterClass];

    fn class(&self, kind: MonsterType) -> Option<&MonsterClass>;

    fn require(&self, kind: MonsterType) -> Result<&MonsterClass, RegistryError> {
        self.class(kind).ok_or(RegistryError::UnknownClass(kind))
    }

    /// Rarity of `kind` at `place` (0 = never generated there)
    fn rarity(&self, kind: MonsterType, place: &Place) -> u32 {
        self.class(kind)
            .and_then(|c| c.spawn_in(place.branch))
            .map(|s| s.rarity as u32)
            .unwrap_or(0)
    }

    /// Native depth of `kind` in the branch of `place`
    fn level(&self, kind: MonsterType, place: &Place) -> i32 {
        self.class(kind)
            .and_then(|c| c.spawn_in(place.branch))
            .map(|s| s.level)
            .unwrap_or(DEPTH_NOWHERE)
    }

    /// Roll a fresh stat block for `kind`
    fn define_monster(
        &self,
        kind: MonsterType,
        rng: &mut GameRng,
    ) -> Result<MonsterStats, RegistryError> {
        let class = self.require(kind)?;
        Ok(MonsterStats {
            hit_dice: class.hit_dice,
            hp: rng.hit_points(class.hit_dice, class.hp_min, class.hp_rand).max(1),
            ac: class.ac,
            ev: class.ev,
            speed: class.speed,
        })
    }

    /// Starting item for `monster`; called once per hand for equipped classes
    fn give_item(
        &self,
        _monster: &LiveMonster,
        _power: i32,
        _summoned: bool,
        _rng: &mut GameRng,
    ) -> Option<Item> {
        None
    }
}

/// In-memory registry indexed by monster type
#[derive(Debug, Clone, Default)]
pub struct Roster {
    classes: Vec<MonsterClass>,
    index: Vec<Option<usize>>,
}

impl Roster {
    /// Build a roster, rejecting duplicate or self-contradictory classes
    pub fn new(classes: Vec<MonsterClass>) -> Result<Self, RegistryError> {
        let mut index = vec![None; MonsterType::COUNT];
        for (i, class) in classes.iter().enumerate() {
            let slot = &mut index[class.kind as usize];
            if slot.is_some() {
                warn!("duplicate monster class {}", class.kind);
                return Err(RegistryError::DuplicateClass(class.kind));
            }
            *slot = Some(i);
            validate(class)?;
        }
        Ok(Self { classes, index })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn validate(class: &MonsterClass) -> Result<(), RegistryError> {
    let inconsistent = |reason| {
        warn!("monster class {} is inconsistent: {}", class.kind, reason);
        Err(RegistryError::Inconsistent {
            kind: class.kind,
            reason,
        })
    };

    if class.hit_dice < 0 || class.hp_min < 0 || class.hp_rand < 0 {
        return inconsistent("negative hit dice");
    }
    if class.speed < 0 {
        return inconsistent("negative speed");
    }
    if class.flags.contains(ClassFlags::SUBMERGES)
        && !matches!(class.habitat.primary, Medium::Water | Medium::Lava)
        && !class.habitat.swims()
    {
        return inconsistent("submerges without water or lava habitat");
    }
    if class.kind.is_zombified() && class.zombie_size.is_some() {
        return inconsistent("derived undead cannot be zombified again");
    }
    Ok(())
}

impl MonsterRegistry for Roster {
    fn classes(&self) -> &[MonsterClass] {
        &self.classes
    }

    fn class(&self, kind: MonsterType) -> Option<&MonsterClass> {
        self.index
            .get(kind as usize)
            .copied()
            .flatten()
            .map(|i| &self.classes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Branch, Habitat};
    use crate::monster::class::test_class;

    fn test_roster() -> Roster {
        Roster::new(vec![
            test_class(MonsterType::Rat, 1, 50),
            test_class(MonsterType::Orc, 4, 20).spawn(Branch::OrcishMines, 8, 90),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let roster = test_roster();
        assert_eq!(roster.len(), 2);
        assert!(roster.class(MonsterType::Rat).is_some());
        assert!(roster.class(MonsterType::Troll).is_none());
        assert_eq!(
            roster.require(MonsterType::Troll).unwrap_err(),
            RegistryError::UnknownClass(MonsterType::Troll)
        );
    }

    #[test]
    fn test_rarity_and_level() {
        let roster = test_roster();
        let d3 = Place::new(Branch::Dungeon, 3);
        let mines = Place::new(Branch::OrcishMines, 2);
        assert_eq!(roster.rarity(MonsterType::Orc, &d3), 20);
        assert_eq!(roster.rarity(MonsterType::Orc, &mines), 90);
        assert_eq!(roster.rarity(MonsterType::Rat, &mines), 0);
        assert_eq!(roster.level(MonsterType::Orc, &mines), 8);
        assert_eq!(roster.level(MonsterType::Rat, &mines), DEPTH_NOWHERE);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Roster::new(vec![
            test_class(MonsterType::Rat, 1, 50),
            test_class(MonsterType::Rat, 2, 10),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateClass(MonsterType::Rat));
    }

    #[test]
    fn test_submerging_land_class_rejected() {
        let bad = test_class(MonsterType::Eel, 3, 10).flags(ClassFlags::SUBMERGES);
        assert!(matches!(
            Roster::new(vec![bad]),
            Err(RegistryError::Inconsistent { .. })
        ));
        let good = test_class(MonsterType::Eel, 3, 10)
            .habitat(Habitat::WATER)
            .flags(ClassFlags::SUBMERGES);
        assert!(Roster::new(vec![good]).is_ok());
    }

    #[test]
    fn test_define_monster() {
        let roster = test_roster();
        let mut rng = GameRng::new(7);
        let stats = roster.define_monster(MonsterType::Orc, &mut rng).unwrap();
        assert_eq!(stats.hit_dice, 4);
        assert!(stats.hp >= 12 && stats.hp <= 32);
        assert!(roster.define_monster(MonsterType::Troll, &mut rng).is_err());
    }
}
