//! Habitat oracle: which terrain a monster class can live on

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::DungeonFeature;
use crate::monster::{ClassFlags, MonsterClass, MonsterType};

/// Movement medium a monster class prefers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Medium {
    #[default]
    Land,
    Water,
    Lava,
    Rock,
}

impl Medium {
    /// The feature that best represents this medium
    pub const fn preferred_feature(&self) -> DungeonFeature {
        match self {
            Medium::Land => DungeonFeature::Floor,
            Medium::Water => DungeonFeature::DeepWater,
            Medium::Lava => DungeonFeature::Lava,
            Medium::Rock => DungeonFeature::RockWall,
        }
    }

    /// Can a creature of this medium exist on `actual`?
    ///
    /// Land creatures accept any walkable ground and shallow water. Water
    /// creatures accept deep and shallow water. Rock dwellers need rock or
    /// stone, never permanent rock.
    pub const fn accepts(&self, actual: DungeonFeature) -> bool {
        match self {
            Medium::Land => {
                actual.is_floor_like() || matches!(actual, DungeonFeature::ShallowWater)
            }
            Medium::Water => actual.is_watery(),
            Medium::Lava => matches!(actual, DungeonFeature::Lava),
            Medium::Rock => {
                matches!(actual, DungeonFeature::RockWall | DungeonFeature::StoneWall)
            }
        }
    }
}

/// Primary and secondary medium of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Habitat {
    pub primary: Medium,
    pub secondary: Medium,
}

impl Habitat {
    pub const LAND: Habitat = Habitat::single(Medium::Land);
    pub const WATER: Habitat = Habitat::single(Medium::Water);
    pub const LAVA: Habitat = Habitat::single(Medium::Lava);
    pub const ROCK: Habitat = Habitat::single(Medium::Rock);
    pub const AMPHIBIOUS: Habitat = Habitat {
        primary: Medium::Land,
        secondary: Medium::Water,
    };

    pub const fn single(medium: Medium) -> Self {
        Self {
            primary: medium,
            secondary: medium,
        }
    }

    /// Land creature that also swims
    pub const fn is_amphibious(&self) -> bool {
        matches!(self.primary, Medium::Land) && matches!(self.secondary, Medium::Water)
            || matches!(self.primary, Medium::Water) && matches!(self.secondary, Medium::Land)
    }

    /// True if either medium involves water
    pub const fn swims(&self) -> bool {
        matches!(self.primary, Medium::Water) || matches!(self.secondary, Medium::Water)
    }
}

/// Can monsters of `class` live on `actual`?
///
/// Either medium may match. Airborne classes also hover over lava and deep
/// water. Fire elementals never appear on water even though their habitat is
/// land.
pub fn monster_habitable(class: &MonsterClass, actual: DungeonFeature) -> bool {
    if class.kind == MonsterType::FireElemental && actual.is_watery() {
        return false;
    }

    if class.habitat.primary.accepts(actual) || class.habitat.secondary.accepts(actual) {
        return true;
    }

    class.is_airborne() && actual.is_hazard()
}

/// Can this class hide under the surface of `actual`?
pub fn can_submerge(class: &MonsterClass, actual: DungeonFeature) -> bool {
    if !class.flags.contains(ClassFlags::SUBMERGES) || !monster_habitable(class, actual) {
        return false;
    }
    match actual {
        DungeonFeature::DeepWater | DungeonFeature::ShallowWater => class.habitat.swims(),
        DungeonFeature::Lava => class.habitat.primary == Medium::Lava,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::class::test_class;

    #[test]
    fn test_land_accepts_shallow_not_deep() {
        assert!(Medium::Land.accepts(DungeonFeature::Floor));
        assert!(Medium::Land.accepts(DungeonFeature::StairsDown));
        assert!(Medium::Land.accepts(DungeonFeature::ShallowWater));
        assert!(!Medium::Land.accepts(DungeonFeature::DeepWater));
        assert!(!Medium::Land.accepts(DungeonFeature::StoneWall));
    }

    #[test]
    fn test_rock_excludes_permarock() {
        assert!(Medium::Rock.accepts(DungeonFeature::RockWall));
        assert!(!Medium::Rock.accepts(DungeonFeature::PermaRockWall));
    }

    #[test]
    fn test_airborne_over_hazards() {
        let mut bat = test_class(MonsterType::Bat, 2, 5);
        assert!(!monster_habitable(&bat, DungeonFeature::Lava));
        bat.flags |= ClassFlags::FLIES;
        assert!(monster_habitable(&bat, DungeonFeature::Lava));
        assert!(monster_habitable(&bat, DungeonFeature::DeepWater));
        assert!(!monster_habitable(&bat, DungeonFeature::StoneWall));
    }

    #[test]
    fn test_fire_elemental_avoids_water() {
        let fe = test_class(MonsterType::FireElemental, 6, 5);
        assert!(monster_habitable(&fe, DungeonFeature::Floor));
        assert!(!monster_habitable(&fe, DungeonFeature::ShallowWater));
    }

    #[test]
    fn test_submerge() {
        let mut eel = test_class(MonsterType::Eel, 3, 5);
        eel.habitat = Habitat::WATER;
        assert!(!can_submerge(&eel, DungeonFeature::DeepWater));
        eel.flags |= ClassFlags::SUBMERGES;
        assert!(can_submerge(&eel, DungeonFeature::DeepWater));
        assert!(!can_submerge(&eel, DungeonFeature::Floor));

        let mut snake = test_class(MonsterType::LavaSnake, 3, 5);
        snake.habitat = Habitat::LAVA;
        snake.flags |= ClassFlags::SUBMERGES;
        assert!(can_submerge(&snake, DungeonFeature::Lava));
        assert!(!can_submerge(&snake, DungeonFeature::DeepWater));
    }

    #[test]
    fn test_amphibious() {
        assert!(Habitat::AMPHIBIOUS.is_amphibious());
        assert!(!Habitat::LAND.is_amphibious());
        assert!(Habitat::AMPHIBIOUS.swims());
    }
}
