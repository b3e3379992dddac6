//! Monster class definitions
//!
//! A representative roster: every monster type the placement rules name,
//! with native branches, depths and rarities loosely following the
//! classic dungeon layout. Depths are absolute (D:1 is depth 0).

use dc_core::RegistryError;
use dc_core::dungeon::{Branch, Habitat, Medium};
use dc_core::monster::{
    ClassFlags, Genus, Holiness, Intelligence, MonsterClass, MonsterSize, MonsterType, Roster,
    ZombieSize,
};

use Branch as B;
use ClassFlags as F;
use MonsterSize as S;
use MonsterType as M;

const SMALL: Option<ZombieSize> = Some(ZombieSize::Small);
const BIG: Option<ZombieSize> = Some(ZombieSize::Big);

// ============================================================================
// Templates
// ============================================================================

/// Dumb animal with a skeleton
fn beast(kind: MonsterType, name: &'static str) -> MonsterClass {
    MonsterClass::new(kind, name)
        .intelligence(Intelligence::Animal)
        .flags(F::HAS_SKELETON)
}

/// Door-opening, stair-using, armed humanoid
fn humanoid(kind: MonsterType, name: &'static str) -> MonsterClass {
    MonsterClass::new(kind, name)
        .flags(F::OPENS_DOORS | F::USES_STAIRS | F::HAS_SKELETON | F::EQUIPPED)
}

fn orc(kind: MonsterType, name: &'static str) -> MonsterClass {
    humanoid(kind, name)
        .genus(Genus::Orc)
        .size(S::Medium, SMALL)
        .defence(0, 10)
}

fn deep_elf(kind: MonsterType, name: &'static str) -> MonsterClass {
    humanoid(kind, name)
        .genus(Genus::Elf)
        .size(S::Medium, SMALL)
        .defence(0, 13)
}

fn draconian(kind: MonsterType, name: &'static str) -> MonsterClass {
    humanoid(kind, name)
        .genus(Genus::Draconian)
        .size(S::Big, BIG)
        .defence(9, 10)
}

/// Derived undead form; never raised again and never picked at random
fn derived(kind: MonsterType, name: &'static str) -> MonsterClass {
    MonsterClass::new(kind, name)
        .holiness(Holiness::Undead)
        .intelligence(Intelligence::Plant)
}

fn demon(kind: MonsterType, name: &'static str) -> MonsterClass {
    MonsterClass::new(kind, name)
        .holiness(Holiness::Demonic)
        .flags(F::EVIL | F::USES_STAIRS)
}

// ============================================================================
// Roster
// ============================================================================

/// Every monster class the engine knows about
pub fn monster_classes() -> Vec<MonsterClass> {
    vec![
        // Vermin and animals
        beast(M::Rat, "rat")
            .hd(1, 2, 3)
            .size(S::Tiny, SMALL)
            .defence(1, 10)
            .spawn(B::Dungeon, 0, 99)
            .abyss(10),
        beast(M::GreyRat, "grey rat")
            .hd(1, 3, 5)
            .size(S::Tiny, SMALL)
            .defence(2, 12)
            .speed(12)
            .spawn(B::Dungeon, 4, 50),
        beast(M::GreenRat, "green rat")
            .hd(2, 3, 5)
            .size(S::Small, SMALL)
            .defence(5, 11)
            .spawn(B::Dungeon, 8, 40)
            .spawn(B::Swamp, 11, 30),
        beast(M::OrangeRat, "orange rat")
            .hd(3, 4, 5)
            .size(S::Small, SMALL)
            .defence(7, 10)
            .spawn(B::Dungeon, 12, 30)
            .spawn(B::Lair, 9, 40),
        beast(M::Jackal, "jackal")
            .hd(1, 3, 5)
            .size(S::Small, SMALL)
            .defence(2, 12)
            .speed(14)
            .spawn(B::Dungeon, 0, 90),
        beast(M::Bat, "bat")
            .hd(1, 2, 3)
            .size(S::Tiny, SMALL)
            .defence(1, 14)
            .speed(30)
            .flags(F::FLIES)
            .spawn(B::Dungeon, 1, 75)
            .spawn(B::Crypt, 17, 30),
        MonsterClass::new(M::Butterfly, "butterfly")
            .hd(1, 1, 2)
            .size(S::Tiny, None)
            .defence(0, 25)
            .intelligence(Intelligence::Insect)
            .flags(F::FLIES | F::CONFUSED)
            .spawn(B::Dungeon, 0, 50)
            .spawn(B::Lair, 8, 40),
        beast(M::Hog, "hog")
            .hd(6, 3, 5)
            .size(S::Medium, SMALL)
            .defence(2, 9)
            .speed(16)
            .spawn(B::Dungeon, 5, 30)
            .spawn(B::Lair, 8, 40),
        beast(M::Sheep, "sheep")
            .hd(3, 3, 5)
            .size(S::Medium, SMALL)
            .defence(2, 7)
            .spawn(B::Dungeon, 5, 20)
            .spawn(B::Shoals, 11, 40),
        beast(M::Yak, "yak")
            .hd(7, 5, 3)
            .size(S::Large, BIG)
            .defence(4, 7)
            .spawn(B::Dungeon, 11, 50)
            .spawn(B::Lair, 9, 60),
        beast(M::DeathYak, "death yak")
            .hd(14, 5, 4)
            .size(S::Large, BIG)
            .defence(9, 5)
            .spawn(B::Dungeon, 20, 30)
            .spawn(B::Lair, 11, 40),
        beast(M::WarDog, "war dog")
            .hd(4, 4, 4)
            .size(S::Medium, SMALL)
            .defence(4, 15)
            .speed(17)
            .spawn(B::Dungeon, 9, 40),
        beast(M::Warg, "warg")
            .hd(4, 4, 5)
            .size(S::Medium, SMALL)
            .defence(4, 12)
            .speed(13)
            .spawn(B::Dungeon, 14, 30)
            .spawn(B::OrcishMines, 8, 40),
        MonsterClass::new(M::KillerBee, "killer bee")
            .hd(3, 3, 5)
            .size(S::Tiny, SMALL)
            .defence(2, 18)
            .speed(20)
            .intelligence(Intelligence::Insect)
            .flags(F::FLIES)
            .spawn(B::Dungeon, 10, 40)
            .spawn(B::Hive, 10, 99),
        MonsterClass::new(M::Mosquito, "giant mosquito")
            .hd(1, 3, 5)
            .size(S::Tiny, SMALL)
            .defence(0, 13)
            .speed(15)
            .intelligence(Intelligence::Insect)
            .flags(F::FLIES | F::UNCLEAN)
            .spawn(B::Dungeon, 8, 40)
            .spawn(B::Swamp, 11, 60),
        beast(M::BlinkFrog, "blink frog")
            .hd(6, 2, 4)
            .size(S::Small, SMALL)
            .defence(0, 16)
            .habitat(Habitat::AMPHIBIOUS)
            .spawn(B::Dungeon, 12, 30)
            .spawn(B::Swamp, 12, 40),
        // Kobolds and goblinoids
        humanoid(M::Kobold, "kobold")
            .hd(1, 2, 4)
            .size(S::Small, SMALL)
            .defence(2, 12)
            .spawn(B::Dungeon, 1, 99),
        humanoid(M::BigKobold, "big kobold")
            .hd(5, 3, 5)
            .size(S::Small, SMALL)
            .defence(3, 12)
            .spawn(B::Dungeon, 4, 50),
        humanoid(M::KoboldDemonologist, "kobold demonologist")
            .hd(4, 3, 5)
            .size(S::Small, SMALL)
            .defence(2, 13)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 10, 20),
        humanoid(M::Goblin, "goblin")
            .hd(1, 2, 4)
            .size(S::Small, SMALL)
            .spawn(B::Dungeon, 0, 99),
        humanoid(M::Hobgoblin, "hobgoblin")
            .hd(1, 4, 5)
            .defence(2, 10)
            .size(S::Medium, SMALL)
            .spawn(B::Dungeon, 2, 80),
        humanoid(M::Gnoll, "gnoll")
            .hd(2, 4, 5)
            .defence(2, 9)
            .size(S::Medium, SMALL)
            .spawn(B::Dungeon, 5, 60),
        humanoid(M::Boggart, "boggart")
            .hd(2, 3, 5)
            .size(S::Small, SMALL)
            .defence(0, 12)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 8, 30),
        // Orcs
        orc(M::Orc, "orc")
            .hd(1, 4, 6)
            .spawn(B::Dungeon, 3, 99)
            .spawn(B::OrcishMines, 6, 99),
        orc(M::OrcWizard, "orc wizard")
            .hd(3, 3, 5)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 5, 30)
            .spawn(B::OrcishMines, 6, 40),
        orc(M::OrcPriest, "orc priest")
            .hd(3, 3, 5)
            .flags(F::PRIEST)
            .spawn(B::Dungeon, 5, 30)
            .spawn(B::OrcishMines, 7, 40),
        orc(M::OrcWarrior, "orc warrior")
            .hd(4, 4, 6)
            .defence(2, 10)
            .spawn(B::Dungeon, 8, 50)
            .spawn(B::OrcishMines, 7, 70),
        orc(M::OrcKnight, "orc knight")
            .hd(9, 4, 6)
            .defence(2, 10)
            .spawn(B::Dungeon, 13, 20)
            .spawn(B::OrcishMines, 9, 40),
        orc(M::OrcWarlord, "orc warlord")
            .hd(15, 4, 6)
            .defence(3, 10)
            .spawn(B::Dungeon, 19, 5)
            .spawn(B::OrcishMines, 10, 10),
        orc(M::OrcSorcerer, "orc sorcerer")
            .hd(8, 3, 5)
            .flags(F::SPELLCASTER | F::EVIL)
            .spawn(B::Dungeon, 14, 20)
            .spawn(B::OrcishMines, 9, 30),
        orc(M::OrcHighPriest, "orc high priest")
            .hd(11, 4, 5)
            .flags(F::PRIEST)
            .spawn(B::Dungeon, 17, 10)
            .spawn(B::OrcishMines, 10, 20),
        // Giants and trolls
        humanoid(M::Ogre, "ogre")
            .hd(5, 6, 6)
            .size(S::Large, BIG)
            .defence(1, 6)
            .spawn(B::Dungeon, 8, 60)
            .spawn(B::OrcishMines, 8, 30),
        humanoid(M::TwoHeadedOgre, "two-headed ogre")
            .hd(6, 6, 6)
            .size(S::Large, BIG)
            .defence(1, 4)
            .flags(F::TWO_WEAPONS)
            .spawn(B::Dungeon, 12, 30),
        humanoid(M::OgreMage, "ogre mage")
            .hd(10, 5, 6)
            .size(S::Large, BIG)
            .defence(1, 7)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 16, 15),
        MonsterClass::new(M::Troll, "troll")
            .hd(7, 6, 6)
            .size(S::Large, BIG)
            .defence(3, 10)
            .flags(F::OPENS_DOORS | F::USES_STAIRS | F::HAS_SKELETON)
            .spawn(B::Dungeon, 12, 40)
            .spawn(B::OrcishMines, 9, 20),
        MonsterClass::new(M::DeepTroll, "deep troll")
            .hd(10, 6, 6)
            .size(S::Large, BIG)
            .defence(6, 10)
            .flags(F::OPENS_DOORS | F::USES_STAIRS | F::HAS_SKELETON)
            .spawn(B::Dungeon, 18, 20),
        humanoid(M::Cyclops, "cyclops")
            .hd(17, 7, 6)
            .size(S::Giant, BIG)
            .defence(10, 3)
            .spawn(B::Dungeon, 21, 10)
            .spawn(B::Shoals, 13, 20),
        // Centaurs
        humanoid(M::Centaur, "centaur")
            .hd(4, 3, 5)
            .size(S::Large, BIG)
            .defence(3, 7)
            .speed(15)
            .spawn(B::Dungeon, 11, 40)
            .spawn(B::Shoals, 11, 30),
        humanoid(M::CentaurWarrior, "centaur warrior")
            .hd(9, 4, 5)
            .size(S::Large, BIG)
            .defence(4, 8)
            .speed(15)
            .spawn(B::Dungeon, 18, 20),
        humanoid(M::Yaktaur, "yaktaur")
            .hd(8, 4, 5)
            .size(S::Large, BIG)
            .defence(4, 4)
            .spawn(B::Dungeon, 14, 30),
        humanoid(M::YaktaurCaptain, "yaktaur captain")
            .hd(14, 4, 5)
            .size(S::Large, BIG)
            .defence(5, 5)
            .spawn(B::Dungeon, 20, 15),
        // Elves
        deep_elf(M::DeepElfSoldier, "deep elf soldier")
            .hd(6, 3, 3)
            .spawn(B::Dungeon, 14, 30)
            .spawn(B::ElvenHalls, 10, 90),
        deep_elf(M::DeepElfFighter, "deep elf fighter")
            .hd(3, 3, 3)
            .spawn(B::Dungeon, 16, 20)
            .spawn(B::ElvenHalls, 10, 70),
        deep_elf(M::DeepElfKnight, "deep elf knight")
            .hd(11, 4, 4)
            .spawn(B::Dungeon, 20, 5)
            .spawn(B::ElvenHalls, 11, 40),
        deep_elf(M::DeepElfConjurer, "deep elf conjurer")
            .hd(6, 3, 3)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 17, 10)
            .spawn(B::ElvenHalls, 11, 50),
        deep_elf(M::DeepElfMage, "deep elf mage")
            .hd(4, 3, 3)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 15, 20)
            .spawn(B::ElvenHalls, 10, 60),
        deep_elf(M::DeepElfPriest, "deep elf priest")
            .hd(5, 3, 3)
            .flags(F::PRIEST | F::SPELLCASTER)
            .spawn(B::Dungeon, 16, 10)
            .spawn(B::ElvenHalls, 11, 40),
        deep_elf(M::DeepElfHighPriest, "deep elf high priest")
            .hd(11, 3, 3)
            .flags(F::PRIEST | F::SPELLCASTER)
            .spawn(B::ElvenHalls, 12, 20),
        // Nagas
        MonsterClass::new(M::Naga, "naga")
            .hd(6, 5, 5)
            .size(S::Big, BIG)
            .defence(6, 10)
            .habitat(Habitat::AMPHIBIOUS)
            .flags(F::OPENS_DOORS | F::HAS_SKELETON)
            .spawn(B::Dungeon, 11, 30)
            .spawn(B::SnakePit, 13, 60),
        MonsterClass::new(M::NagaMage, "naga mage")
            .hd(7, 5, 5)
            .size(S::Big, BIG)
            .defence(6, 10)
            .habitat(Habitat::AMPHIBIOUS)
            .flags(F::OPENS_DOORS | F::HAS_SKELETON | F::SPELLCASTER)
            .spawn(B::SnakePit, 14, 30),
        MonsterClass::new(M::NagaWarrior, "naga warrior")
            .hd(10, 5, 5)
            .size(S::Big, BIG)
            .defence(6, 10)
            .habitat(Habitat::AMPHIBIOUS)
            .flags(F::OPENS_DOORS | F::HAS_SKELETON | F::EQUIPPED)
            .spawn(B::SnakePit, 14, 30),
        // Humans
        humanoid(M::HellKnight, "hell knight")
            .hd(10, 4, 5)
            .size(S::Medium, SMALL)
            .defence(0, 10)
            .flags(F::EVIL | F::SPELLCASTER)
            .spawn(B::Dungeon, 19, 20),
        humanoid(M::Necromancer, "necromancer")
            .hd(10, 3, 3)
            .size(S::Medium, SMALL)
            .defence(0, 13)
            .flags(F::EVIL | F::SPELLCASTER)
            .spawn(B::Dungeon, 18, 15),
        humanoid(M::VampireMage, "vampire mage")
            .hd(8, 3, 4)
            .size(S::Medium, None)
            .holiness(Holiness::Undead)
            .flags(F::EVIL | F::SPELLCASTER)
            .spawn(B::Crypt, 18, 30),
        // Undead
        MonsterClass::new(M::Ghoul, "ghoul")
            .hd(4, 3, 5)
            .size(S::Medium, None)
            .defence(4, 10)
            .holiness(Holiness::Undead)
            .flags(F::OPENS_DOORS | F::EVIL | F::UNCLEAN)
            .spawn(B::Dungeon, 12, 30)
            .spawn(B::Crypt, 17, 60),
        MonsterClass::new(M::Necrophage, "necrophage")
            .hd(5, 3, 5)
            .size(S::Medium, None)
            .defence(2, 10)
            .holiness(Holiness::Undead)
            .flags(F::OPENS_DOORS | F::EVIL)
            .spawn(B::Dungeon, 8, 30)
            .spawn(B::Crypt, 17, 40),
        humanoid(M::SkeletalWarrior, "skeletal warrior")
            .hd(10, 5, 3)
            .size(S::Medium, None)
            .defence(15, 10)
            .intelligence(Intelligence::Animal)
            .holiness(Holiness::Undead)
            .flags(F::EVIL)
            .spawn(B::Crypt, 18, 40),
        MonsterClass::new(M::Mummy, "mummy")
            .hd(3, 5, 3)
            .size(S::Medium, None)
            .defence(3, 6)
            .speed(8)
            .holiness(Holiness::Undead)
            .flags(F::OPENS_DOORS | F::EVIL)
            .spawn(B::Dungeon, 10, 15)
            .spawn(B::Tomb, 20, 90),
        MonsterClass::new(M::Lich, "lich")
            .hd(20, 2, 4)
            .size(S::Medium, None)
            .defence(10, 10)
            .intelligence(Intelligence::High)
            .holiness(Holiness::Undead)
            .flags(F::OPENS_DOORS | F::USES_STAIRS | F::SPELLCASTER | F::EVIL)
            .spawn(B::Crypt, 20, 10)
            .abyss(15),
        // Derived undead forms
        derived(M::ZombieSmall, "small zombie")
            .hd(1, 5, 5)
            .speed(6)
            .size(S::Small, None),
        derived(M::ZombieLarge, "large zombie")
            .hd(1, 6, 5)
            .speed(6)
            .size(S::Large, None),
        derived(M::SkeletonSmall, "small skeleton")
            .hd(1, 4, 4)
            .speed(7)
            .size(S::Small, None),
        derived(M::SkeletonLarge, "large skeleton")
            .hd(1, 5, 4)
            .speed(7)
            .size(S::Large, None),
        derived(M::SimulacrumSmall, "small simulacrum")
            .hd(1, 3, 4)
            .speed(7)
            .size(S::Small, None),
        derived(M::SimulacrumLarge, "large simulacrum")
            .hd(1, 4, 4)
            .speed(7)
            .size(S::Large, None),
        derived(M::SpectralThing, "spectral thing")
            .hd(1, 4, 4)
            .flags(F::LEVITATES)
            .size(S::Medium, None),
        // Draconians
        draconian(M::Draconian, "draconian")
            .hd(10, 6, 4)
            .spawn(B::Dungeon, 19, 1),
        draconian(M::BlackDraconian, "black draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::MottledDraconian, "mottled draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::YellowDraconian, "yellow draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::GreenDraconian, "green draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::PurpleDraconian, "purple draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::RedDraconian, "red draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::WhiteDraconian, "white draconian")
            .hd(14, 6, 4)
            .spawn(B::Dungeon, 22, 1)
            .spawn(B::Zot, 26, 40),
        draconian(M::DraconianCaller, "draconian caller")
            .hd(16, 6, 4)
            .flags(F::SPELLCASTER)
            .spawn(B::Zot, 27, 20),
        draconian(M::DraconianMonk, "draconian monk")
            .hd(16, 6, 4)
            .spawn(B::Zot, 27, 20),
        draconian(M::DraconianZealot, "draconian zealot")
            .hd(16, 6, 4)
            .flags(F::PRIEST | F::SPELLCASTER)
            .spawn(B::Zot, 27, 20),
        draconian(M::DraconianShifter, "draconian shifter")
            .hd(16, 6, 4)
            .flags(F::SPELLCASTER)
            .spawn(B::Zot, 27, 20),
        draconian(M::DraconianAnnihilator, "draconian annihilator")
            .hd(16, 6, 4)
            .flags(F::SPELLCASTER)
            .spawn(B::Zot, 27, 20),
        draconian(M::DraconianKnight, "draconian knight")
            .hd(16, 6, 4)
            .flags(F::SPELLCASTER)
            .spawn(B::Zot, 27, 20),
        draconian(M::DraconianScorcher, "draconian scorcher")
            .hd(16, 6, 4)
            .flags(F::SPELLCASTER)
            .spawn(B::Zot, 27, 20),
        // Assorted
        MonsterClass::new(M::Harpy, "harpy")
            .hd(7, 3, 5)
            .size(S::Medium, SMALL)
            .defence(2, 10)
            .speed(25)
            .flags(F::FLIES | F::HAS_SKELETON)
            .spawn(B::Dungeon, 10, 40),
        MonsterClass::new(M::InsubstantialWisp, "insubstantial wisp")
            .hd(6, 1, 2)
            .size(S::Tiny, None)
            .defence(20, 20)
            .speed(15)
            .intelligence(Intelligence::Plant)
            .holiness(Holiness::Nonliving)
            .flags(F::LEVITATES)
            .spawn(B::Dungeon, 16, 20)
            .abyss(20),
        MonsterClass::new(M::UglyThing, "ugly thing")
            .hd(8, 3, 5)
            .size(S::Medium, SMALL)
            .defence(3, 10)
            .flags(F::HAS_SKELETON | F::CHAOTIC)
            .spawn(B::Dungeon, 10, 30)
            .abyss(40),
        MonsterClass::new(M::VeryUglyThing, "very ugly thing")
            .hd(12, 3, 5)
            .size(S::Large, BIG)
            .defence(4, 8)
            .flags(F::HAS_SKELETON | F::CHAOTIC)
            .spawn(B::Dungeon, 16, 20)
            .abyss(30),
        MonsterClass::new(M::Shapeshifter, "shapeshifter")
            .hd(7, 3, 5)
            .size(S::Medium, None)
            .flags(F::SHAPESHIFTER | F::CHAOTIC)
            .spawn(B::Dungeon, 12, 10)
            .abyss(10),
        MonsterClass::new(M::DancingWeapon, "dancing weapon")
            .hd(15, 0, 0)
            .size(S::Small, None)
            .defence(10, 20)
            .speed(15)
            .intelligence(Intelligence::Plant)
            .holiness(Holiness::Nonliving)
            .flags(F::FLIES)
            .spawn(B::HallOfBlades, 18, 99),
        MonsterClass::new(M::IceStatue, "ice statue")
            .hd(8, 10, 0)
            .size(S::Large, None)
            .defence(12, 1)
            .speed(0)
            .intelligence(Intelligence::Plant)
            .holiness(Holiness::Nonliving)
            .flags(F::STATIONARY | F::STATUE),
        MonsterClass::new(M::Plant, "plant")
            .hd(10, 2, 0)
            .size(S::Large, None)
            .defence(10, 0)
            .speed(0)
            .intelligence(Intelligence::Plant)
            .holiness(Holiness::Plant)
            .flags(F::STATIONARY)
            .spawn(B::Dungeon, 0, 40)
            .spawn(B::Lair, 8, 60),
        MonsterClass::new(M::OklobPlant, "oklob plant")
            .hd(10, 2, 0)
            .size(S::Large, None)
            .defence(10, 0)
            .speed(0)
            .intelligence(Intelligence::Plant)
            .holiness(Holiness::Plant)
            .flags(F::STATIONARY)
            .spawn(B::Dungeon, 15, 20)
            .spawn(B::Lair, 10, 40),
        MonsterClass::new(M::FireElemental, "fire elemental")
            .hd(6, 3, 5)
            .size(S::Large, None)
            .defence(4, 12)
            .speed(12)
            .holiness(Holiness::Nonliving)
            .spawn(B::Gehenna, 28, 20),
        MonsterClass::new(M::RoyalJelly, "royal jelly")
            .hd(21, 0, 0)
            .size(S::Medium, None)
            .defence(8, 4)
            .speed(12)
            .intelligence(Intelligence::Plant)
            .genus(Genus::Jelly)
            .flags(F::EATS_ITEMS | F::UNIQUE),
        // Water, lava and rock dwellers
        MonsterClass::new(M::BigFish, "big fish")
            .hd(4, 3, 5)
            .size(S::Medium, SMALL)
            .defence(1, 12)
            .intelligence(Intelligence::Animal)
            .habitat(Habitat::WATER)
            .flags(F::SUBMERGES | F::HAS_SKELETON)
            .spawn(B::Dungeon, 8, 30)
            .spawn(B::Shoals, 11, 60),
        MonsterClass::new(M::Eel, "giant eel")
            .hd(3, 3, 5)
            .size(S::Medium, SMALL)
            .defence(1, 15)
            .intelligence(Intelligence::Animal)
            .habitat(Habitat::WATER)
            .flags(F::SUBMERGES | F::HAS_SKELETON)
            .spawn(B::Dungeon, 6, 30)
            .spawn(B::Swamp, 11, 50),
        MonsterClass::new(M::ElectricEel, "electric eel")
            .hd(3, 3, 5)
            .size(S::Medium, SMALL)
            .defence(1, 15)
            .intelligence(Intelligence::Animal)
            .habitat(Habitat::WATER)
            .flags(F::SUBMERGES | F::HAS_SKELETON)
            .spawn(B::Dungeon, 12, 20)
            .spawn(B::Shoals, 12, 40),
        MonsterClass::new(M::LavaSnake, "lava snake")
            .hd(3, 5, 5)
            .size(S::Small, None)
            .defence(2, 17)
            .intelligence(Intelligence::Animal)
            .habitat(Habitat::LAVA)
            .flags(F::SUBMERGES)
            .spawn(B::Dungeon, 12, 30)
            .spawn(B::Gehenna, 28, 60),
        MonsterClass::new(M::LavaWorm, "lava worm")
            .hd(6, 5, 5)
            .size(S::Large, None)
            .defence(1, 10)
            .intelligence(Intelligence::Insect)
            .habitat(Habitat::LAVA)
            .flags(F::SUBMERGES)
            .spawn(B::Dungeon, 16, 20),
        MonsterClass::new(M::RockWorm, "rock worm")
            .hd(5, 3, 5)
            .size(S::Large, None)
            .defence(3, 6)
            .intelligence(Intelligence::Insect)
            .habitat(Habitat::single(Medium::Rock))
            .spawn(B::Dungeon, 12, 20),
        // Holy
        humanoid(M::Angel, "angel")
            .hd(12, 3, 5)
            .size(S::Medium, None)
            .defence(10, 20)
            .holiness(Holiness::Holy)
            .flags(F::FLIES | F::SPELLCASTER),
        humanoid(M::Daeva, "daeva")
            .hd(12, 3, 5)
            .size(S::Medium, None)
            .defence(10, 13)
            .holiness(Holiness::Holy)
            .flags(F::FLIES),
        // Demons
        demon(M::Imp, "imp")
            .hd(3, 3, 5)
            .size(S::Little, None)
            .defence(3, 14)
            .speed(14)
            .flags(F::FLIES)
            .spawn(B::Dungeon, 6, 30)
            .spawn(B::Vestibule, 27, 40)
            .abyss(50),
        demon(M::Hellion, "hellion")
            .hd(7, 3, 5)
            .size(S::Medium, None)
            .defence(5, 10)
            .speed(13)
            .spawn(B::Gehenna, 28, 40)
            .abyss(30),
        demon(M::HellHound, "hell hound")
            .hd(7, 3, 5)
            .size(S::Medium, None)
            .defence(6, 13)
            .speed(13)
            .intelligence(Intelligence::Animal)
            .spawn(B::Dungeon, 18, 10)
            .spawn(B::Gehenna, 28, 60)
            .abyss(30),
        demon(M::RedDevil, "red devil")
            .hd(5, 3, 5)
            .size(S::Medium, None)
            .defence(7, 13)
            .speed(10)
            .flags(F::FLIES | F::OPENS_DOORS)
            .spawn(B::Dis, 28, 40)
            .abyss(40),
        demon(M::PitFiend, "pit fiend")
            .hd(18, 3, 5)
            .size(S::Large, None)
            .defence(17, 5)
            .flags(F::FLIES | F::OPENS_DOORS)
            .spawn(B::Dis, 30, 20)
            .abyss(10),
        demon(M::PandemoniumDemon, "pandemonium lord")
            .hd(16, 6, 6)
            .size(S::Large, None)
            .defence(10, 10)
            .intelligence(Intelligence::High)
            .flags(F::OPENS_DOORS | F::SPELLCASTER)
            .abyss(5),
        demon(M::AbominationSmall, "small abomination")
            .hd(6, 2, 5)
            .size(S::Medium, None)
            .defence(0, 7)
            .intelligence(Intelligence::Animal)
            .holiness(Holiness::Undead)
            .abyss(25),
        demon(M::AbominationLarge, "large abomination")
            .hd(11, 2, 5)
            .size(S::Large, None)
            .defence(0, 5)
            .intelligence(Intelligence::Animal)
            .holiness(Holiness::Undead)
            .abyss(20),
        // Zot
        MonsterClass::new(M::OrbGuardian, "orb guardian")
            .hd(15, 8, 5)
            .size(S::Giant, None)
            .defence(13, 13)
            .speed(20)
            .holiness(Holiness::Nonliving)
            .flags(F::OPENS_DOORS)
            .spawn(B::Zot, 30, 10),
        humanoid(M::Titan, "titan")
            .hd(20, 7, 4)
            .size(S::Giant, BIG)
            .defence(10, 3)
            .intelligence(Intelligence::High)
            .flags(F::SPELLCASTER)
            .spawn(B::Dungeon, 25, 5)
            .spawn(B::Zot, 27, 10),
        // Uniques
        humanoid(M::Terence, "Terence")
            .hd(3, 3, 5)
            .size(S::Medium, SMALL)
            .flags(F::UNIQUE),
        humanoid(M::Sigmund, "Sigmund")
            .hd(3, 3, 5)
            .size(S::Medium, SMALL)
            .flags(F::UNIQUE | F::EVIL | F::SPELLCASTER),
        humanoid(M::Edmund, "Edmund")
            .hd(4, 4, 5)
            .size(S::Medium, SMALL)
            .flags(F::UNIQUE),
    ]
}

/// The shipped roster
pub fn roster() -> Result<Roster, RegistryError> {
    Roster::new(monster_classes())
}

/// Class for `name` (case-insensitive)
pub fn find_class<'a>(classes: &'a [MonsterClass], name: &str) -> Option<&'a MonsterClass> {
    classes.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
