//! Monster type identifiers
//!
//! The engine names the species its rules refer to (band leaders, escorts,
//! draconian colours, zombie forms, Zot defenders). Stats for each of them
//! live in a registry, not here.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// Identifier of a monster class
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[repr(u16)]
pub enum MonsterType {
    // Vermin and animals
    Rat,
    GreyRat,
    GreenRat,
    OrangeRat,
    Jackal,
    Bat,
    Butterfly,
    Hog,
    Sheep,
    Yak,
    DeathYak,
    WarDog,
    Warg,
    KillerBee,
    Mosquito,
    BlinkFrog,
    // Kobolds and goblinoids
    Kobold,
    BigKobold,
    KoboldDemonologist,
    Goblin,
    Hobgoblin,
    Gnoll,
    Boggart,
    // Orcs
    Orc,
    OrcWizard,
    OrcPriest,
    OrcWarrior,
    OrcKnight,
    OrcWarlord,
    OrcSorcerer,
    OrcHighPriest,
    // Giants and trolls
    Ogre,
    TwoHeadedOgre,
    OgreMage,
    Troll,
    DeepTroll,
    Cyclops,
    // Centaurs
    Centaur,
    CentaurWarrior,
    Yaktaur,
    YaktaurCaptain,
    // Elves
    DeepElfSoldier,
    DeepElfFighter,
    DeepElfKnight,
    DeepElfConjurer,
    DeepElfMage,
    DeepElfPriest,
    DeepElfHighPriest,
    // Nagas
    Naga,
    NagaMage,
    NagaWarrior,
    // Humans
    HellKnight,
    Necromancer,
    VampireMage,
    // Undead
    Ghoul,
    Necrophage,
    SkeletalWarrior,
    Mummy,
    Lich,
    // Derived undead forms
    ZombieSmall,
    ZombieLarge,
    SkeletonSmall,
    SkeletonLarge,
    SimulacrumSmall,
    SimulacrumLarge,
    SpectralThing,
    // Draconians: base, colours, then jobs
    Draconian,
    BlackDraconian,
    MottledDraconian,
    YellowDraconian,
    GreenDraconian,
    PurpleDraconian,
    RedDraconian,
    WhiteDraconian,
    DraconianCaller,
    DraconianMonk,
    DraconianZealot,
    DraconianShifter,
    DraconianAnnihilator,
    DraconianKnight,
    DraconianScorcher,
    // Assorted
    Harpy,
    InsubstantialWisp,
    UglyThing,
    VeryUglyThing,
    Shapeshifter,
    DancingWeapon,
    IceStatue,
    Plant,
    OklobPlant,
    FireElemental,
    RoyalJelly,
    // Water, lava and rock dwellers
    BigFish,
    Eel,
    ElectricEel,
    LavaSnake,
    LavaWorm,
    RockWorm,
    // Holy
    Angel,
    Daeva,
    // Demons
    Imp,
    Hellion,
    HellHound,
    RedDevil,
    PitFiend,
    PandemoniumDemon,
    AbominationSmall,
    AbominationLarge,
    // Zot
    OrbGuardian,
    Titan,
    // Uniques
    Terence,
    Sigmund,
    Edmund,
}

/// Coloured draconians, in the order random draws use
pub const DRACONIAN_COLOURS: [MonsterType; 7] = [
    MonsterType::BlackDraconian,
    MonsterType::MottledDraconian,
    MonsterType::YellowDraconian,
    MonsterType::GreenDraconian,
    MonsterType::PurpleDraconian,
    MonsterType::RedDraconian,
    MonsterType::WhiteDraconian,
];

/// Draconian jobs (non-base draconians)
pub const DRACONIAN_JOBS: [MonsterType; 7] = [
    MonsterType::DraconianCaller,
    MonsterType::DraconianMonk,
    MonsterType::DraconianZealot,
    MonsterType::DraconianShifter,
    MonsterType::DraconianAnnihilator,
    MonsterType::DraconianKnight,
    MonsterType::DraconianScorcher,
];

impl MonsterType {
    /// Any draconian, base, coloured or job
    pub fn is_draconian(self) -> bool {
        self == MonsterType::Draconian || self.is_draconian_colour() || self.is_draconian_job()
    }

    pub fn is_draconian_colour(self) -> bool {
        DRACONIAN_COLOURS.contains(&self)
    }

    pub fn is_draconian_job(self) -> bool {
        DRACONIAN_JOBS.contains(&self)
    }

    /// Canonical species: colour and job variants collapse to their base.
    ///
    /// Derived undead do not preserve colour, so this is what their base
    /// type is reduced to.
    pub fn species(self) -> MonsterType {
        match self {
            t if t.is_draconian() => MonsterType::Draconian,
            MonsterType::GreyRat | MonsterType::GreenRat | MonsterType::OrangeRat => {
                MonsterType::Rat
            }
            t => t,
        }
    }

    /// Derived undead form this type represents, if any
    pub fn derived_kind(self) -> Option<DerivedKind> {
        Some(match self {
            MonsterType::ZombieSmall => DerivedKind::SmallZombie,
            MonsterType::ZombieLarge => DerivedKind::LargeZombie,
            MonsterType::SkeletonSmall => DerivedKind::SmallSkeleton,
            MonsterType::SkeletonLarge => DerivedKind::LargeSkeleton,
            MonsterType::SimulacrumSmall => DerivedKind::SmallSimulacrum,
            MonsterType::SimulacrumLarge => DerivedKind::LargeSimulacrum,
            MonsterType::SpectralThing => DerivedKind::SpectralThing,
            _ => return None,
        })
    }

    pub fn is_zombified(self) -> bool {
        self.derived_kind().is_some()
    }
}

/// Zombie size class of a base creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ZombieSize {
    Small,
    Big,
}

/// Undead forms built from a base creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum DerivedKind {
    SmallZombie,
    LargeZombie,
    SmallSkeleton,
    LargeSkeleton,
    SmallSimulacrum,
    LargeSimulacrum,
    SpectralThing,
}

/// Family of a derived kind, independent of size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DerivedFamily {
    Zombie,
    Skeleton,
    Simulacrum,
    Spectral,
}

impl DerivedKind {
    /// Size the base creature must have; `None` accepts any size
    pub const fn size_class(&self) -> Option<ZombieSize> {
        match self {
            DerivedKind::SmallZombie
            | DerivedKind::SmallSkeleton
            | DerivedKind::SmallSimulacrum => Some(ZombieSize::Small),
            DerivedKind::LargeZombie
            | DerivedKind::LargeSkeleton
            | DerivedKind::LargeSimulacrum => Some(ZombieSize::Big),
            DerivedKind::SpectralThing => None,
        }
    }

    pub const fn family(&self) -> DerivedFamily {
        match self {
            DerivedKind::SmallZombie | DerivedKind::LargeZombie => DerivedFamily::Zombie,
            DerivedKind::SmallSkeleton | DerivedKind::LargeSkeleton => DerivedFamily::Skeleton,
            DerivedKind::SmallSimulacrum | DerivedKind::LargeSimulacrum => {
                DerivedFamily::Simulacrum
            }
            DerivedKind::SpectralThing => DerivedFamily::Spectral,
        }
    }

    /// Monster type of the finished creature
    pub const fn monster_type(&self) -> MonsterType {
        match self {
            DerivedKind::SmallZombie => MonsterType::ZombieSmall,
            DerivedKind::LargeZombie => MonsterType::ZombieLarge,
            DerivedKind::SmallSkeleton => MonsterType::SkeletonSmall,
            DerivedKind::LargeSkeleton => MonsterType::SkeletonLarge,
            DerivedKind::SmallSimulacrum => MonsterType::SimulacrumSmall,
            DerivedKind::LargeSimulacrum => MonsterType::SimulacrumLarge,
            DerivedKind::SpectralThing => MonsterType::SpectralThing,
        }
    }

    /// Same family, resized to fit a base of `size`
    pub const fn resized(&self, size: ZombieSize) -> DerivedKind {
        match (self.family(), size) {
            (DerivedFamily::Zombie, ZombieSize::Small) => DerivedKind::SmallZombie,
            (DerivedFamily::Zombie, ZombieSize::Big) => DerivedKind::LargeZombie,
            (DerivedFamily::Skeleton, ZombieSize::Small) => DerivedKind::SmallSkeleton,
            (DerivedFamily::Skeleton, ZombieSize::Big) => DerivedKind::LargeSkeleton,
            (DerivedFamily::Simulacrum, ZombieSize::Small) => DerivedKind::SmallSimulacrum,
            (DerivedFamily::Simulacrum, ZombieSize::Big) => DerivedKind::LargeSimulacrum,
            (DerivedFamily::Spectral, _) => DerivedKind::SpectralThing,
        }
    }
}
