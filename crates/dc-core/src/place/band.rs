//! Escort bands
//!
//! Some leaders bring company. [`choose_band`] decides whether a leader
//! gets a band and how large it is; [`band_member`] draws each escort.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::dungeon::{Branch, LevelType, Place};
use crate::monster::{DRACONIAN_COLOURS, MonsterType};
use crate::rng::GameRng;

/// Kinds of escort band
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum BandType {
    #[default]
    None,
    Kobolds,
    Orcs,
    OrcKnight,
    OrcHighPriest,
    KillerBees,
    Yaks,
    DeathYaks,
    UglyThings,
    HellHounds,
    Jackals,
    HellKnights,
    Necromancer,
    Gnolls,
    Centaurs,
    Yaktaurs,
    InsubstantialWisps,
    OgreMage,
    PandemoniumDemon,
    DeepElfFighter,
    DeepElfKnight,
    DeepElfHighPriest,
    KoboldDemonologist,
    Nagas,
    WarDogs,
    GreyRats,
    GreenRats,
    OrangeRats,
    Sheep,
    Ghouls,
    Hogs,
    Mosquitoes,
    DeepTrolls,
    Boggarts,
    BlinkFrogs,
    SkeletalWarriors,
    Draconian,
}

/// A leader's band: type, number of escorts and whether the escorts
/// follow the leader around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandChoice {
    pub band: BandType,
    pub size: usize,
    pub natural_leader: bool,
}

impl BandChoice {
    pub const NONE: BandChoice = BandChoice {
        band: BandType::None,
        size: 0,
        natural_leader: false,
    };

    pub fn is_none(&self) -> bool {
        self.band == BandType::None
    }
}

/// Pick a band for `leader` generated at `power` in `place`
pub fn choose_band(
    leader: MonsterType,
    power: i32,
    place: &Place,
    rng: &mut GameRng,
) -> BandChoice {
    use MonsterType as M;

    let mut natural_leader = false;
    let (band, size) = match leader {
        M::Orc if rng.coinflip() => (BandType::Orcs, 2 + rng.random2(3)),
        M::OrcWarrior => (BandType::Orcs, 2 + rng.random2(3)),
        M::BigKobold if power > 3 => (BandType::Kobolds, 2 + rng.random2(6)),
        M::OrcWarlord => {
            natural_leader = true;
            let size = 5 + rng.random2(5);
            (BandType::OrcKnight, size + 3 + rng.random2(4))
        }
        M::OrcKnight => {
            natural_leader = true;
            (BandType::OrcKnight, 3 + rng.random2(4))
        }
        M::KillerBee => (BandType::KillerBees, 2 + rng.random2(4)),
        M::Yak => (BandType::Yaks, 2 + rng.random2(4)),
        M::DeathYak => (BandType::DeathYaks, 2 + rng.random2(4)),
        M::UglyThing | M::VeryUglyThing => (BandType::UglyThings, 2 + rng.random2(4)),
        M::HellHound => (BandType::HellHounds, 2 + rng.random2(3)),
        M::Jackal => (BandType::Jackals, 1 + rng.random2(3)),
        M::HellKnight => {
            natural_leader = true;
            (BandType::HellKnights, 4 + rng.random2(4))
        }
        M::Necromancer | M::VampireMage => {
            natural_leader = true;
            (BandType::Necromancer, 4 + rng.random2(4))
        }
        M::OrcHighPriest => {
            natural_leader = true;
            (BandType::OrcHighPriest, 4 + rng.random2(4))
        }
        M::Gnoll => (BandType::Gnolls, if rng.coinflip() { 3 } else { 2 }),
        M::Centaur | M::CentaurWarrior if power > 9 && rng.one_chance_in(3) => {
            (BandType::Centaurs, 2 + rng.random2(4))
        }
        M::Yaktaur | M::YaktaurCaptain if rng.coinflip() => {
            (BandType::Yaktaurs, 2 + rng.random2(3))
        }
        M::InsubstantialWisp => (BandType::InsubstantialWisps, 4 + rng.random2(5)),
        M::OgreMage => {
            natural_leader = true;
            (BandType::OgreMage, 4 + rng.random2(4))
        }
        M::PandemoniumDemon => {
            natural_leader = true;
            (BandType::PandemoniumDemon, rng.random_range(1, 3))
        }
        M::DeepElfFighter if rng.coinflip() => {
            natural_leader = true;
            (BandType::DeepElfFighter, 3 + rng.random2(4))
        }
        M::DeepElfKnight if rng.coinflip() => {
            natural_leader = true;
            (BandType::DeepElfKnight, 3 + rng.random2(4))
        }
        M::DeepElfHighPriest if rng.coinflip() => {
            natural_leader = true;
            (BandType::DeepElfHighPriest, 3 + rng.random2(4))
        }
        M::KoboldDemonologist if rng.coinflip() => {
            natural_leader = true;
            (BandType::KoboldDemonologist, 3 + rng.random2(6))
        }
        M::NagaMage | M::NagaWarrior => {
            natural_leader = true;
            (BandType::Nagas, 3 + rng.random2(4))
        }
        M::WarDog => (BandType::WarDogs, 2 + rng.random2(4)),
        M::GreyRat => (BandType::GreyRats, 4 + rng.random2(6)),
        M::GreenRat => (BandType::GreenRats, 4 + rng.random2(6)),
        M::OrangeRat => (BandType::OrangeRats, 3 + rng.random2(4)),
        M::Sheep => (BandType::Sheep, 3 + rng.random2(5)),
        M::Ghoul => (BandType::Ghouls, 2 + rng.random2(3)),
        M::Hog => (BandType::Hogs, 1 + rng.random2(3)),
        M::Mosquito => (BandType::Mosquitoes, 1 + rng.random2(3)),
        M::DeepTroll => (BandType::DeepTrolls, 3 + rng.random2(3)),
        M::Boggart => (BandType::Boggarts, 2 + rng.random2(3)),
        M::BlinkFrog => (BandType::BlinkFrogs, 2 + rng.random2(3)),
        M::SkeletalWarrior => (BandType::SkeletalWarriors, 2 + rng.random2(3)),
        // A shepherd
        M::Cyclops if rng.one_chance_in(5) || place.branch == Branch::Shoals => {
            natural_leader = true;
            (BandType::Sheep, 2 + rng.random2(3))
        }
        d if d.is_draconian_colour()
            && power > 18
            && rng.one_chance_in(3)
            && place.level_type == LevelType::Dungeon =>
        {
            (BandType::Draconian, rng.random_range(2, 4))
        }
        d if d.is_draconian_job() && power > 20 && place.level_type == LevelType::Dungeon => {
            natural_leader = true;
            (BandType::Draconian, rng.random_range(3, 6))
        }
        _ => (BandType::None, 0),
    };

    let size = (size.max(0) as usize).min(crate::BIG_BAND - 1);
    if band == BandType::None || size == 0 {
        return BandChoice::NONE;
    }
    BandChoice {
        band,
        size,
        natural_leader,
    }
}

// ============================================================================
// Escort tables
// ============================================================================

const ORC_KNIGHT_ESCORTS: &[(u32, MonsterType)] = &[
    (12, MonsterType::Orc),
    (9, MonsterType::OrcWarrior),
    (2, MonsterType::Warg),
    (2, MonsterType::OrcWizard),
    (2, MonsterType::OrcPriest),
    (1, MonsterType::Ogre),
    (1, MonsterType::Troll),
    (1, MonsterType::OrcSorcerer),
];

const NECROMANCER_ESCORTS: &[(u32, MonsterType)] = &[
    (3, MonsterType::ZombieSmall),
    (3, MonsterType::ZombieLarge),
    (3, MonsterType::SkeletonSmall),
    (3, MonsterType::SkeletonLarge),
    (1, MonsterType::Necrophage),
];

const DEMON_ESCORTS: &[(u32, MonsterType)] = &[
    (50, MonsterType::Imp),
    (20, MonsterType::Hellion),
    (15, MonsterType::RedDevil),
    (10, MonsterType::HellHound),
    (5, MonsterType::PitFiend),
];

const DEEP_ELF_FIGHTER_ESCORTS: &[(u32, MonsterType)] = &[
    (6, MonsterType::DeepElfSoldier),
    (1, MonsterType::DeepElfFighter),
    (1, MonsterType::DeepElfKnight),
    (1, MonsterType::DeepElfConjurer),
    (1, MonsterType::DeepElfMage),
    (1, MonsterType::DeepElfPriest),
];

const DEEP_ELF_KNIGHT_ESCORTS: &[(u32, MonsterType)] = &[
    (48, MonsterType::DeepElfSoldier),
    (48, MonsterType::DeepElfFighter),
    (32, MonsterType::DeepElfKnight),
    (28, MonsterType::DeepElfMage),
    (16, MonsterType::DeepElfPriest),
    (32, MonsterType::DeepElfConjurer),
];

const DEEP_ELF_PRIEST_ESCORTS: &[(u32, MonsterType)] = &[
    (3, MonsterType::DeepElfSoldier),
    (3, MonsterType::DeepElfFighter),
    (3, MonsterType::DeepElfPriest),
    (2, MonsterType::DeepElfMage),
    (2, MonsterType::DeepElfConjurer),
];

const KOBOLD_DEMONOLOGIST_ESCORTS: &[(u32, MonsterType)] = &[
    (8, MonsterType::Kobold),
    (4, MonsterType::BigKobold),
    (1, MonsterType::KoboldDemonologist),
];

const DRACONIAN_JOB_ESCORTS: &[(u32, MonsterType)] = &[
    (1, MonsterType::DraconianCaller),
    (2, MonsterType::DraconianKnight),
    (2, MonsterType::DraconianMonk),
    (2, MonsterType::DraconianShifter),
    (2, MonsterType::DraconianAnnihilator),
    (2, MonsterType::DraconianScorcher),
    (2, MonsterType::DraconianZealot),
];

/// Draw one escort for `band`. `None` means this slot stays empty.
pub fn band_member(band: BandType, power: i32, rng: &mut GameRng) -> Option<MonsterType> {
    use MonsterType as M;

    let kind = match band {
        BandType::None => return None,
        BandType::Kobolds => M::Kobold,
        BandType::Orcs => {
            let mut kind = M::Orc;
            if rng.one_chance_in(5) {
                kind = M::OrcWizard;
            }
            if rng.one_chance_in(7) {
                kind = M::OrcPriest;
            }
            kind
        }
        BandType::OrcKnight | BandType::OrcHighPriest => rng.choose_weighted(ORC_KNIGHT_ESCORTS)?,
        BandType::KillerBees => M::KillerBee,
        BandType::Yaks => M::Yak,
        BandType::DeathYaks => M::DeathYak,
        BandType::UglyThings => {
            if power > 21 && rng.one_chance_in(4) {
                M::VeryUglyThing
            } else {
                M::UglyThing
            }
        }
        BandType::HellHounds => M::HellHound,
        BandType::Jackals => M::Jackal,
        BandType::HellKnights => {
            if rng.one_chance_in(4) {
                M::Necromancer
            } else {
                M::HellKnight
            }
        }
        BandType::Necromancer => rng.choose_weighted(NECROMANCER_ESCORTS)?,
        BandType::Gnolls => M::Gnoll,
        BandType::Centaurs => M::Centaur,
        BandType::Yaktaurs => M::Yaktaur,
        BandType::InsubstantialWisps => M::InsubstantialWisp,
        BandType::OgreMage => {
            if rng.one_chance_in(3) {
                M::TwoHeadedOgre
            } else {
                M::Ogre
            }
        }
        BandType::PandemoniumDemon => {
            if rng.one_chance_in(7) {
                M::Lich
            } else if rng.one_chance_in(6) {
                rng.choose_weighted(&[(50, M::AbominationSmall), (40, M::AbominationLarge)])?
            } else {
                rng.choose_weighted(DEMON_ESCORTS)?
            }
        }
        BandType::DeepElfFighter => rng.choose_weighted(DEEP_ELF_FIGHTER_ESCORTS)?,
        BandType::DeepElfKnight => rng.choose_weighted(DEEP_ELF_KNIGHT_ESCORTS)?,
        BandType::DeepElfHighPriest => rng.choose_weighted(DEEP_ELF_PRIEST_ESCORTS)?,
        BandType::KoboldDemonologist => rng.choose_weighted(KOBOLD_DEMONOLOGIST_ESCORTS)?,
        BandType::Nagas => M::Naga,
        BandType::WarDogs => M::WarDog,
        BandType::GreyRats => M::GreyRat,
        BandType::GreenRats => M::GreenRat,
        BandType::OrangeRats => M::OrangeRat,
        BandType::Sheep => M::Sheep,
        BandType::Ghouls => {
            if rng.coinflip() {
                M::Ghoul
            } else {
                M::Necrophage
            }
        }
        BandType::Hogs => M::Hog,
        BandType::Mosquitoes => M::Mosquito,
        BandType::DeepTrolls => M::DeepTroll,
        BandType::Boggarts => M::Boggart,
        BandType::BlinkFrogs => M::BlinkFrog,
        BandType::SkeletalWarriors => M::SkeletalWarrior,
        BandType::Draconian => draconian_escort(power, rng)?,
    };
    Some(kind)
}

fn draconian_escort(power: i32, rng: &mut GameRng) -> Option<MonsterType> {
    let mut table: Vec<(u32, MonsterType)> = DRACONIAN_COLOURS.iter().map(|&c| (3, c)).collect();
    if power >= 24 {
        table.extend_from_slice(DRACONIAN_JOB_ESCORTS);
    }
    rng.choose_weighted(&table)
}
