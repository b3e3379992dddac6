//! Starting equipment
//!
//! [`Outfitter`] serves the shipped roster and hands armed classes their
//! weapons. Each monster kind draws from a small weighted table; deeper
//! spawns unlock the heavier entries.

use dc_core::GameRng;
use dc_core::monster::{
    Genus, Item, ItemKind, LiveMonster, MonsterClass, MonsterRegistry, MonsterType, Roster,
};

use MonsterType as M;

/// A weapon entry: weight, minimum power, name
type WeaponEntry = (u32, i32, &'static str);

const LIGHT_WEAPONS: &[WeaponEntry] = &[
    (10, 0, "club"),
    (10, 0, "dagger"),
    (6, 0, "short sword"),
    (4, 3, "hand axe"),
    (3, 5, "spear"),
];

const ORC_WEAPONS: &[WeaponEntry] = &[
    (12, 0, "club"),
    (8, 0, "dagger"),
    (8, 0, "hand axe"),
    (6, 0, "mace"),
    (4, 4, "spear"),
    (4, 6, "war axe"),
    (2, 8, "long sword"),
];

const ORC_CHAMPION_WEAPONS: &[WeaponEntry] = &[
    (10, 0, "long sword"),
    (8, 0, "war axe"),
    (6, 0, "morningstar"),
    (4, 12, "great sword"),
    (3, 15, "broad axe"),
];

const CASTER_WEAPONS: &[WeaponEntry] = &[
    (10, 0, "dagger"),
    (8, 0, "quarterstaff"),
    (2, 0, "sling"),
];

const ELF_WEAPONS: &[WeaponEntry] = &[
    (10, 0, "short sword"),
    (8, 0, "scimitar"),
    (6, 0, "long sword"),
    (4, 0, "longbow"),
];

const GIANT_WEAPONS: &[WeaponEntry] = &[(10, 0, "giant club"), (6, 0, "giant spiked club")];

const POLEARMS: &[WeaponEntry] = &[(10, 0, "spear"), (6, 0, "halberd"), (4, 10, "trident")];

const BOWS: &[WeaponEntry] = &[(10, 0, "shortbow"), (8, 0, "crossbow"), (4, 12, "longbow")];

const KNIGHT_WEAPONS: &[WeaponEntry] = &[
    (10, 0, "long sword"),
    (8, 0, "broad axe"),
    (6, 0, "great sword"),
    (2, 20, "demon blade"),
];

const HOLY_WEAPONS: &[WeaponEntry] = &[(10, 0, "holy scourge"), (6, 0, "blessed blade")];

/// Weapons a blade may animate as; the hall's blades run heavy
const DANCING_WEAPONS: &[WeaponEntry] = &[
    (10, 0, "dagger"),
    (10, 0, "short sword"),
    (8, 0, "mace"),
    (8, 5, "long sword"),
    (6, 8, "war axe"),
    (6, 10, "scimitar"),
    (4, 14, "great sword"),
    (4, 14, "executioner's axe"),
    (2, 20, "triple sword"),
];

fn weapon_table(class: &MonsterClass) -> &'static [WeaponEntry] {
    match class.kind {
        M::DancingWeapon => DANCING_WEAPONS,
        M::OrcKnight | M::OrcWarlord | M::OrcWarrior => ORC_CHAMPION_WEAPONS,
        M::OrcWizard | M::OrcSorcerer | M::OrcPriest | M::OrcHighPriest => CASTER_WEAPONS,
        M::Necromancer | M::VampireMage | M::KoboldDemonologist | M::Sigmund => CASTER_WEAPONS,
        M::Ogre | M::TwoHeadedOgre | M::OgreMage | M::Cyclops | M::Titan => GIANT_WEAPONS,
        M::Gnoll | M::NagaWarrior => POLEARMS,
        M::Centaur | M::CentaurWarrior | M::Yaktaur | M::YaktaurCaptain => BOWS,
        M::HellKnight | M::DraconianKnight | M::SkeletalWarrior => KNIGHT_WEAPONS,
        M::Angel | M::Daeva => HOLY_WEAPONS,
        _ => match class.genus {
            Genus::Orc => ORC_WEAPONS,
            Genus::Elf => ELF_WEAPONS,
            Genus::Draconian => KNIGHT_WEAPONS,
            _ => LIGHT_WEAPONS,
        },
    }
}

/// Registry over the shipped roster that also arms monsters
#[derive(Debug, Clone)]
pub struct Outfitter {
    roster: Roster,
}

impl Outfitter {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl MonsterRegistry for Outfitter {
    fn classes(&self) -> &[MonsterClass] {
        self.roster.classes()
    }

    fn class(&self, kind: MonsterType) -> Option<&MonsterClass> {
        self.roster.class(kind)
    }

    fn give_item(
        &self,
        monster: &LiveMonster,
        power: i32,
        summoned: bool,
        rng: &mut GameRng,
    ) -> Option<Item> {
        let class = self.class(monster.kind)?;
        let table: Vec<(u32, &'static str)> = weapon_table(class)
            .iter()
            .filter(|(_, min_power, _)| *min_power <= power)
            .map(|&(weight, _, name)| (weight, name))
            .collect();
        let name = rng.choose_weighted(&table)?;

        let kind = if name.ends_with("bow") || name == "sling" {
            ItemKind::Missile
        } else {
            ItemKind::Weapon
        };
        // Summoned gear fades with its owner
        let name = if summoned {
            format!("summoned {name}")
        } else {
            name.to_string()
        };
        Some(Item::new(kind, name))
    }
}
