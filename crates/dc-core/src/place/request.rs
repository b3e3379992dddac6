//! Placement requests

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::dungeon::{Coord, MapMask};
use crate::monster::{God, MonsterType};

/// Which monster a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterChoice {
    Fixed(MonsterType),
    /// Any monster suitable for the level
    Random,
    /// A random monster from the periodic spawner; subject to the wandering reserve
    Wandering,
    /// Any coloured or job draconian, optionally matching the base colour
    RandomDraconian,
    /// Any coloured draconian
    RandomBaseDraconian,
    /// Any draconian job
    RandomNonbaseDraconian,
}

impl MonsterChoice {
    pub const fn is_random(&self) -> bool {
        matches!(self, MonsterChoice::Random | MonsterChoice::Wandering)
    }

    pub const fn is_draconian(&self) -> bool {
        matches!(
            self,
            MonsterChoice::RandomDraconian
                | MonsterChoice::RandomBaseDraconian
                | MonsterChoice::RandomNonbaseDraconian
        )
    }
}

/// Where a monster should appear relative to the player
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Proximity {
    #[default]
    Anywhere,
    /// Walks in through a staircase
    NearStairs,
    CloseToPlayer,
    AwayFromPlayer,
}

/// Behaviour or attitude asked for by the caller
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RequestedBehaviour {
    Sleep,
    Wander,
    Seek,
    #[default]
    Hostile,
    Friendly,
    GoodNeutral,
    Neutral,
    StrictNeutral,
    /// Hostile, but temporarily charmed
    Charmed,
}

impl RequestedBehaviour {
    /// Requests that set an attitude rather than an activity
    pub const fn sets_attitude(&self) -> bool {
        !matches!(
            self,
            RequestedBehaviour::Sleep | RequestedBehaviour::Wander | RequestedBehaviour::Seek
        )
    }

    pub const fn is_neutral(&self) -> bool {
        matches!(
            self,
            RequestedBehaviour::GoodNeutral
                | RequestedBehaviour::Neutral
                | RequestedBehaviour::StrictNeutral
        )
    }
}

bitflags! {
    /// Generation flags on a request
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GenFlags: u8 {
        /// Leader may bring an escort
        const PERMIT_BANDS    = 0x01;
        /// Use the requested position even if the habitat is wrong
        const FORCE_PLACE     = 0x02;
        /// Keep the requested attitude even if the player's god objects
        const FORCE_BEHAVIOUR = 0x04;
    }
}

impl Serialize for GenFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GenFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(GenFlags::from_bits_truncate(bits))
    }
}

/// One spawn attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub choice: MonsterChoice,

    /// Base creature for zombies, or colour for random draconians
    pub base: Option<MonsterType>,

    /// Exact position; `None` searches for one
    pub pos: Option<Coord>,

    pub proximity: Proximity,

    /// Depth the monster is picked for
    pub power: i32,

    pub behaviour: RequestedBehaviour,

    /// 0 for permanent monsters, 1..=6 for abjurable summons
    pub summon_duration: u8,

    pub god: Option<God>,

    /// Cells whose mask intersects this are off limits
    pub map_mask: MapMask,

    pub flags: GenFlags,
}

impl PlacementRequest {
    pub fn new(choice: MonsterChoice) -> Self {
        Self {
            choice,
            base: None,
            pos: None,
            proximity: Proximity::Anywhere,
            power: 0,
            behaviour: RequestedBehaviour::Hostile,
            summon_duration: 0,
            god: None,
            map_mask: MapMask::empty(),
            flags: GenFlags::empty(),
        }
    }

    pub fn fixed(kind: MonsterType) -> Self {
        Self::new(MonsterChoice::Fixed(kind))
    }

    pub fn random() -> Self {
        Self::new(MonsterChoice::Random)
    }

    pub fn at(mut self, pos: Coord) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_proximity(mut self, proximity: Proximity) -> Self {
        self.proximity = proximity;
        self
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    pub fn with_behaviour(mut self, behaviour: RequestedBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    pub fn summoned(mut self, duration: u8) -> Self {
        self.summon_duration = duration;
        self
    }

    pub fn with_god(mut self, god: God) -> Self {
        self.god = Some(god);
        self
    }

    pub fn with_base(mut self, base: MonsterType) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_mask(mut self, mask: MapMask) -> Self {
        self.map_mask = mask;
        self
    }

    pub fn permit_bands(mut self) -> Self {
        self.flags |= GenFlags::PERMIT_BANDS;
        self
    }

    pub fn force_place(mut self) -> Self {
        self.flags |= GenFlags::FORCE_PLACE;
        self
    }

    pub fn force_behaviour(mut self) -> Self {
        self.flags |= GenFlags::FORCE_BEHAVIOUR;
        self
    }

    pub fn is_summoned(&self) -> bool {
        (1..=crate::MAX_ABJURATION).contains(&self.summon_duration)
    }

    pub fn is_friendly(&self) -> bool {
        self.behaviour == RequestedBehaviour::Friendly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let req = PlacementRequest::fixed(MonsterType::Rat)
            .at(Coord::new(3, 4))
            .with_power(5)
            .permit_bands()
            .summoned(3);
        assert_eq!(req.pos, Some(Coord::new(3, 4)));
        assert!(req.flags.contains(GenFlags::PERMIT_BANDS));
        assert!(req.is_summoned());
        assert!(!req.summoned(7).is_summoned());
    }

    #[test]
    fn test_behaviour_classes() {
        assert!(RequestedBehaviour::Friendly.sets_attitude());
        assert!(!RequestedBehaviour::Sleep.sets_attitude());
        assert!(RequestedBehaviour::StrictNeutral.is_neutral());
        assert!(!RequestedBehaviour::Charmed.is_neutral());
    }

    #[test]
    fn test_proximity_parse() {
        assert_eq!("nearstairs".parse::<Proximity>(), Ok(Proximity::NearStairs));
    }
}
