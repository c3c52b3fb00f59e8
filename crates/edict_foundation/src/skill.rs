//! Skills a unit can study.
//!
//! Skills form a small closed enumeration, which lets a study order carry
//! its skill inline instead of interning the skill name as text.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A learnable skill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[allow(missing_docs)]
pub enum Skill {
    Alchemy,
    Crossbow,
    Mining,
    Bow,
    Building,
    Trade,
    Forestry,
    Catapult,
    Herbalism,
    Magic,
    Riding,
    Armorer,
    Shipcraft,
    Melee,
    Sailing,
    Polearm,
    Espionage,
    Quarrying,
    Roadwork,
    Tactics,
    Stealth,
    Entertainment,
    Weaponsmithing,
    Cartmaking,
    Perception,
    Taxation,
    Stamina,
    Unarmed,
}

impl Skill {
    /// Number of skills.
    pub const COUNT: usize = 28;

    /// Every skill, in index order.
    pub const ALL: [Skill; Self::COUNT] = [
        Self::Alchemy,
        Self::Crossbow,
        Self::Mining,
        Self::Bow,
        Self::Building,
        Self::Trade,
        Self::Forestry,
        Self::Catapult,
        Self::Herbalism,
        Self::Magic,
        Self::Riding,
        Self::Armorer,
        Self::Shipcraft,
        Self::Melee,
        Self::Sailing,
        Self::Polearm,
        Self::Espionage,
        Self::Quarrying,
        Self::Roadwork,
        Self::Tactics,
        Self::Stealth,
        Self::Entertainment,
        Self::Weaponsmithing,
        Self::Cartmaking,
        Self::Perception,
        Self::Taxation,
        Self::Stamina,
        Self::Unarmed,
    ];

    /// Returns the stable numeric index of this skill.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the canonical, locale-independent name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alchemy => "alchemy",
            Self::Crossbow => "crossbow",
            Self::Mining => "mining",
            Self::Bow => "bow",
            Self::Building => "building",
            Self::Trade => "trade",
            Self::Forestry => "forestry",
            Self::Catapult => "catapult",
            Self::Herbalism => "herbalism",
            Self::Magic => "magic",
            Self::Riding => "riding",
            Self::Armorer => "armorer",
            Self::Shipcraft => "shipcraft",
            Self::Melee => "melee",
            Self::Sailing => "sailing",
            Self::Polearm => "polearm",
            Self::Espionage => "espionage",
            Self::Quarrying => "quarrying",
            Self::Roadwork => "roadwork",
            Self::Tactics => "tactics",
            Self::Stealth => "stealth",
            Self::Entertainment => "entertainment",
            Self::Weaponsmithing => "weaponsmithing",
            Self::Cartmaking => "cartmaking",
            Self::Perception => "perception",
            Self::Taxation => "taxation",
            Self::Stamina => "stamina",
            Self::Unarmed => "unarmed combat",
        }
    }

    /// Returns true for the magic skill, which study orders never inline:
    /// studying magic may carry a school or cost argument.
    #[must_use]
    pub const fn is_magic(self) -> bool {
        matches!(self, Self::Magic)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
