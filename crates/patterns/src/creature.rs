//! Creature stats: the subject threaded through modifier chains.

use core::fmt;

/// Numeric creature attribute addressable by name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    /// Damage dealt per hit
    Attack,
    /// Damage absorbed per hit
    Defense,
}

/// A creature whose stats are mutated in place by a chain.
///
/// Plain data: no identity beyond the value itself, owned by whoever builds
/// the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
}

impl Creature {
    pub fn new(name: impl Into<String>, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
        }
    }

    /// Read a stat by name.
    pub fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
        }
    }

    /// Mutable access to a stat by name.
    pub fn stat_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.attack, self.defense)
    }
}
