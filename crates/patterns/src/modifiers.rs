//! Stat modifiers for [`Creature`] chains.
//!
//! Each modifier is a tiny, self-contained rule. Combined in a
//! [`ModifierChain`](modifier_chain::ModifierChain) the order of attachment
//! decides the result, since every rule reads the stats left by the previous
//! one.

use modifier_chain::{Flow, Modifier};

use crate::creature::{Creature, Stat};

/// Doubles the creature's attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DoubleAttack;

impl Modifier<Creature> for DoubleAttack {
    fn modify(&self, creature: &mut Creature) -> Flow {
        tracing::debug!(creature = %creature.name, "doubling attack");
        creature.attack *= 2;
        Flow::Continue
    }
}

/// Attack test used by [`IncreaseDefense`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackRule {
    /// Passes when attack ≤ n (weak creatures get tougher).
    AtMost(i32),
    /// Passes when attack ≥ n.
    AtLeast(i32),
}

impl AttackRule {
    pub const fn holds(self, attack: i32) -> bool {
        match self {
            Self::AtMost(n) => attack <= n,
            Self::AtLeast(n) => attack >= n,
        }
    }
}

impl Default for AttackRule {
    fn default() -> Self {
        Self::AtMost(2)
    }
}

/// Adds one defense when the creature's current attack passes a rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncreaseDefense {
    pub rule: AttackRule,
}

impl IncreaseDefense {
    pub const fn new(rule: AttackRule) -> Self {
        Self { rule }
    }
}

impl Modifier<Creature> for IncreaseDefense {
    fn modify(&self, creature: &mut Creature) -> Flow {
        if self.rule.holds(creature.attack) {
            tracing::debug!(creature = %creature.name, "increasing defense");
            creature.defense += 1;
        }
        Flow::Continue
    }
}

/// Flat bonus (or penalty, when negative) to a single stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddStat {
    pub stat: Stat,
    pub amount: i32,
}

impl AddStat {
    pub const fn new(stat: Stat, amount: i32) -> Self {
        Self { stat, amount }
    }
}

impl Modifier<Creature> for AddStat {
    fn modify(&self, creature: &mut Creature) -> Flow {
        *creature.stat_mut(self.stat) += self.amount;
        Flow::Continue
    }
}

/// Curse that cancels every modifier attached after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoBonuses;

impl Modifier<Creature> for NoBonuses {
    fn modify(&self, creature: &mut Creature) -> Flow {
        tracing::debug!(creature = %creature.name, "no bonuses past this point");
        Flow::Halt
    }
}
