//! Small design-pattern building blocks around modifier chains.
//!
//! - [`creature`] / [`modifiers`]: the creature subject and the stat rules
//!   attached to a [`ModifierChain`](modifier_chain::ModifierChain)
//! - [`interner`]: caller-owned string interning (flyweight)
//! - [`expression`]: closed expression tree with exhaustive visitors
//! - [`registry`]: line-pair key-value files and a load-once shared instance
//!
//! Nothing here holds hidden global state except [`registry::shared`],
//! which exists for call sites that cannot be handed a registry.

pub mod creature;
pub mod expression;
pub mod interner;
pub mod modifiers;
pub mod registry;

pub use creature::{Creature, Stat};
pub use expression::{Evaluator, Expression, ExpressionVisitor, Printer};
pub use interner::{InternedName, Interner, Symbol};
pub use modifiers::{AddStat, AttackRule, DoubleAttack, IncreaseDefense, NoBonuses};
pub use registry::{Lookup, Registry, RegistryError};
