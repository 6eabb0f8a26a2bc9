//! Buff a creature through a modifier chain
//!
//! Shows how attachment order changes the result: the defense rule reads
//! the attack value left by whatever ran before it.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use modifier_chain::{ChainConfig, ModifierChain};
use patterns::{AttackRule, Creature, DoubleAttack, IncreaseDefense, NoBonuses};

use crate::creature_file;

/// Buff a creature through a modifier chain
#[derive(Parser, Debug)]
pub struct Chain {
    /// Which modifier runs first
    #[arg(long, value_enum, default_value_t = Order::AttackFirst)]
    pub order: Order,

    /// TOML file with `name`, `attack` and `defense` (default: Goblin 1/1)
    #[arg(long)]
    pub creature: Option<PathBuf>,

    /// Attach a curse in front of every bonus
    #[arg(long)]
    pub curse: bool,

    /// Defense is granted while attack is at most this value
    #[arg(long, default_value_t = 2)]
    pub max_attack: i32,

    /// How many times to run the chain
    #[arg(long, default_value_t = 1)]
    pub runs: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Double attack, then check defense
    AttackFirst,
    /// Check defense, then double attack
    DefenseFirst,
}

impl Chain {
    pub fn execute(self) -> Result<()> {
        let creature = match &self.creature {
            Some(path) => creature_file::load(path)?,
            None => Creature::new("Goblin", 1, 1),
        };

        println!("{} {}", style("before:").dim(), creature);

        let mut chain = build_chain(
            creature,
            self.order,
            self.curse,
            AttackRule::AtMost(self.max_attack),
            ChainConfig::from_env(),
        );
        tracing::debug!(modifiers = ?chain.names(), "chain assembled");

        for run in 1..=self.runs {
            let outcome = chain.handle()?;
            if let Some(name) = &outcome.halted_by {
                println!(
                    "{} run {} stopped at {} after {} modifier(s)",
                    style("!").yellow().bold(),
                    run,
                    style(name).cyan(),
                    outcome.applied
                );
            }
        }

        println!("{} {}", style("after:").green().bold(), chain.subject());
        Ok(())
    }
}

/// Assemble the demo chain in the requested order.
pub fn build_chain(
    creature: Creature,
    order: Order,
    curse: bool,
    rule: AttackRule,
    config: ChainConfig,
) -> ModifierChain<Creature> {
    let mut chain = ModifierChain::with_config(creature, config);
    if curse {
        chain.add(NoBonuses);
    }
    match order {
        Order::AttackFirst => chain.add(DoubleAttack).add(IncreaseDefense::new(rule)),
        Order::DefenseFirst => chain.add(IncreaseDefense::new(rule)).add(DoubleAttack),
    };
    chain
}
