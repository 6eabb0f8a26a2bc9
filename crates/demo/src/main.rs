//! Modifier chain demo
//!
//! Composition root that wires the `modifier-chain` and `patterns` crates
//! together and prints before/after state.
//! Run with: `cargo run -p modifier-demo -- <command>`

mod commands;
mod creature_file;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Chain, Eval, Intern, Lookup};

/// Modifier chain and pattern demos
#[derive(Parser)]
#[command(name = "modifier-demo")]
#[command(about = "Run modifier chains and small pattern demos", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Buff a creature through a modifier chain
    Chain(Chain),

    /// Sum values from a line-pair registry file
    Lookup(Lookup),

    /// Print and evaluate a sample expression
    Eval(Eval),

    /// Intern names and report shared storage
    Intern(Intern),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG and MODIFIER_CHAIN_* vars)
    let _ = dotenvy::dotenv();

    logging::setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Chain(cmd) => cmd.execute(),
        Command::Lookup(cmd) => cmd.execute(),
        Command::Eval(cmd) => cmd.execute(),
        Command::Intern(cmd) => cmd.execute(),
    }
}
