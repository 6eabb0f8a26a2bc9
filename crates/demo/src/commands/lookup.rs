//! Sum values from a line-pair registry file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use patterns::registry;

/// Sum values from a line-pair registry file
#[derive(Parser, Debug)]
pub struct Lookup {
    /// Registry file (`name` line followed by integer `value` line)
    #[arg(long)]
    pub file: PathBuf,

    /// Names to sum
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl Lookup {
    pub fn execute(self) -> Result<()> {
        let shared = registry::shared(&self.file)
            .with_context(|| format!("Failed to load registry {}", self.file.display()))?;

        for name in &self.names {
            match shared.get(name) {
                Some(value) => println!("  {} {}", style(name).cyan(), value),
                None => println!("  {} {}", style(name).cyan(), style("unknown").red()),
            }
        }

        let total = registry::total(shared.as_ref(), self.names.iter().map(String::as_str))
            .context("Failed to sum registry values")?;
        println!("{} {}", style("total:").green().bold(), total);
        Ok(())
    }
}
