//! Intern names and report shared storage

use anyhow::Result;
use clap::Parser;
use console::style;
use patterns::{InternedName, Interner};

/// Intern full names and show how many distinct pieces were stored
#[derive(Parser, Debug)]
pub struct Intern {
    /// Full names, e.g. "John Smith" "Jane Smith"
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl Intern {
    pub fn execute(self) -> Result<()> {
        let mut interner = Interner::new();
        let names: Vec<_> = self
            .names
            .iter()
            .map(|full| InternedName::new(full, &mut interner))
            .collect();

        for name in &names {
            let symbols: Vec<_> = name.parts().iter().map(|s| s.0).collect();
            println!("  {} {:?}", style(name.render(&interner)).cyan(), symbols);
        }

        let pieces: usize = names.iter().map(|n| n.parts().len()).sum();
        println!(
            "{} {} piece(s), {} stored",
            style("interned:").green().bold(),
            pieces,
            interner.len()
        );
        Ok(())
    }
}
