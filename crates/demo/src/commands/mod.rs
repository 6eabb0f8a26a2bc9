//! Command implementations for the demo
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod chain;
mod eval;
mod intern;
mod lookup;

pub use chain::Chain;
pub use eval::Eval;
pub use intern::Intern;
pub use lookup::Lookup;
