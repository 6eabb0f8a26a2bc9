//! Append-only modifier chains over a mutable subject.
//!
//! A chain is an ordered, singly linked list of small behavior units
//! (modifiers) that mutate one caller-owned subject in sequence, such as a
//! creature's stats being adjusted by buffs and curses.
//!
//! - **Attachment order is execution order**: later nodes see the subject as
//!   earlier nodes left it
//! - **Any node may halt**: returning [`Flow::Halt`] stops propagation
//! - **Synchronous and single-threaded**: every pass completes immediately
//! - **No hidden state**: the subject is the only thing modifiers touch
//!
//! # Architecture
//!
//! - [`Modifier`]: Core trait for all nodes
//! - [`Flow`]: Continue or Halt
//! - [`Link`]: Next-pointer helper shared by every node
//! - [`ModifierChain`]: Composition root owning the subject and the head link
//! - Terminal node: [`Terminal`]
//! - Decorator nodes: [`Conditional`], [`AlwaysContinue`]

pub mod builder;
pub mod chain;
pub mod config;
pub mod decorator;
pub mod error;
pub mod flow;
pub mod link;
pub mod modifier;
pub mod terminal;

// Re-export core types for ergonomic API
pub use chain::{ChainOutcome, ModifierChain};
pub use config::ChainConfig;
pub use decorator::{AlwaysContinue, Conditional};
pub use error::{ChainError, ErrorSeverity};
pub use flow::Flow;
pub use link::{Link, Node};
pub use modifier::{FnModifier, Modifier};
pub use terminal::Terminal;
