//! binalg Parser Module
//!
//! Predictive LL(1) parsing fused with evaluation: statements run as soon as they are
//! recognized, and no syntax tree is built.

pub mod grammar;
mod predictive;

pub use grammar::Nonterminal;
pub use predictive::{Mode, Parser};
