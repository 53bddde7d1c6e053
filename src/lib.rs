//! # binalg - Boolean Algebra over Binary Literals
//!
//! A small interpreter for programs made of assignments and `print` statements over
//! bitwise expressions. Binary literals of any length are combined with `and`, `or` and
//! `xor`, grouped with parentheses, and stored in variables.
//!
//! ```text
//! a = 101
//! b = 011
//! print a xor b      # prints 110
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut out = Vec::new();
//! let env = binalg::execute("a = 101\nb = 011\nprint a xor b\n", &mut out)?;
//!
//! assert_eq!(String::from_utf8(out)?, "110\n");
//! assert_eq!(env.get("a"), Some(&binalg::Value::from(5u64)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Statements**: `name = expr` and `print expr`, separated by whitespace
//! - **Operators**: `and` binds tighter than `or`, which binds tighter than `xor`
//! - **Values**: unbounded non-negative integers, printed in binary with no leading
//!   zeros (`0` for zero)
//! - **Variables**: must be assigned before they are read
//!
//! ## Architecture
//!
//! There is no syntax tree. The parser pulls one token at a time from the scanner and
//! evaluates as it recognizes each production:
//!
//! ```text
//! Source Code → Scanner → (one token of lookahead) → Parser/Evaluator → Output
//! ```
//!
//! - [`Scanner`] - Tokenizes source code on demand
//! - [`Parser`] - Predictive recursive-descent parser and evaluator
//! - [`Value`] - Arbitrary-precision runtime value
//! - [`Environment`] - Variable storage for one run
//!
//! ## Error Handling
//!
//! The first error stops the run. Output printed before it stays printed.
//!
//! ```rust
//! let mut out = Vec::new();
//! let err = binalg::execute("print 1\nprint y", &mut out).unwrap_err();
//!
//! assert_eq!(out, b"1\n");
//! assert_eq!(
//!     err.diagnostic(),
//!     "Parser Error: in atom: unrecognized variable name \"y\" at line 2 char 7"
//! );
//! ```

/// Version of the binalg interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

use std::io::Write;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{Position, Scanner, Token, TokenClass, TokenKind};
pub use parser::{Mode, Nonterminal, Parser};
pub use runtime::{Environment, Value};

/// Runs a program, writing one line per `print` to `out`.
///
/// Returns the environment left by the last statement.
pub fn execute<W: Write>(source: &str, out: W) -> Result<Environment> {
    let mut parser = Parser::new(Scanner::new(source), out)?;
    parser.parse()?;
    Ok(parser.into_environment())
}

/// Checks a program for scan and syntax errors without evaluating it
///
/// ```rust
/// assert!(binalg::validate("print undefined or 1").is_ok());
/// assert!(binalg::validate("print (1").is_err());
/// ```
pub fn validate(source: &str) -> Result<()> {
    let mut parser = Parser::new(Scanner::new(source), std::io::sink())?.with_mode(Mode::Validate);
    parser.parse()
}
