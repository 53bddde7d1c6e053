//! Lexical analysis for binalg
//!
//! Converts source text into a stream of tokens, one token per request.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Position, Token, TokenClass, TokenKind};
