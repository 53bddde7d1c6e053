//! LL(1) tables for the statement grammar
//!
//! ```text
//! StmtList = { Stmt } .
//! Stmt     = identifier "=" Expr | "print" Expr .
//! Expr     = Term { "xor" Term } .
//! Term     = Factor { "or" Factor } .
//! Factor   = Atom { "and" Atom } .
//! Atom     = "(" Expr ")" | identifier | binary-literal .
//! ```

use crate::lexer::TokenClass::{self, *};

/// Grammar nonterminals, one parsing procedure each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    /// Sequence of statements up to end of input
    StmtList,
    /// Assignment or print
    Stmt,
    /// `xor` chain
    Expr,
    /// Repetition part of `Expr`
    TermTail,
    /// `or` chain
    Term,
    /// Repetition part of `Term`
    FactorTail,
    /// `and` chain
    Factor,
    /// Repetition part of `Factor`
    AtomTail,
    /// Parenthesized expression, identifier or literal
    Atom,
}

const EXPR_START: &[TokenClass] = &[LeftParen, Identifier, Binary];

impl Nonterminal {
    /// Name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Nonterminal::StmtList => "stmt_list",
            Nonterminal::Stmt => "stmt",
            Nonterminal::Expr => "expr",
            Nonterminal::TermTail => "term_tail",
            Nonterminal::Term => "term",
            Nonterminal::FactorTail => "factor_tail",
            Nonterminal::Factor => "factor",
            Nonterminal::AtomTail => "atom_tail",
            Nonterminal::Atom => "atom",
        }
    }

    /// Tokens that can begin the nonterminal
    pub fn first(self) -> &'static [TokenClass] {
        match self {
            Nonterminal::StmtList | Nonterminal::Stmt => &[Identifier, Print],
            Nonterminal::TermTail => &[Xor],
            Nonterminal::FactorTail => &[Or],
            Nonterminal::AtomTail => &[And],
            Nonterminal::Expr | Nonterminal::Term | Nonterminal::Factor | Nonterminal::Atom => {
                EXPR_START
            }
        }
    }

    /// Tokens that can appear right after the nonterminal
    pub fn follow(self) -> &'static [TokenClass] {
        match self {
            Nonterminal::StmtList => &[Eof],
            Nonterminal::Stmt => &[Identifier, Print, Eof],
            Nonterminal::Expr | Nonterminal::TermTail => &[RightParen, Identifier, Print, Eof],
            Nonterminal::Term | Nonterminal::FactorTail => {
                &[RightParen, Xor, Identifier, Print, Eof]
            }
            Nonterminal::Factor | Nonterminal::AtomTail => {
                &[RightParen, Or, Xor, Identifier, Print, Eof]
            }
            Nonterminal::Atom => &[RightParen, And, Or, Xor, Identifier, Print, Eof],
        }
    }

    /// Whether the nonterminal can derive the empty string
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            Nonterminal::StmtList
                | Nonterminal::TermTail
                | Nonterminal::FactorTail
                | Nonterminal::AtomTail
        )
    }

    /// Lookahead starts a derivation of this nonterminal
    pub fn starts(self, class: TokenClass) -> bool {
        self.first().contains(&class)
    }

    /// Lookahead may legally follow this nonterminal
    pub fn may_follow(self, class: TokenClass) -> bool {
        self.follow().contains(&class)
    }

    /// Every lookahead accepted at this nonterminal's decision point
    pub fn expected(self) -> Vec<TokenClass> {
        let mut expected = self.first().to_vec();
        if self.is_nullable() {
            for class in self.follow() {
                if !expected.contains(class) {
                    expected.push(*class);
                }
            }
        }
        expected
    }
}

impl std::fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Joins token categories as `a, b or c`
pub fn describe(classes: &[TokenClass]) -> String {
    let names: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}
