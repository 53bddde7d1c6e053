use std::io::Write;
use std::mem;

use super::grammar::{describe, Nonterminal};
use crate::error::{Error, Result};
use crate::lexer::{Position, Scanner, Token, TokenClass, TokenKind};
use crate::runtime::{Environment, Value};

/// What the parser does besides checking syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Evaluate expressions, run assignments and write printed values
    #[default]
    Evaluate,
    /// Check syntax only: nothing is printed and variable references are not resolved
    Validate,
}

/// Single-pass predictive parser that evaluates while it parses
///
/// One method per nonterminal. Every branch is chosen from the current lookahead token
/// using the FIRST/FOLLOW tables in [`super::grammar`]; the call stack is the parse
/// stack. Values flow back up as return values, and the environment is updated as soon
/// as an assignment completes.
pub struct Parser<I: Iterator<Item = char>, W: Write> {
    scanner: Scanner<I>,
    /// Current lookahead token
    lookahead: Token,
    env: Environment,
    out: W,
    mode: Mode,
}

impl<I: Iterator<Item = char>, W: Write> Parser<I, W> {
    /// Creates a parser and reads the first lookahead token
    pub fn new(mut scanner: Scanner<I>, out: W) -> Result<Self> {
        let lookahead = scanner.next_token()?;
        Ok(Parser {
            scanner,
            lookahead,
            env: Environment::new(),
            out,
            mode: Mode::default(),
        })
    }

    /// Sets the parser mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Start of the token the parser is looking at, or of the rejected input after a
    /// scan error
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// Variables assigned so far
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Consumes the parser, returning the final environment
    pub fn into_environment(self) -> Environment {
        self.env
    }

    /// Runs the whole program
    pub fn parse(&mut self) -> Result<()> {
        self.stmt_list().map_err(|err| {
            tracing::debug!(error = %err, "run aborted");
            err
        })
    }

    // StmtList = { Stmt } .
    fn stmt_list(&mut self) -> Result<()> {
        loop {
            let class = self.lookahead.class();
            if Nonterminal::Stmt.starts(class) {
                self.stmt()?;
            } else if Nonterminal::StmtList.may_follow(class) {
                return Ok(());
            } else {
                return Err(self.unexpected(Nonterminal::StmtList));
            }
        }
    }

    // Stmt = identifier "=" Expr | "print" Expr .
    fn stmt(&mut self) -> Result<()> {
        match &self.lookahead.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                self.expect(TokenClass::Assign, Nonterminal::Stmt)?;
                let value = self.expr()?;
                tracing::debug!(%name, %value, "assign");
                self.env.set(name, value);
                Ok(())
            }
            TokenKind::Print => {
                self.advance()?;
                let value = self.expr()?;
                if self.mode == Mode::Evaluate {
                    tracing::debug!(%value, "print");
                    writeln!(self.out, "{}", value)?;
                }
                Ok(())
            }
            _ => Err(self.unexpected(Nonterminal::Stmt)),
        }
    }

    // Expr = Term { "xor" Term } .
    fn expr(&mut self) -> Result<Value> {
        self.require(Nonterminal::Expr)?;
        let value = self.term()?;
        self.term_tail(value)
    }

    fn term_tail(&mut self, lhs: Value) -> Result<Value> {
        self.fold_tail(Nonterminal::TermTail, lhs, Self::term, |a, b| a ^ b)
    }

    // Term = Factor { "or" Factor } .
    fn term(&mut self) -> Result<Value> {
        self.require(Nonterminal::Term)?;
        let value = self.factor()?;
        self.factor_tail(value)
    }

    fn factor_tail(&mut self, lhs: Value) -> Result<Value> {
        self.fold_tail(Nonterminal::FactorTail, lhs, Self::factor, |a, b| a | b)
    }

    // Factor = Atom { "and" Atom } .
    fn factor(&mut self) -> Result<Value> {
        self.require(Nonterminal::Factor)?;
        let value = self.atom()?;
        self.atom_tail(value)
    }

    fn atom_tail(&mut self, lhs: Value) -> Result<Value> {
        self.fold_tail(Nonterminal::AtomTail, lhs, Self::atom, |a, b| a & b)
    }

    // Atom = "(" Expr ")" | identifier | binary-literal .
    fn atom(&mut self) -> Result<Value> {
        match &self.lookahead.kind {
            TokenKind::LeftParen => {
                self.advance()?;
                let value = self.expr()?;
                self.expect(TokenClass::RightParen, Nonterminal::Atom)?;
                Ok(value)
            }
            TokenKind::Identifier(name) => {
                // Resolve before advancing so a failure points at the identifier
                let value = self.resolve(name)?;
                self.advance()?;
                Ok(value)
            }
            TokenKind::Binary(digits) => {
                let value = Value::from_binary_literal(digits).ok_or_else(|| {
                    Error::syntax(
                        self.lookahead.position,
                        format!("in atom: invalid binary literal `{}`", digits),
                    )
                })?;
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.unexpected(Nonterminal::Atom)),
        }
    }

    /// Repeats `operator operand` while the lookahead is in FIRST(tail), combining left
    /// to right, and stops on a token in FOLLOW(tail).
    fn fold_tail(
        &mut self,
        tail: Nonterminal,
        mut acc: Value,
        operand: fn(&mut Self) -> Result<Value>,
        combine: fn(Value, Value) -> Value,
    ) -> Result<Value> {
        loop {
            let class = self.lookahead.class();
            if tail.starts(class) {
                self.advance()?;
                let rhs = operand(self)?;
                acc = combine(acc, rhs);
            } else if tail.may_follow(class) {
                return Ok(acc);
            } else {
                return Err(self.unexpected(tail));
            }
        }
    }

    fn resolve(&self, name: &str) -> Result<Value> {
        match self.env.get(name) {
            Some(value) => Ok(value.clone()),
            None if self.mode == Mode::Validate => Ok(Value::zero()),
            None => Err(Error::UndefinedVariable {
                name: name.to_string(),
                line: self.lookahead.position.line,
                col: self.lookahead.position.column,
            }),
        }
    }

    /// Replaces the lookahead with the next token and returns the old one
    fn advance(&mut self) -> Result<Token> {
        let next = self.scanner.next_token()?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    fn expect(&mut self, class: TokenClass, context: Nonterminal) -> Result<Token> {
        if self.lookahead.class() == class {
            self.advance()
        } else {
            Err(Error::syntax(
                self.lookahead.position,
                format!(
                    "in {}: expected {}, found {}",
                    context, class, self.lookahead.kind
                ),
            ))
        }
    }

    fn require(&self, nonterminal: Nonterminal) -> Result<()> {
        if nonterminal.starts(self.lookahead.class()) {
            Ok(())
        } else {
            Err(self.unexpected(nonterminal))
        }
    }

    fn unexpected(&self, nonterminal: Nonterminal) -> Error {
        Error::syntax(
            self.lookahead.position,
            format!(
                "in {}: expected {}, found {}",
                nonterminal,
                describe(&nonterminal.expected()),
                self.lookahead.kind
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Result<(String, Environment)> {
        let mut out = Vec::new();
        let mut parser = Parser::new(Scanner::new(source), &mut out)?;
        parser.parse()?;
        let env = parser.into_environment();
        Ok((String::from_utf8(out).unwrap(), env))
    }

    fn output(source: &str) -> String {
        run(source).unwrap().0
    }

    #[test]
    fn test_xor_of_variables() {
        let (out, env) = run("a = 101\nb = 011\nprint a xor b\n").unwrap();
        assert_eq!(out, "110\n");
        assert_eq!(env.get("a"), Some(&Value::from(5u64)));
        assert_eq!(env.get("b"), Some(&Value::from(3u64)));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(output("print 1 or 1 and 0"), "1\n");
        assert_eq!(output("print (1 or 1) and 0"), "0\n");
        assert_eq!(output("print 1 xor 1 or 0"), "0\n");
        assert_eq!(output("print 110 xor 011 and 010"), "100\n");
    }

    #[test]
    fn test_zero_prints_single_digit() {
        assert_eq!(output("print 0 and 1"), "0\n");
        assert_eq!(output("print 0000"), "0\n");
    }

    #[test]
    fn test_empty_program() {
        let (out, env) = run(" \n\t").unwrap();
        assert!(out.is_empty());
        assert!(env.is_empty());
    }

    #[test]
    fn test_reassignment_uses_old_value() {
        assert_eq!(output("x = 1\nx = x or 10\nprint x"), "11\n");
    }

    #[test]
    fn test_undefined_variable() {
        let err = run("print 1\nprint y").unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedVariable {
                name: "y".to_string(),
                line: 2,
                col: 6
            }
        );
    }

    #[test]
    fn test_self_reference_before_assignment() {
        let err = run("x = x").unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { ref name, .. } if name == "x"));
    }

    #[test]
    fn test_print_xor_reports_expected_atoms() {
        let err = run("print xor 1").unwrap_err();
        assert_eq!(
            err.diagnostic(),
            "Parser Error: in expr: expected `(`, identifier or binary literal, found `xor` at line 1 char 7"
        );
    }

    #[test]
    fn test_missing_close_paren() {
        let err = run("print (1 or 0\nprint 1").unwrap_err();
        assert_eq!(
            err,
            Error::SyntaxError {
                line: 2,
                col: 0,
                message: "in atom: expected `)`, found `print`".to_string()
            }
        );
    }

    #[test]
    fn test_missing_assign() {
        let err = run("a 1").unwrap_err();
        assert!(err.to_string().contains("in stmt: expected `=`, found binary literal `1`"));
    }

    #[test]
    fn test_statement_cannot_start_with_literal() {
        let err = run("101").unwrap_err();
        assert_eq!(
            err.diagnostic(),
            "Parser Error: in stmt_list: expected identifier, `print` or end of input, found binary literal `101` at line 1 char 1"
        );
    }

    #[test]
    fn test_stray_close_paren_after_expression() {
        // `)` is in FOLLOW(Expr), so the statement list rejects it
        let err = run("print 1)").unwrap_err();
        assert!(err.to_string().contains("in stmt_list"));
    }

    #[test]
    fn test_adjacent_literals_rejected() {
        let err = run("print 1 1").unwrap_err();
        assert!(err.to_string().contains("in atom_tail"));
        assert_eq!(err.position().map(|p| p.column), Some(8));
    }

    #[test]
    fn test_output_before_error_is_kept() {
        let mut out = Vec::new();
        let mut parser = Parser::new(Scanner::new("print 1\nprint 2"), &mut out).unwrap();
        let err = parser.parse().unwrap_err();
        assert_eq!(parser.position(), Position::new(2, 6));
        drop(parser);
        assert!(matches!(err, Error::ScanError { found: '2', .. }));
        assert_eq!(out, b"1\n");
    }

    #[test]
    fn test_scan_error_on_first_token() {
        let err = Parser::new(Scanner::new("#"), Vec::new()).err().unwrap();
        assert_eq!(err.diagnostic(), "Scanner Error: at line 1 char 1");
    }

    #[test]
    fn test_validate_mode_skips_output_and_lookups() {
        let mut out = Vec::new();
        let mut parser = Parser::new(Scanner::new("print y and 1\nz = q"), &mut out)
            .unwrap()
            .with_mode(Mode::Validate);
        parser.parse().unwrap();
        assert!(parser.environment().contains("z"));
        drop(parser);
        assert!(out.is_empty());
    }

    #[test]
    fn test_validate_mode_still_rejects_syntax() {
        let mut parser = Parser::new(Scanner::new("print (1"), Vec::new())
            .unwrap()
            .with_mode(Mode::Validate);
        assert!(matches!(parser.parse(), Err(Error::SyntaxError { .. })));
    }
}
