use std::iter::Peekable;
use std::str::Chars;

use super::token::{Position, Token, TokenKind};
use crate::error::{Error, Result};

/// On-demand scanner over a character stream
///
/// Tokens are produced one at a time by [`Scanner::next_token`]; the input is read
/// strictly forward with one character of lookahead.
pub struct Scanner<I: Iterator<Item = char>> {
    /// Remaining input
    chars: Peekable<I>,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (0-indexed)
    column: usize,
    /// Start of the most recently read token
    start: Position,
    /// Set once end of input or an error has been yielded through `Iterator`
    exhausted: bool,
}

impl<'a> Scanner<Chars<'a>> {
    /// Creates a new scanner from source code
    pub fn new(source: &'a str) -> Self {
        Scanner::from_chars(source.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Creates a scanner over any character stream
    pub fn from_chars(chars: I) -> Self {
        Scanner {
            chars: chars.peekable(),
            line: 1,
            column: 0,
            start: Position::default(),
            exhausted: false,
        }
    }

    /// Start of the last token read, or of the offending character after a scan error
    pub fn position(&self) -> Position {
        self.start
    }

    /// Reads the next token. Once the input is used up this keeps returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.start = Position::new(self.line, self.column);

            let c = match self.chars.peek() {
                Some(&c) => c,
                None => return Ok(self.emit(TokenKind::Eof)),
            };

            match c {
                ' ' | '\t' | '\n' => {
                    self.advance();
                }
                '=' => {
                    self.advance();
                    return Ok(self.emit(TokenKind::Assign));
                }
                '(' => {
                    self.advance();
                    return Ok(self.emit(TokenKind::LeftParen));
                }
                ')' => {
                    self.advance();
                    return Ok(self.emit(TokenKind::RightParen));
                }
                '0' | '1' => {
                    let digits = self.take_while(|c| c == '0' || c == '1');
                    return Ok(self.emit(TokenKind::Binary(digits)));
                }
                c if c.is_ascii_alphabetic() => {
                    let word = self.take_while(|c| c.is_ascii_alphanumeric());
                    let kind =
                        TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier(word));
                    return Ok(self.emit(kind));
                }
                found => {
                    tracing::trace!(line = self.line, column = self.column, ?found, "unrecognized input");
                    return Err(Error::ScanError {
                        line: self.start.line,
                        col: self.start.column,
                        found,
                    });
                }
            }
        }
    }

    /// Scans all remaining tokens, ending with `Eof`
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                return Ok(tokens);
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    fn emit(&self, kind: TokenKind) -> Token {
        tracing::trace!(line = self.start.line, column = self.start.column, %kind, "token");
        Token::new(kind, self.start)
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(result)
    }
}
