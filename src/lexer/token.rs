/// Location in the source text
///
/// `line` is 1-indexed, `column` counts characters from the start of the line and is
/// 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Creates a new position
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 0)
    }
}

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Where the token starts
    pub position: Position,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }

    /// Payload-free category of this token
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}

/// All possible token types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Operators
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `=`
    Assign,

    // Keywords
    /// `print`
    Print,

    // Delimiters
    /// `(`
    LeftParen,
    /// `)`
    RightParen,

    // Literals
    /// Run of `0`/`1` digits, kept as written
    Binary(String),

    // Identifiers
    /// Letter followed by letters or digits
    Identifier(String),

    /// End of input
    Eof,
}

impl TokenKind {
    /// Reserved word for an identifier-shaped lexeme, if it is one
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "xor" => Some(TokenKind::Xor),
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }

    /// Check if token is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And | TokenKind::Or | TokenKind::Xor | TokenKind::Print
        )
    }

    /// Category used by the grammar tables
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::And => TokenClass::And,
            TokenKind::Or => TokenClass::Or,
            TokenKind::Xor => TokenClass::Xor,
            TokenKind::Assign => TokenClass::Assign,
            TokenKind::Print => TokenClass::Print,
            TokenKind::LeftParen => TokenClass::LeftParen,
            TokenKind::RightParen => TokenClass::RightParen,
            TokenKind::Binary(_) => TokenClass::Binary,
            TokenKind::Identifier(_) => TokenClass::Identifier,
            TokenKind::Eof => TokenClass::Eof,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Binary(digits) => write!(f, "binary literal `{}`", digits),
            TokenKind::Identifier(name) => write!(f, "identifier `{}`", name),
            other => write!(f, "{}", other.class()),
        }
    }
}

/// Token category without payload
///
/// FIRST and FOLLOW sets are written in terms of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `=`
    Assign,
    /// `print`
    Print,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Binary literal
    Binary,
    /// Identifier
    Identifier,
    /// End of input
    Eof,
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenClass::And => "`and`",
            TokenClass::Or => "`or`",
            TokenClass::Xor => "`xor`",
            TokenClass::Assign => "`=`",
            TokenClass::Print => "`print`",
            TokenClass::LeftParen => "`(`",
            TokenClass::RightParen => "`)`",
            TokenClass::Binary => "binary literal",
            TokenClass::Identifier => "identifier",
            TokenClass::Eof => "end of input",
        };
        f.write_str(name)
    }
}
