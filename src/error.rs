//! Error types for the binalg interpreter

use thiserror::Error;

use crate::lexer::Position;

/// binalg interpreter errors
///
/// Every error is fatal: it is raised where it is detected and travels unchanged up to
/// the caller, which renders it with [`Error::diagnostic`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Scan errors
    /// Input character that starts no token
    ///
    /// **Triggered by:** Any character outside `01`, ASCII letters/digits, `=()` and
    /// space/tab/newline at the start of a token
    /// **Example:** `print 2`, `a = 1;`
    #[error("Scan error at line {line}, column {col}: unexpected character {found:?}")]
    ScanError {
        /// Line number where error occurred (1-indexed)
        line: usize,
        /// Column number where error occurred (0-indexed)
        col: usize,
        /// Offending character
        found: char,
    },

    // Parse errors
    /// Lookahead token outside the permitted set of a production
    ///
    /// **Triggered by:** A token that cannot start or follow the current nonterminal, or a
    /// missing required terminal such as `)`
    /// **Example:** `print xor 1`, `print (1 or 0`
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred (1-indexed)
        line: usize,
        /// Column number where error occurred (0-indexed)
        col: usize,
        /// Error description
        message: String,
    },

    // Runtime errors
    /// Reference to undefined variable
    ///
    /// **Triggered by:** Reading a variable before any assignment to it
    /// **Example:** `print y` (when y was never assigned)
    /// **Prevention:** Assign with `y = ...` before use
    #[error("Undefined variable at line {line}, column {col}: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
        /// Line number where error occurred (1-indexed)
        line: usize,
        /// Column number where error occurred (0-indexed)
        col: usize,
    },

    // External errors
    /// Writing a printed value to the output sink failed
    #[error("Output error: {message}")]
    OutputError {
        /// Error message
        message: String,
    },
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized input in the lexer
    Scan,
    /// Token outside the permitted FIRST/FOLLOW set
    Syntax,
    /// Unresolved variable reference
    Semantic,
    /// Output sink failure
    Output,
}

impl Error {
    /// Create a syntax error at a position
    pub fn syntax(position: Position, message: impl Into<String>) -> Self {
        Error::SyntaxError {
            line: position.line,
            col: position.column,
            message: message.into(),
        }
    }

    /// Classify the error
    pub fn classify(&self) -> ErrorKind {
        match self {
            Error::ScanError { .. } => ErrorKind::Scan,
            Error::SyntaxError { .. } => ErrorKind::Syntax,
            Error::UndefinedVariable { .. } => ErrorKind::Semantic,
            Error::OutputError { .. } => ErrorKind::Output,
        }
    }

    /// Source position the error refers to, if any
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::ScanError { line, col, .. }
            | Error::SyntaxError { line, col, .. }
            | Error::UndefinedVariable { line, col, .. } => Some(Position::new(*line, *col)),
            Error::OutputError { .. } => None,
        }
    }

    /// Renders the one-line diagnostic printed by the command line front end.
    ///
    /// Columns are reported 1-based, i.e. the stored column plus one.
    pub fn diagnostic(&self) -> String {
        match self {
            Error::ScanError { line, col, .. } => {
                format!("Scanner Error: at line {} char {}", line, col + 1)
            }
            Error::SyntaxError { line, col, message } => {
                format!("Parser Error: {} at line {} char {}", message, line, col + 1)
            }
            Error::UndefinedVariable { name, line, col } => format!(
                "Parser Error: in atom: unrecognized variable name \"{}\" at line {} char {}",
                name,
                line,
                col + 1
            ),
            Error::OutputError { message } => format!("Output Error: {}", message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::OutputError {
            message: err.to_string(),
        }
    }
}

/// Result type for binalg operations
pub type Result<T> = std::result::Result<T, Error>;
