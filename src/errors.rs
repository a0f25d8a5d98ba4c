use crate::frontend::token::TokenKind;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PascError {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),

    // Lexical analysis errors
    UnknownToken {
        ch: char,
        pos: usize,
    },
    UnterminatedComment {
        pos: usize,
    },

    // Parsing errors
    SyntaxError {
        expected: TokenKind,
        found: TokenKind,
        pos: usize,
    },
    UnexpectedTrailingInput {
        found: TokenKind,
    },
    MissingToken {
        expected: String,
    },

    // Pseudocode generation errors
    UnknownNodeKind {
        kind: String,
    },
}

impl PascError {
    /// Create a syntax error from the expected and encountered token kinds.
    pub fn syntax_error(expected: TokenKind, found: TokenKind, pos: usize) -> Self {
        PascError::SyntaxError {
            expected,
            found,
            pos,
        }
    }

    /// Create a missing-token error naming the construct that needed one.
    pub fn missing_token(expected: impl Into<String>) -> Self {
        PascError::MissingToken {
            expected: expected.into(),
        }
    }

    /// Create an unknown-node error naming the offending node shape.
    pub fn unknown_node(kind: impl Into<String>) -> Self {
        PascError::UnknownNodeKind { kind: kind.into() }
    }
}

impl fmt::Display for PascError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PascError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            PascError::IoError(err) => write!(f, "I/O error: {}", err),

            PascError::UnknownToken { ch, pos } => {
                write!(f, "Unknown token '{}' at offset {}", ch, pos)
            }
            PascError::UnterminatedComment { pos } => {
                write!(f, "Unterminated comment starting at offset {}", pos)
            }

            PascError::SyntaxError {
                expected,
                found,
                pos,
            } => {
                write!(
                    f,
                    "Syntax error at offset {}: expected '{}', found '{}'",
                    pos, expected, found
                )
            }
            PascError::UnexpectedTrailingInput { found } => {
                write!(f, "Unexpected input after end of program: '{}'", found)
            }
            PascError::MissingToken { expected } => {
                write!(f, "Missing expected token: {}", expected)
            }

            PascError::UnknownNodeKind { kind } => {
                write!(f, "Unknown node kind: {}", kind)
            }
        }
    }
}

impl std::error::Error for PascError {}

impl From<io::Error> for PascError {
    fn from(err: io::Error) -> Self {
        PascError::IoError(err)
    }
}

// Type alias for Result with PascError
pub type PascResult<T> = Result<T, PascError>;
