use std::fmt;

/// The closed set of lexical categories recognized by the lexer.
///
/// `FloatDiv` is part of the set even though the scanner's `/` rule emits
/// `Operator` first; the kind is kept so the category set stays closed over
/// everything the grammar names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Program,
    Var,
    IntegerDiv,
    IntegerType,
    RealType,
    Begin,
    End,
    Id,
    IntegerConst,
    RealConst,
    Operator,
    OpenParen,
    CloseParen,
    Assign,
    EndStatement,
    Dot,
    Colon,
    FloatDiv,
    Comma,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexical unit: a kind, the raw lexeme it was scanned from, and the
/// character offset of its first character. `Eof` carries no lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<String>,
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            literal: Some(literal.into()),
            pos,
        }
    }

    pub fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: None,
            pos,
        }
    }

    /// The lexeme text, or an empty string for tokens without one.
    pub fn text(&self) -> &str {
        self.literal.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.text())
    }
}
