use crate::errors::{PascError, PascResult};
use crate::frontend::token::{Token, TokenKind};
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            pos: 0,
        }
    }

    /// Scan the whole source, returning the token sequence including the
    /// trailing `Eof` token.
    pub fn tokens(mut self) -> PascResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Produce the next token, or `Eof` once the input is exhausted.
    /// Repeated calls at end-of-input keep returning `Eof`.
    pub fn next_token(&mut self) -> PascResult<Token> {
        self.skip_whitespace_and_comments()?;
        match self.chars.peek() {
            None => Ok(Token::eof(self.pos)),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(),
            Some(&ch) if ch.is_alphabetic() => Ok(self.scan_identifier()),
            Some(&':') => Ok(self.scan_colon()),
            Some(&ch) => self.scan_single_char_token(ch),
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace_and_comments(&mut self) -> PascResult<()> {
        loop {
            match self.chars.peek() {
                Some(&'{') => self.skip_comment()?,
                Some(&ch) if ch.is_whitespace() => {
                    self.bump();
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> PascResult<()> {
        let start = self.pos;
        self.bump(); // Consume '{'
        while let Some(ch) = self.bump() {
            if ch == '}' {
                return Ok(());
            }
        }
        Err(PascError::UnterminatedComment { pos: start })
    }

    fn scan_number(&mut self) -> PascResult<Token> {
        let start = self.pos;
        let mut literal = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        // Without a decimal point the digit run is an integer constant.
        if self.chars.peek() != Some(&'.') {
            return Ok(Token::new(TokenKind::IntegerConst, literal, start));
        }
        literal.push('.');
        self.bump();
        // A trailing dot with no fraction digits still scans as a real
        // constant, e.g. "3." -> RealConst("3.").
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        Ok(Token::new(TokenKind::RealConst, literal, start))
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() {
                identifier.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        self.keyword_or_identifier(identifier, start)
    }

    // Reserved-word lookup is case-sensitive: only the uppercase spellings
    // are keywords, anything else is an identifier.
    fn keyword_or_identifier(&self, identifier: String, start: usize) -> Token {
        let kind = match identifier.as_str() {
            "PROGRAM" => TokenKind::Program,
            "VAR" => TokenKind::Var,
            "DIV" => TokenKind::IntegerDiv,
            "INTEGER" => TokenKind::IntegerType,
            "REAL" => TokenKind::RealType,
            "BEGIN" => TokenKind::Begin,
            "END" => TokenKind::End,
            _ => TokenKind::Id,
        };
        Token::new(kind, identifier, start)
    }

    fn scan_colon(&mut self) -> Token {
        let start = self.pos;
        self.bump(); // Consume ':'
        match self.chars.peek() {
            Some(&'=') => {
                self.bump(); // Consume '='
                Token::new(TokenKind::Assign, ":=", start)
            }
            _ => Token::new(TokenKind::Colon, ":", start),
        }
    }

    fn scan_single_char_token(&mut self, ch: char) -> PascResult<Token> {
        let start = self.pos;
        self.bump(); // Consume the character
        let kind = match ch {
            '+' | '-' | '*' | '/' => TokenKind::Operator,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ';' => TokenKind::EndStatement,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            _ => return Err(PascError::UnknownToken { ch, pos: start }),
        };
        Ok(Token::new(kind, ch, start))
    }
}

// Convenience function mirroring the three-call pipeline API
pub fn lex(source: &str) -> PascResult<Vec<Token>> {
    Lexer::new(source).tokens()
}
