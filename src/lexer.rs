use std::fmt;

use tracing::debug;

use crate::report::Reporter;
use crate::token::{Literal, Token, TokenKind};

/// Classifies a scan error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// String literal with no closing quote before end of input.
    UnterminatedString,
    /// Block comment whose nesting never returned to zero.
    UnterminatedBlockComment,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character '{ch}'")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string, expected '\"'")
            }
            Self::UnterminatedBlockComment => {
                write!(f, "unterminated block comment, expected '*/'")
            }
        }
    }
}

/// Error reported during scanning. Never aborts the scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}

/// Tokens and errors collected from one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl Scan {
    /// True when the scan reported no errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scan a source string into tokens, sending malformed lexemes
/// to `reporter` and carrying on.
///
/// The returned sequence always ends with exactly one `Eof` token.
pub fn scan<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

/// Scan a source string and collect every reported error.
#[must_use]
pub fn tokenize(source: &str) -> Scan {
    let mut errors: Vec<ScanError> = Vec::new();
    let tokens = scan(source, &mut errors);
    Scan { tokens, errors }
}

struct Scanner<'a, R: ?Sized> {
    source: &'a str,
    bytes: &'a [u8],
    reporter: &'a mut R,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
}

impl<'a, R: Reporter + ?Sized> Scanner<'a, R> {
    const fn new(source: &'a str, reporter: &'a mut R) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            reporter,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    fn scan_tokens(mut self) -> Vec<Token> {
        let mut errors = 0;
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if !self.scan_token() {
                errors += 1;
            }
        }

        self.tokens.push(Token::eof(self.line));

        debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            errors,
            "scan finished"
        );
        self.tokens
    }

    /// Scan one lexeme. Returns false if an error was reported.
    fn scan_token(&mut self) -> bool {
        let byte = self.advance();

        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => self.add_either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.match_byte(b'/') {
                    self.line_comment();
                } else if self.match_byte(b'*') {
                    return self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => return self.string(),
            b'0'..=b'9' => self.number(),
            b if is_alpha(b) => self.identifier(),
            _ => {
                self.unexpected_character();
                return false;
            }
        }

        true
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.bytes[self.current];
        self.current += 1;
        byte
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.current + 1).copied()
    }

    fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn line_comment(&mut self) {
        while self.peek().is_some_and(|b| b != b'\n') {
            self.current += 1;
        }
    }

    /// Consume a `/* ... */` comment, honouring nested pairs.
    /// The opening `/*` has already been consumed.
    fn block_comment(&mut self) -> bool {
        let mut depth = 1usize;

        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (None, _) => {
                    self.error(ScanErrorKind::UnterminatedBlockComment);
                    return false;
                }
                (Some(b'/'), Some(b'*')) => {
                    self.current += 2;
                    depth += 1;
                }
                (Some(b'*'), Some(b'/')) => {
                    self.current += 2;
                    depth -= 1;
                }
                (Some(b'\n'), _) => {
                    self.current += 1;
                    self.line += 1;
                }
                (Some(_), _) => self.current += 1,
            }
        }

        true
    }

    fn string(&mut self) -> bool {
        while let Some(byte) = self.peek() {
            if byte == b'"' {
                break;
            }
            if byte == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            self.error(ScanErrorKind::UnterminatedString);
            return false;
        }

        // closing quote
        self.current += 1;

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal(TokenKind::String, Literal::String(value));
        true
    }

    fn number(&mut self) {
        self.digits();

        // A trailing `.` stays a separate token unless a digit follows it.
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|b| b.is_ascii_digit()) {
            self.current += 1;
            self.digits();
        }

        // The lexeme is `[0-9]+(\.[0-9]+)?`, which always parses.
        let value = self.lexeme().parse::<f64>().unwrap_or(f64::NAN);
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.current += 1;
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.current += 1;
        }

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// Report the character starting at `start` and skip all of its
    /// bytes, so a multi-byte character yields a single error.
    fn unexpected_character(&mut self) {
        let ch = self.source[self.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = self.start + ch.len_utf8();
        self.error(ScanErrorKind::UnexpectedCharacter(ch));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_either(&mut self, second: u8, matched: TokenKind, single: TokenKind) {
        let kind = if self.match_byte(second) {
            matched
        } else {
            single
        };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push(kind, Some(literal));
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            line: self.start_line,
        });
    }

    fn error(&mut self, kind: ScanErrorKind) {
        self.reporter.report(&ScanError {
            kind,
            line: self.line,
        });
    }
}

const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

const fn is_alphanumeric(byte: u8) -> bool {
    is_alpha(byte) || byte.is_ascii_digit()
}
