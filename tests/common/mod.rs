#![allow(dead_code)]

use lox_front::{Literal, Scan, ScanErrorKind, Token, TokenKind, tokenize};

/// Scan `source` and return the token kinds, `Eof` included.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.iter().map(|t| t.kind).collect()
}

/// Scan `source` and return only the error kinds.
pub fn error_kinds(source: &str) -> Vec<ScanErrorKind> {
    tokenize(source).errors.into_iter().map(|e| e.kind).collect()
}

/// Scan `source`, asserting it produced no errors.
pub fn scan_clean(source: &str) -> Vec<Token> {
    let Scan { tokens, errors } = tokenize(source);
    assert!(
        errors.is_empty(),
        "unexpected scan errors for {source:?}: {errors:?}"
    );
    tokens
}

/// Numeric literal of a token, panicking if it has none.
pub fn number(token: &Token) -> f64 {
    match &token.literal {
        Some(Literal::Number(n)) => *n,
        other => panic!("expected number literal on {token}, got {other:?}"),
    }
}

/// String literal of a token, panicking if it has none.
pub fn string(token: &Token) -> &str {
    match &token.literal {
        Some(Literal::String(s)) => s,
        other => panic!("expected string literal on {token}, got {other:?}"),
    }
}
