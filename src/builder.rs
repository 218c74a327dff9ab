use crate::ast::{Binary, Expr, Grouping, Literal, Unary, Value};
use crate::token::{Literal as TokenLiteral, Token, TokenKind};

impl Expr {
    /// Create a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Create a grouping node around `inner`.
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping(Grouping {
            inner: Box::new(inner),
        })
    }

    /// Create a non-nil literal node.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(Literal {
            value: Some(value.into()),
        })
    }

    /// Create the `nil` literal.
    #[must_use]
    pub const fn nil() -> Self {
        Self::Literal(Literal { value: None })
    }

    /// Create a unary node.
    #[must_use]
    pub fn unary(operator: Token, operand: Self) -> Self {
        Self::Unary(Unary {
            operator,
            operand: Box::new(operand),
        })
    }
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, literal: Option<TokenLiteral>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_string(),
            literal,
            line,
        }
    }

    /// Token for a kind with a fixed spelling, such as an operator or
    /// keyword. Other kinds get an empty lexeme.
    #[must_use]
    pub fn symbol(kind: TokenKind, line: usize) -> Self {
        Self::new(kind, kind.lexeme().unwrap_or_default(), None, line)
    }

    /// End-of-input token at `line`.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
