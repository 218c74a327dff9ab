//! Expression tree and the visitor protocol used to walk it.
//!
//! The node set is closed. Operations over it (printing, evaluation, and
//! so on) implement [`Visitor`] instead of adding methods to the nodes, so
//! a new operation never touches this module. A new node kind, in turn,
//! fails to compile until every visitor handles it.

use std::fmt;

use crate::token::{Literal as TokenLiteral, Token};

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(Binary),
    Grouping(Grouping),
    Literal(Literal),
    Unary(Unary),
}

/// Infix operation: `left operator right`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub inner: Box<Expr>,
}

/// Literal value. `None` is `nil`.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Option<Value>,
}

/// Prefix operation: `operator operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub operand: Box<Expr>,
}

/// Payload of a non-nil literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<TokenLiteral> for Value {
    fn from(literal: TokenLiteral) -> Self {
        match literal {
            TokenLiteral::Number(n) => Self::Number(n),
            TokenLiteral::String(s) => Self::String(s),
        }
    }
}

/// One operation over the expression tree, producing `R` per node.
pub trait Visitor<R> {
    fn visit_binary(&mut self, expr: &Binary) -> R;
    fn visit_grouping(&mut self, expr: &Grouping) -> R;
    fn visit_literal(&mut self, expr: &Literal) -> R;
    fn visit_unary(&mut self, expr: &Unary) -> R;
}

impl Expr {
    /// Dispatch to the visitor method for this node's variant.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: Visitor<R> + ?Sized,
    {
        match self {
            Self::Binary(expr) => visitor.visit_binary(expr),
            Self::Grouping(expr) => visitor.visit_grouping(expr),
            Self::Literal(expr) => visitor.visit_literal(expr),
            Self::Unary(expr) => visitor.visit_unary(expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    /// Counts nodes, to check dispatch reaches every variant.
    struct NodeCount;

    impl Visitor<usize> for NodeCount {
        fn visit_binary(&mut self, expr: &Binary) -> usize {
            1 + expr.left.accept(self) + expr.right.accept(self)
        }

        fn visit_grouping(&mut self, expr: &Grouping) -> usize {
            1 + expr.inner.accept(self)
        }

        fn visit_literal(&mut self, _expr: &Literal) -> usize {
            1
        }

        fn visit_unary(&mut self, expr: &Unary) -> usize {
            1 + expr.operand.accept(self)
        }
    }

    #[test]
    fn accept_reaches_every_variant() {
        let expr = Expr::binary(
            Expr::unary(Token::symbol(TokenKind::Bang, 1), Expr::literal(true)),
            Token::symbol(TokenKind::EqualEqual, 1),
            Expr::grouping(Expr::nil()),
        );
        assert_eq!(expr.accept(&mut NodeCount), 5);
    }

    #[test]
    fn value_from_token_literal() {
        assert_eq!(
            Value::from(TokenLiteral::Number(1.5)),
            Value::Number(1.5)
        );
        assert_eq!(
            Value::from(TokenLiteral::String("s".to_string())),
            Value::String("s".to_string())
        );
    }

    #[test]
    fn value_display_uses_default_conversion() {
        assert_eq!(Value::Number(123.0).to_string(), "123");
        assert_eq!(Value::Number(45.67).to_string(), "45.67");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::String("abc".into()).to_string(), "abc");
    }
}
