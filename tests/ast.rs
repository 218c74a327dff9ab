//! Visitor protocol and tree construction.

use lox_front::ast::{Binary, Grouping, Literal, Unary};
use lox_front::{Expr, Literal as TokenLiteral, Token, TokenKind, Value, Visitor, tokenize};

/// A second operation over the tree, defined entirely outside the
/// crate: constant-fold arithmetic on numbers.
struct Fold;

impl Visitor<Option<f64>> for Fold {
    fn visit_binary(&mut self, expr: &Binary) -> Option<f64> {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;
        match expr.operator.kind {
            TokenKind::Plus => Some(left + right),
            TokenKind::Minus => Some(left - right),
            TokenKind::Star => Some(left * right),
            TokenKind::Slash => Some(left / right),
            _ => None,
        }
    }

    fn visit_grouping(&mut self, expr: &Grouping) -> Option<f64> {
        expr.inner.accept(self)
    }

    fn visit_literal(&mut self, expr: &Literal) -> Option<f64> {
        match expr.value {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    fn visit_unary(&mut self, expr: &Unary) -> Option<f64> {
        let operand = expr.operand.accept(self)?;
        (expr.operator.kind == TokenKind::Minus).then_some(-operand)
    }
}

/// Records the order in which nodes are visited.
#[derive(Default)]
struct Trace(Vec<&'static str>);

impl Visitor<()> for Trace {
    fn visit_binary(&mut self, expr: &Binary) {
        self.0.push("binary");
        expr.left.accept(self);
        expr.right.accept(self);
    }

    fn visit_grouping(&mut self, expr: &Grouping) {
        self.0.push("grouping");
        expr.inner.accept(self);
    }

    fn visit_literal(&mut self, _expr: &Literal) {
        self.0.push("literal");
    }

    fn visit_unary(&mut self, expr: &Unary) {
        self.0.push("unary");
        expr.operand.accept(self);
    }
}

fn op(kind: TokenKind) -> Token {
    Token::symbol(kind, 1)
}

#[test]
fn external_visitor_folds_constants() {
    let expr = Expr::binary(
        Expr::unary(op(TokenKind::Minus), Expr::literal(2.0)),
        op(TokenKind::Star),
        Expr::grouping(Expr::binary(
            Expr::literal(3.0),
            op(TokenKind::Plus),
            Expr::literal(4.0),
        )),
    );
    assert_eq!(expr.accept(&mut Fold), Some(-14.0));
}

#[test]
fn external_visitor_sees_nil() {
    let expr = Expr::binary(Expr::literal(1.0), op(TokenKind::Plus), Expr::nil());
    assert_eq!(expr.accept(&mut Fold), None);
}

#[test]
fn visit_order_is_preorder() {
    let expr = Expr::binary(
        Expr::unary(op(TokenKind::Bang), Expr::literal(true)),
        op(TokenKind::Or),
        Expr::grouping(Expr::nil()),
    );
    let mut trace = Trace::default();
    expr.accept(&mut trace);
    assert_eq!(
        trace.0,
        vec!["binary", "unary", "literal", "grouping", "literal"]
    );
}

#[test]
fn dispatch_through_trait_object() {
    let visitor: &mut dyn Visitor<Option<f64>> = &mut Fold;
    assert_eq!(Expr::literal(7.0).accept(visitor), Some(7.0));
}

#[test]
fn symbol_tokens_use_fixed_lexeme() {
    let token = Token::symbol(TokenKind::GreaterEqual, 4);
    assert_eq!(token.lexeme, ">=");
    assert_eq!(token.line, 4);
    assert!(token.literal.is_none());
    assert_eq!(Token::symbol(TokenKind::Identifier, 1).lexeme, "");
}

#[test]
fn eof_token_constructor() {
    let eof = Token::eof(9);
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(eof.lexeme.is_empty());
    assert_eq!(eof.to_string(), "EOF");
}

#[test]
fn literal_from_scanned_token() {
    let scan = tokenize("\"hi\" 2");
    let values: Vec<_> = scan
        .tokens
        .iter()
        .filter_map(|t| t.literal.clone())
        .map(|literal| Expr::literal(Value::from(literal)))
        .collect();
    assert_eq!(values, vec![Expr::literal("hi"), Expr::literal(2.0)]);
}

#[test]
fn token_new_carries_literal() {
    let token = Token::new(
        TokenKind::Number,
        "1.25",
        Some(TokenLiteral::Number(1.25)),
        2,
    );
    assert_eq!(token.to_string(), "NUMBER 1.25 1.25");
}

#[test]
fn keyword_table() {
    assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
    assert_eq!(TokenKind::keyword("whiles"), None);
    assert_eq!(TokenKind::keyword(""), None);
    assert!(!TokenKind::Identifier.is_keyword());
    assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
}

#[test]
fn trees_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expr>();
    assert_send_sync::<Token>();
}
