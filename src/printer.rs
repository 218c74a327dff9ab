//! Printers that render an expression tree back to text.
//!
//! [`print`] gives the fully parenthesized prefix form used in
//! diagnostics; [`print_rpn`] gives reverse Polish notation.

use crate::ast::{Binary, Expr, Grouping, Literal, Unary, Visitor};

/// Render `expr` in fully parenthesized prefix form,
/// e.g. `(* (- 123) (group 45.67))`.
#[must_use]
pub fn print(expr: &Expr) -> String {
    expr.accept(&mut AstPrinter)
}

/// Render `expr` in reverse Polish notation, e.g. `1 2 + 4 3 - *`.
#[must_use]
pub fn print_rpn(expr: &Expr) -> String {
    expr.accept(&mut RpnPrinter)
}

/// Parenthesized prefix printer.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::from("(");
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_binary(&mut self, expr: &Binary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
    }

    fn visit_grouping(&mut self, expr: &Grouping) -> String {
        self.parenthesize("group", &[&*expr.inner])
    }

    fn visit_literal(&mut self, expr: &Literal) -> String {
        literal_text(expr)
    }

    fn visit_unary(&mut self, expr: &Unary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.operand])
    }
}

/// Reverse Polish printer. Groupings vanish since postfix order
/// already fixes evaluation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl Visitor<String> for RpnPrinter {
    fn visit_binary(&mut self, expr: &Binary) -> String {
        format!(
            "{} {} {}",
            expr.left.accept(self),
            expr.right.accept(self),
            expr.operator.lexeme
        )
    }

    fn visit_grouping(&mut self, expr: &Grouping) -> String {
        expr.inner.accept(self)
    }

    fn visit_literal(&mut self, expr: &Literal) -> String {
        literal_text(expr)
    }

    fn visit_unary(&mut self, expr: &Unary) -> String {
        format!("{} {}", expr.operand.accept(self), expr.operator.lexeme)
    }
}

fn literal_text(expr: &Literal) -> String {
    expr.value
        .as_ref()
        .map_or_else(|| "nil".to_string(), ToString::to_string)
}
