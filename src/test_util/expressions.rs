//! Helpers for constructing expression nodes in tests.
//!
//! Operator tokens are synthetic, so trees built here compare equal to parsed
//! trees only through [`Expr::to_sexpr`] or evaluation, never via `==`.

use super::op;
use crate::Radix;
use crate::parser::ast::{Expr, NumberLiteral};

/// Construct a decimal [`Expr::Value`].
#[must_use]
pub fn num(raw: &str) -> Expr {
    Expr::Value(NumberLiteral::new(raw, Radix::Decimal))
}

/// Construct a hexadecimal [`Expr::Value`]; `raw` keeps its `0x` prefix.
#[must_use]
pub fn hex(raw: &str) -> Expr {
    Expr::Value(NumberLiteral::new(raw, Radix::Hexadecimal))
}

/// Construct an [`Expr::Prefix`] node.
#[must_use]
pub fn prefix(symbol: &str, expr: Expr) -> Expr {
    Expr::Prefix {
        op: op(symbol),
        expr: Box::new(expr),
    }
}

/// Construct an [`Expr::Infix`] node.
#[must_use]
pub fn infix(lhs: Expr, symbol: &str, rhs: Expr) -> Expr {
    Expr::Infix {
        lhs: Box::new(lhs),
        op: op(symbol),
        rhs: Box::new(rhs),
    }
}

/// Construct an [`Expr::Postfix`] node.
#[must_use]
pub fn postfix(lhs: Expr, symbol: &str) -> Expr {
    Expr::Postfix {
        lhs: Box::new(lhs),
        op: op(symbol),
    }
}
