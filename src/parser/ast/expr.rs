//! Expression AST.
//!
//! The parser builds an [`Expr`] bottom-up; nodes are never mutated after
//! construction and every node exclusively owns its children. Operator nodes
//! keep the token they were built from so diagnostics and rendering can show
//! the symbol as written.

use std::fmt;

use crate::Token;

use super::NumberLiteral;

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Value(NumberLiteral),
    Prefix {
        op: Token,
        expr: Box<Expr>,
    },
    Infix {
        lhs: Box<Expr>,
        op: Token,
        rhs: Box<Expr>,
    },
    Postfix {
        lhs: Box<Expr>,
        op: Token,
    },
}

impl Expr {
    /// Display the expression as a simple S-expression for tests.
    ///
    /// Postfix nodes put the operator last, e.g. `(5 !)`.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Value(lit) => lit.raw.clone(),
            Self::Prefix { op, expr } => format!("({} {})", op.text, expr.to_sexpr()),
            Self::Infix { lhs, op, rhs } => {
                format!("({} {} {})", op.text, lhs.to_sexpr(), rhs.to_sexpr())
            }
            Self::Postfix { lhs, op } => format!("({} {})", lhs.to_sexpr(), op.text),
        }
    }
}

/// Renders a fully parenthesised expression that parses back to the same
/// tree shape.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(lit) => f.write_str(&lit.raw),
            Self::Prefix { op, expr } => write!(f, "({}{expr})", op.text),
            Self::Infix { lhs, op, rhs } => write!(f, "({lhs} {} {rhs})", op.text),
            Self::Postfix { lhs, op } => write!(f, "{lhs}{}", op.text),
        }
    }
}

#[cfg(test)]
mod tests;
