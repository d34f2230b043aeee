//! Operator semantics for each node fixity.

use crate::parser::precedence::Fixity;
use crate::{SyntaxKind, Token};

use super::EvalError;

fn unsupported(fixity: Fixity, token: &Token) -> EvalError {
    EvalError::UnsupportedOperator {
        fixity,
        token: token.clone(),
    }
}

/// Truncate towards zero, wrapping values outside the `i32` range.
#[expect(
    clippy::cast_possible_truncation,
    reason = "bitwise operators work on wrapped 32-bit integers"
)]
fn truncate(value: f64) -> i32 {
    (value as i64) as i32
}

fn widen(value: i32) -> f64 {
    f64::from(value)
}

/// Shift distance modulo the integer width.
fn shift_amount(value: i32) -> u32 {
    u32::try_from(value & 31).unwrap_or_default()
}

#[expect(clippy::float_arithmetic, reason = "negation of f64 operands")]
pub(super) fn prefix(op: &Token, operand: f64) -> Result<f64, EvalError> {
    match op.kind {
        SyntaxKind::T_PLUS => Ok(operand),
        SyntaxKind::T_MINUS => Ok(-operand),
        SyntaxKind::T_TILDE => Ok(widen(!truncate(operand))),
        _ => Err(unsupported(Fixity::Prefix, op)),
    }
}

#[expect(clippy::float_arithmetic, reason = "arithmetic operators act on f64 values")]
pub(super) fn infix(op: &Token, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    let value = match op.kind {
        SyntaxKind::T_PLUS => lhs + rhs,
        SyntaxKind::T_MINUS => lhs - rhs,
        SyntaxKind::T_STAR => lhs * rhs,
        SyntaxKind::T_SLASH => lhs / rhs,
        SyntaxKind::T_PERCENT => lhs % rhs,
        SyntaxKind::T_AMP => widen(truncate(lhs) & truncate(rhs)),
        SyntaxKind::T_PIPE => widen(truncate(lhs) | truncate(rhs)),
        SyntaxKind::T_CARET => widen(truncate(lhs) ^ truncate(rhs)),
        SyntaxKind::T_SHL => widen(truncate(lhs).wrapping_shl(shift_amount(truncate(rhs)))),
        SyntaxKind::T_SHR => widen(truncate(lhs).wrapping_shr(shift_amount(truncate(rhs)))),
        _ => return Err(unsupported(Fixity::Infix, op)),
    };
    Ok(value)
}

pub(super) fn postfix(op: &Token, operand: f64) -> Result<f64, EvalError> {
    match op.kind {
        SyntaxKind::T_BANG => Ok(factorial(truncate(operand))),
        _ => Err(unsupported(Fixity::Postfix, op)),
    }
}

/// Iterative `1 * 2 * ... * n`; `n <= 0` yields 1.
#[expect(clippy::float_arithmetic, reason = "factorials overflow i32 quickly")]
fn factorial(n: i32) -> f64 {
    let mut product = 1.0;
    for i in 1..=n {
        product *= widen(i);
        if product.is_infinite() {
            break;
        }
    }
    product
}
