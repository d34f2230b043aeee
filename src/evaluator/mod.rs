//! Tree-walking evaluator.
//!
//! [`evaluate`] reduces an [`Expr`] to an `f64`. Arithmetic operators work on
//! floating-point values directly, so division by zero follows IEEE 754
//! rather than raising an error. Bitwise and shift operators truncate their
//! operands to 32-bit integers first and widen the result back.

mod number;
mod operators;

use thiserror::Error;

use crate::parser::ast::Expr;
use crate::parser::precedence::Fixity;
use crate::{Radix, Token};

/// Errors raised while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The node carries an operator its position does not define.
    #[error("{fixity} operator {token} is not supported (line {}, column {})", token.line, token.column)]
    UnsupportedOperator { fixity: Fixity, token: Token },
    /// A literal with no readable digits, such as `0x`.
    #[error("invalid {radix:?} literal '{text}'")]
    InvalidLiteral { text: String, radix: Radix },
}

/// Evaluate `expr` to a number.
///
/// # Examples
///
/// ```rust
/// use pratt_calc::{evaluate, parse_expression};
///
/// # fn main() -> Result<(), pratt_calc::Error> {
/// if let Some(expr) = parse_expression("4 * 5!")? {
///     assert_eq!(evaluate(&expr)?, 480.0);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns an [`EvalError`] for operators a node cannot apply and for
/// literals without digits.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    eval_node(expr).inspect_err(|err| log::debug!("evaluation failed: {err}"))
}

fn eval_node(expr: &Expr) -> Result<f64, EvalError> {
    let value = match expr {
        Expr::Value(lit) => return number::literal_value(lit),
        Expr::Prefix { op, expr } => operators::prefix(op, eval_node(expr)?)?,
        Expr::Infix { lhs, op, rhs } => operators::infix(op, eval_node(lhs)?, eval_node(rhs)?)?,
        Expr::Postfix { lhs, op } => operators::postfix(op, eval_node(lhs)?)?,
    };
    log::trace!("{expr} = {value}");
    Ok(value)
}

impl Expr {
    /// Evaluate this tree; see [`evaluate`].
    ///
    /// # Errors
    /// As [`evaluate`].
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        evaluate(self)
    }
}
