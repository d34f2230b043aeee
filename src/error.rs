//! Crate-level error type and the one-shot [`calculate`] entry point.

use thiserror::Error;

use crate::evaluator::{EvalError, evaluate};
use crate::parser::{ParseError, parse_complete_expression};

/// Any failure on the way from source text to a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The source held no tokens besides whitespace.
    #[error("empty expression")]
    EmptyExpression,
}

/// Parse all of `src` and evaluate it.
///
/// # Examples
///
/// ```rust
/// use pratt_calc::calculate;
///
/// assert_eq!(calculate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(calculate("6 ^ 3"), Ok(5.0));
/// assert!(calculate("1 +").is_err());
/// ```
///
/// # Errors
/// Returns [`Error::EmptyExpression`] for blank input, otherwise the first
/// parse or evaluation error.
pub fn calculate(src: &str) -> Result<f64, Error> {
    let expr = parse_complete_expression(src)?.ok_or(Error::EmptyExpression)?;
    log::debug!("evaluating {expr}");
    Ok(evaluate(&expr)?)
}
