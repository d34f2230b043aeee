//! Conversion of numeric literals to `f64`.
//!
//! Literals keep their radix prefix and `_` separators in the AST. Both are
//! stripped here and the remaining digits, including any fractional part,
//! are read in the radix recorded by the tokenizer.

use num_traits::Num;

use crate::parser::ast::NumberLiteral;

use super::EvalError;

/// Value of `lit`, honouring its radix.
///
/// An optional leading sign is accepted so literals assembled outside the
/// tokenizer can carry one.
#[expect(clippy::float_arithmetic, reason = "negative literals negate the magnitude")]
pub(super) fn literal_value(lit: &NumberLiteral) -> Result<f64, EvalError> {
    let invalid = || EvalError::InvalidLiteral {
        text: lit.raw.clone(),
        radix: lit.radix,
    };
    let (negative, unsigned) = lit.raw.strip_prefix('-').map_or_else(
        || (false, lit.raw.strip_prefix('+').unwrap_or(&lit.raw)),
        |rest| (true, rest),
    );
    let body = unsigned.get(lit.radix.prefix_len()..).ok_or_else(invalid)?;
    let digits: String = body.chars().filter(|c| *c != '_').collect();
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let magnitude = f64::from_str_radix(&digits, lit.radix.value()).map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}
