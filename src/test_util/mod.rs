//! Helpers for constructing expression nodes and asserting parser errors in
//! tests.
//!
//! These functions reduce boilerplate when asserting over [`Expr`] nodes and
//! verifying that failures point at the right token.
//!
//! [`Expr`]: crate::parser::ast::Expr

mod assertions;
mod expressions;

pub use assertions::{assert_eval, assert_lex_error, assert_parse_error, assert_parses_to};
pub use expressions::{hex, infix, num, postfix, prefix};

use crate::{SyntaxKind, Token, tokenize};

/// Tokenize `src` into kinds only, panicking on lexical errors.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use pratt_calc::{SyntaxKind, test_util::kinds};
/// assert_eq!(kinds("1"), [SyntaxKind::T_NUMBER, SyntaxKind::T_EOF]);
/// # }
/// ```
///
/// # Panics
/// Panics if `src` does not tokenize.
#[must_use]
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    tokenize(src)
        .unwrap_or_else(|e| panic!("tokenize {src:?} failed: {e}"))
        .iter()
        .map(|t| t.kind)
        .collect()
}

/// Operator token for `symbol`, as the tree builders expect it.
///
/// # Panics
/// Panics if `symbol` is not an operator or delimiter.
#[must_use]
pub fn op(symbol: &str) -> Token {
    let kind = SyntaxKind::from_symbol(symbol).unwrap_or_else(|| panic!("unknown symbol {symbol:?}"));
    Token::synthetic(kind)
}
