//! Assertion helpers for verifying parser results in tests.

use crate::parser::ast::Expr;
use crate::{LexError, ParseError, Span, calculate, parse_complete_expression};

fn parse_ok(src: &str) -> Expr {
    match parse_complete_expression(src) {
        Ok(Some(expr)) => expr,
        Ok(None) => panic!("{src:?} parsed to nothing"),
        Err(e) => panic!("{src:?} failed to parse: {e}"),
    }
}

/// Assert that `src` parses to a tree with the S-expression `expected`.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use pratt_calc::test_util::assert_parses_to;
/// assert_parses_to("1 - 2 - 3", "(- (- 1 2) 3)");
/// # }
/// ```
///
/// # Panics
/// Panics if parsing fails or the tree differs.
#[track_caller]
pub fn assert_parses_to(src: &str, expected: &str) {
    assert_eq!(parse_ok(src).to_sexpr(), expected, "tree for {src:?}");
}

/// Assert that `src` evaluates to `expected`.
///
/// Values are compared exactly; NaN matches NaN.
///
/// # Panics
/// Panics if `src` fails to parse or evaluate, or yields another value.
#[track_caller]
pub fn assert_eval(src: &str, expected: f64) {
    let value = calculate(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}"));
    if expected.is_nan() {
        assert!(value.is_nan(), "{src:?} = {value}, expected NaN");
    } else {
        assert_eq!(value.to_bits(), expected.to_bits(), "{src:?} = {value}, expected {expected}");
    }
}

/// Assert that parsing `src` fails with an error covering `span` whose
/// message contains `pattern`.
///
/// # Panics
/// Panics if parsing succeeds, or the message or span do not match.
#[track_caller]
pub fn assert_parse_error(src: &str, pattern: &str, span: Span) -> ParseError {
    let Err(err) = parse_complete_expression(src) else {
        panic!("{src:?} should not parse");
    };
    let rendered = err.to_string();
    assert!(
        rendered.contains(pattern),
        "expected error to contain '{pattern}', got '{rendered}'",
    );
    assert_eq!(err.span(), span, "span of '{rendered}'");
    err
}

/// Assert that `src` fails to parse because of a lexical error.
///
/// # Panics
/// Panics if parsing succeeds or fails for another reason.
#[track_caller]
pub fn assert_lex_error(src: &str) -> LexError {
    match parse_complete_expression(src) {
        Err(ParseError::Lex(err)) => err,
        other => panic!("expected lexical error for {src:?}, got {other:?}"),
    }
}
