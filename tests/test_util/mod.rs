//! Shared test utilities for integration tests.
//!
//! These helpers parse, evaluate and tokenize through the public API and
//! panic with the offending source on failure. They mirror a subset of the
//! `pratt_calc::test_util` module without requiring the `test-support`
//! feature.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use pratt_calc::{
    Error, Expr, ParseError, SyntaxKind, Token, calculate, parse_complete_expression, tokenize,
};

/// Parse `src` completely, panicking on errors or empty input.
#[must_use]
pub fn parse(src: &str) -> Expr {
    match parse_complete_expression(src) {
        Ok(Some(expr)) => expr,
        Ok(None) => panic!("{src:?} parsed to nothing"),
        Err(e) => panic!("{src:?} failed to parse: {e}"),
    }
}

/// S-expression for `src`.
#[must_use]
pub fn sexpr(src: &str) -> String {
    parse(src).to_sexpr()
}

/// Value of `src`, panicking on any error.
#[must_use]
pub fn eval(src: &str) -> f64 {
    calculate(src).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

/// Tokens of `src` including the end-of-input token.
#[must_use]
pub fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("tokenize {src:?} failed: {e}"))
}

/// Kinds of the tokens of `src`.
#[must_use]
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    tokens(src).iter().map(|t| t.kind).collect()
}

/// Parse error for `src`, panicking if it parses.
#[must_use]
pub fn parse_error(src: &str) -> ParseError {
    match parse_complete_expression(src) {
        Err(e) => e,
        Ok(expr) => panic!("{src:?} should not parse, got {expr:?}"),
    }
}

/// Error from [`calculate`], panicking if it succeeds.
#[must_use]
pub fn calc_error(src: &str) -> Error {
    match calculate(src) {
        Err(e) => e,
        Ok(value) => panic!("{src:?} should fail, got {value}"),
    }
}

/// Assert that `err` renders a message containing `pattern` and points at
/// `start..end`.
///
/// # Panics
/// Panics if the message or span do not match.
#[track_caller]
pub fn assert_error_at(err: &ParseError, pattern: &str, start: usize, end: usize) {
    let rendered = err.to_string();
    assert!(
        rendered.contains(pattern),
        "expected error to contain pattern '{pattern}', got '{rendered}'",
    );
    assert_eq!(err.span(), start..end, "span of '{rendered}'");
}
