//! Integration tests for error reporting.

mod test_util;

use pratt_calc::{Error, LexError, ParseError, SyntaxKind};
use rstest::rstest;
use test_util::{assert_error_at, calc_error, parse_error};

#[rstest]
#[case("1 < 2", '<', 2, 1, 3)]
#[case("1 >> 2 > 3", '>', 7, 1, 8)]
#[case("1 +\n  2 < 3", '<', 8, 2, 5)]
fn malformed_shift_operators(
    #[case] src: &str,
    #[case] found: char,
    #[case] offset: usize,
    #[case] line: usize,
    #[case] column: usize,
) {
    let ParseError::Lex(LexError::MalformedOperator {
        found: f,
        expected,
        span,
        line: l,
        column: c,
    }) = parse_error(src)
    else {
        panic!("expected a malformed operator in {src:?}");
    };
    assert_eq!((f, expected), (found, found));
    assert_eq!((span.start, l, c), (offset, line, column));
}

#[test]
fn lexical_errors_report_position() {
    let err = parse_error("2 * @");
    assert!(matches!(err, ParseError::Lex(LexError::UnexpectedChar { found: '@', .. })));
    assert_error_at(&err, "unrecognised character '@' at line 1, column 5", 4, 5);
}

#[test]
fn lexical_error_wins_over_missing_operand() {
    assert!(matches!(parse_error("1 + $"), ParseError::Lex(_)));
}

#[rstest]
#[case("1 +", SyntaxKind::T_PLUS)]
#[case("(3 *", SyntaxKind::T_STAR)]
#[case("2 <<", SyntaxKind::T_SHL)]
fn infix_without_right_operand(#[case] src: &str, #[case] kind: SyntaxKind) {
    let ParseError::MissingOperand { operator } = parse_error(src) else {
        panic!("expected a missing operand in {src:?}");
    };
    assert_eq!(operator.kind, kind);
}

#[test]
fn messages_name_the_expected_kind() {
    let err = parse_error("(1 + 2");
    assert_eq!(err.to_string(), "expected ')', found end of input at line 1, column 7");
}

#[test]
fn crate_error_is_transparent() {
    let err = calc_error("(1");
    assert!(matches!(err, Error::Parse(ParseError::Expected { .. })));
    assert_eq!(err.to_string(), parse_error("(1").to_string());
    assert_eq!(calc_error("").to_string(), "empty expression");
}
