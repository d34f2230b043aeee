//! Integration tests for the postfix factorial operator.

mod test_util;

use pratt_calc::ParseError;
use rstest::rstest;
use test_util::{eval, parse_error, sexpr};

#[rstest]
#[case("5!", "(5 !)")]
#[case("3!!", "((3 !) !)")]
#[case("2 * 3!", "(* 2 (3 !))")]
#[case("2! * 3", "(* (2 !) 3)")]
#[case("-3!", "(- (3 !))")]
#[case("(1 + 2)!", "((+ 1 2) !)")]
#[case("1 << 2!", "(<< 1 (2 !))")]
fn postfix_forms(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(sexpr(src), expected);
}

#[rstest]
#[case("0!", 1.0)]
#[case("1!", 1.0)]
#[case("5!", 120.0)]
#[case("4 * 5!", 480.0)]
#[case("3!!", 720.0)]
#[case("5.9!", 120.0)]
#[case("(0 - 3)!", 1.0)]
#[case("-3!", -6.0)]
#[case("20!", 2_432_902_008_176_640_000.0)]
fn factorial_values(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[test]
fn large_factorials_overflow_to_infinity() {
    assert!(eval("171!").is_infinite());
    assert!(eval("1000!").is_infinite());
}

#[test]
fn postfix_operator_cannot_start_an_expression() {
    assert!(matches!(parse_error("!5"), ParseError::UnexpectedToken { .. }));
}
