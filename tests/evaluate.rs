//! Integration tests for evaluation through `calculate` and `evaluate`.

mod test_util;

use pratt_calc::parser::ast::NumberLiteral;
use pratt_calc::parser::precedence::Fixity;
use pratt_calc::{Error, EvalError, Expr, Radix, SyntaxKind, Token, evaluate};
use rstest::rstest;
use test_util::{calc_error, eval, parse};

#[rstest]
#[case("2 + 3 * 4", 14.0)]
#[case("(2 + 3) * 4", 20.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("2 * 3 / 4", 1.5)]
#[case("7 % 4", 3.0)]
#[case("-7 % 4", -3.0)]
#[case("7.5 % 2", 1.5)]
#[case("1.5 + 0.25", 1.75)]
#[case("1_000 * 3", 3000.0)]
fn arithmetic(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case("6 & 3", 2.0)]
#[case("6 | 3", 7.0)]
#[case("6 ^ 3", 5.0)]
#[case("1 << 4", 16.0)]
#[case("256 >> 4", 16.0)]
#[case("-16 >> 2", -4.0)]
#[case("1 << 31", -2_147_483_648.0)]
#[case("1 << 32", 1.0)]
#[case("1 << 33", 2.0)]
#[case("-1 >> 31", -1.0)]
#[case("~2147483648", 2_147_483_647.0)]
#[case("4294967297 | 0", 1.0)]
#[case("6.9 & 3.9", 2.0)]
#[case("1 & 2 ^ 3 | 4", 7.0)]
fn bitwise_and_shift(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[rstest]
#[case("0x1F", 31.0)]
#[case("0xff + 1", 256.0)]
#[case("0o17", 15.0)]
#[case("0b1010 | 0b0101", 15.0)]
#[case("0x1.8", 1.5)]
#[case("0b_1_1", 3.0)]
fn radix_literals(#[case] src: &str, #[case] expected: f64) {
    assert_eq!(eval(src), expected);
}

#[test]
fn mixed_operators() {
    assert_eq!(eval("305 << 2 - 212 + 4 * 5!"), 4_997_120.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(eval("1 / 0"), f64::INFINITY);
    assert_eq!(eval("-1 / 0"), f64::NEG_INFINITY);
    assert!(eval("0 / 0").is_nan());
    assert!(eval("1 % 0").is_nan());
}

#[test]
fn evaluate_matches_calculate() {
    let expr = parse("(1 + 2) * 3!");
    assert_eq!(evaluate(&expr), Ok(18.0));
    assert_eq!(expr.evaluate(), Ok(18.0));
}

#[rstest]
#[case("0x", Radix::Hexadecimal)]
#[case("0b__", Radix::Binary)]
#[case("1 + 0o", Radix::Octal)]
fn literals_without_digits(#[case] src: &str, #[case] radix: Radix) {
    let Error::Eval(EvalError::InvalidLiteral { radix: r, .. }) = calc_error(src) else {
        panic!("expected an invalid literal in {src:?}");
    };
    assert_eq!(r, radix);
}

#[rstest]
#[case(SyntaxKind::T_STAR, Fixity::Prefix)]
#[case(SyntaxKind::T_LPAREN, Fixity::Prefix)]
fn hand_built_trees_with_foreign_operators(#[case] kind: SyntaxKind, #[case] fixity: Fixity) {
    let op = Token::synthetic(kind);
    let expr = Expr::Prefix {
        op: op.clone(),
        expr: Box::new(Expr::Value(NumberLiteral::new("1", Radix::Decimal))),
    };
    assert_eq!(
        evaluate(&expr),
        Err(EvalError::UnsupportedOperator { fixity, token: op })
    );
}

#[test]
fn empty_input_is_reported() {
    assert_eq!(calc_error("  "), Error::EmptyExpression);
}

#[test]
fn parse_errors_pass_through() {
    assert!(matches!(calc_error("1 +"), Error::Parse(_)));
    assert!(matches!(calc_error("1 < 2"), Error::Parse(_)));
}
