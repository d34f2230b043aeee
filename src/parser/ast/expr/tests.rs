//! Tests for `Expr` rendering.

use super::Expr;
use crate::test_util::{hex, infix, num, postfix, prefix};
use rstest::rstest;

#[rstest]
#[case(num("42"), "42")]
#[case(hex("0x1F"), "0x1F")]
#[case(prefix("-", num("5")), "(- 5)")]
#[case(infix(num("1"), "+", num("2")), "(+ 1 2)")]
#[case(postfix(num("5"), "!"), "(5 !)")]
#[case(
    infix(num("2"), "*", postfix(prefix("~", num("1")), "!")),
    "(* 2 ((~ 1) !))"
)]
fn sexpr_forms(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(expr.to_sexpr(), expected);
}

#[rstest]
#[case(num("1_000"), "1_000")]
#[case(prefix("-", num("3")), "(-3)")]
#[case(infix(num("1"), "<<", num("4")), "(1 << 4)")]
#[case(postfix(postfix(num("3"), "!"), "!"), "3!!")]
#[case(postfix(prefix("-", num("3")), "!"), "(-3)!")]
#[case(postfix(infix(num("1"), "+", num("2")), "!"), "(1 + 2)!")]
#[case(
    infix(prefix("~", num("1")), "&", infix(num("2"), "|", num("3"))),
    "((~1) & (2 | 3))"
)]
fn display_parenthesises_every_operator(#[case] expr: Expr, #[case] expected: &str) {
    assert_eq!(expr.to_string(), expected);
}
