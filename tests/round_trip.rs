//! Rendering a parsed tree and parsing the result gives back the same tree.

mod test_util;

use rstest::rstest;
use test_util::{eval, parse};

#[rstest]
#[case("1")]
#[case("2 + 3 * 4")]
#[case("(2 + 3) * 4")]
#[case("1 - 2 - 3")]
#[case("1 - (2 - 3)")]
#[case("-2 + 3")]
#[case("-2 * 3")]
#[case("- -2")]
#[case("~1 & 2")]
#[case("(~1) & 2")]
#[case("(-3)!")]
#[case("-3!")]
#[case("3!!")]
#[case("(1 + 2)!")]
#[case("0x1F << 0b10 | 0o7 ^ 5")]
#[case("305 << 2 - 212 + 4 * 5!")]
fn display_round_trips(#[case] src: &str) {
    let first = parse(src);
    let rendered = first.to_string();
    let second = parse(&rendered);
    assert_eq!(first.to_sexpr(), second.to_sexpr(), "rendered as {rendered:?}");
    assert_eq!(eval(src).to_bits(), eval(&rendered).to_bits());
}
