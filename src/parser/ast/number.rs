//! Numeric literal nodes.

use crate::{Radix, Token};

/// Numeric literal as written in the source.
///
/// The radix is captured by the tokenizer so evaluation does not need to
/// re-detect it from the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    /// Original source text, including any radix prefix and `_` separators.
    pub raw: String,
    pub radix: Radix,
}

impl NumberLiteral {
    #[must_use]
    pub fn new(raw: impl Into<String>, radix: Radix) -> Self {
        Self {
            raw: raw.into(),
            radix,
        }
    }

    /// Build a literal from a number token.
    #[must_use]
    pub fn from_token(token: &Token) -> Self {
        Self::new(token.text.as_str(), token.radix.unwrap_or(Radix::Decimal))
    }
}
