//! Tokens produced by the tokenizer.
//!
//! A [`Token`] records its kind, the exact source text it covers and where
//! that text starts. Number tokens additionally carry the [`Radix`] detected
//! while scanning, so later stages never have to re-derive it from the text.

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

/// Numeric base of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b` / `0B` prefix.
    Binary,
    /// `0o` / `0O` prefix.
    Octal,
    /// No prefix.
    Decimal,
    /// `0x` / `0X` prefix.
    Hexadecimal,
}

impl Radix {
    /// Numeric base as accepted by `from_str_radix`.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Length in bytes of the prefix marking this radix in source text.
    #[must_use]
    pub const fn prefix_len(self) -> usize {
        match self {
            Self::Decimal => 0,
            Self::Binary | Self::Octal | Self::Hexadecimal => 2,
        }
    }
}

/// A single lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Source text covered by the token; empty for sentinels.
    pub text: String,
    pub span: Span,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
    /// Detected base for [`SyntaxKind::T_NUMBER`] tokens.
    pub radix: Option<Radix>,
}

impl Token {
    /// Placeholder used before any token has been read.
    #[must_use]
    pub fn none() -> Self {
        Self {
            kind: SyntaxKind::T_NONE,
            text: String::new(),
            span: 0..0,
            line: 0,
            column: 0,
            radix: None,
        }
    }

    /// End-of-input marker positioned at `offset`.
    #[must_use]
    pub fn eof(offset: usize, line: usize, column: usize) -> Self {
        Self {
            kind: SyntaxKind::T_EOF,
            text: String::new(),
            span: offset..offset,
            line,
            column,
            radix: None,
        }
    }

    /// Build a token that did not come from source text.
    ///
    /// Operators take their printed symbol as text. Used when assembling
    /// trees by hand.
    #[must_use]
    pub fn synthetic(kind: SyntaxKind) -> Self {
        let text = kind.symbol().unwrap_or_default().to_string();
        Self {
            kind,
            span: 0..text.len(),
            text,
            line: 1,
            column: 1,
            radix: None,
        }
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == SyntaxKind::T_EOF
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SyntaxKind::T_EOF | SyntaxKind::T_NONE => write!(f, "{}", self.kind),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
