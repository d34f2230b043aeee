//! Token kinds for arithmetic expressions.
//!
//! `SyntaxKind` enumerates every token the tokenizer can produce together
//! with the two sentinel kinds used by the token stream. Operator behaviour
//! is not stored on the enum itself: the accessors below delegate to the
//! table in [`crate::parser::precedence`] so that precedence, fixity and
//! associativity are defined in exactly one place.

use phf::phf_map;

use crate::parser::precedence::{Associativity, Fixity, OperatorInfo, operator_info};

/// Every token kind that can appear in an expression token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(non_camel_case_types, reason = "token kinds use the T_ naming scheme")]
pub enum SyntaxKind {
    // Sentinels
    T_NONE,
    T_EOF,
    // Literals
    T_NUMBER,
    // Operators
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_PERCENT,
    T_AMP,
    T_PIPE,
    T_TILDE,
    T_CARET,
    T_SHL,
    T_SHR,
    T_BANG,
    // Delimiters
    T_LPAREN,
    T_RPAREN,
}

/// Maps operator and delimiter symbols to their `SyntaxKind`.
///
/// This is the reverse of [`SyntaxKind::symbol`] and is used when building
/// tokens from their printed form.
static SYMBOLS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "+" => SyntaxKind::T_PLUS,
    "-" => SyntaxKind::T_MINUS,
    "*" => SyntaxKind::T_STAR,
    "/" => SyntaxKind::T_SLASH,
    "%" => SyntaxKind::T_PERCENT,
    "&" => SyntaxKind::T_AMP,
    "|" => SyntaxKind::T_PIPE,
    "~" => SyntaxKind::T_TILDE,
    "^" => SyntaxKind::T_CARET,
    "<<" => SyntaxKind::T_SHL,
    ">>" => SyntaxKind::T_SHR,
    "!" => SyntaxKind::T_BANG,
    "(" => SyntaxKind::T_LPAREN,
    ")" => SyntaxKind::T_RPAREN,
};

impl SyntaxKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 17] = [
        Self::T_NONE,
        Self::T_EOF,
        Self::T_NUMBER,
        Self::T_PLUS,
        Self::T_MINUS,
        Self::T_STAR,
        Self::T_SLASH,
        Self::T_PERCENT,
        Self::T_AMP,
        Self::T_PIPE,
        Self::T_TILDE,
        Self::T_CARET,
        Self::T_SHL,
        Self::T_SHR,
        Self::T_BANG,
        Self::T_LPAREN,
        Self::T_RPAREN,
    ];

    /// Look up the kind printed as `symbol`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pratt_calc::SyntaxKind;
    ///
    /// assert_eq!(SyntaxKind::from_symbol("<<"), Some(SyntaxKind::T_SHL));
    /// assert_eq!(SyntaxKind::from_symbol("<"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SYMBOLS.get(symbol).copied()
    }

    fn info(self) -> &'static OperatorInfo {
        operator_info(self)
    }

    /// Display symbol, `None` for literals and sentinels.
    #[must_use]
    pub fn symbol(self) -> Option<&'static str> {
        self.info().symbol
    }

    /// Binding precedence; higher binds tighter.
    #[must_use]
    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    #[must_use]
    pub fn is_prefix(self) -> bool {
        self.info().supports(Fixity::Prefix)
    }

    #[must_use]
    pub fn is_infix(self) -> bool {
        self.info().supports(Fixity::Infix)
    }

    #[must_use]
    pub fn is_postfix(self) -> bool {
        self.info().supports(Fixity::Postfix)
    }

    #[must_use]
    pub fn is_value(self) -> bool {
        self.info().value
    }

    #[must_use]
    pub fn is_left_associative(self) -> bool {
        self.info().associativity == Associativity::Left
    }

    #[must_use]
    pub fn is_right_associative(self) -> bool {
        self.info().associativity == Associativity::Right
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.symbol()) {
            (_, Some(symbol)) => write!(f, "'{symbol}'"),
            (Self::T_NUMBER, None) => f.write_str("number"),
            (Self::T_EOF, None) => f.write_str("end of input"),
            (_, None) => f.write_str("nothing"),
        }
    }
}
