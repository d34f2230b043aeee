//! Operator table for arithmetic expressions.
//!
//! This module centralizes precedence, fixity and associativity for every
//! [`SyntaxKind`]. The parser and evaluator only ever query this table, so
//! adding an operator means adding a row here rather than touching the
//! parsing loop.

use crate::SyntaxKind;

/// Direction in which an operator groups when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    /// No explicit grouping; infix parsing treats these as left-associative.
    Neither,
}

/// Position an operator takes relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

impl std::fmt::Display for Fixity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Prefix => "prefix",
            Self::Infix => "infix",
            Self::Postfix => "postfix",
        })
    }
}

/// Static metadata for a single token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub symbol: Option<&'static str>,
    pub precedence: u8,
    pub prefix: bool,
    pub infix: bool,
    pub postfix: bool,
    pub value: bool,
    pub associativity: Associativity,
}

impl OperatorInfo {
    const INERT: Self = Self {
        symbol: None,
        precedence: 0,
        prefix: false,
        infix: false,
        postfix: false,
        value: false,
        associativity: Associativity::Neither,
    };

    const fn symbol(symbol: &'static str, precedence: u8) -> Self {
        Self {
            symbol: Some(symbol),
            precedence,
            ..Self::INERT
        }
    }

    const fn value() -> Self {
        Self {
            value: true,
            ..Self::INERT
        }
    }

    const fn prefix(self) -> Self {
        Self {
            prefix: true,
            ..self
        }
    }

    const fn infix(self) -> Self {
        Self {
            infix: true,
            ..self
        }
    }

    const fn postfix(self) -> Self {
        Self {
            postfix: true,
            ..self
        }
    }

    const fn left(self) -> Self {
        Self {
            associativity: Associativity::Left,
            ..self
        }
    }

    const fn right(self) -> Self {
        Self {
            associativity: Associativity::Right,
            ..self
        }
    }

    /// Whether the operator may appear in `fixity` position.
    #[must_use]
    pub const fn supports(&self, fixity: Fixity) -> bool {
        match fixity {
            Fixity::Prefix => self.prefix,
            Fixity::Infix => self.infix,
            Fixity::Postfix => self.postfix,
        }
    }

    /// Binding power used when parsing the operand that follows this
    /// operator, either as a prefix operand or as an infix right-hand side.
    #[must_use]
    pub const fn operand_binding_power(&self) -> u8 {
        match self.associativity {
            Associativity::Right => self.precedence.saturating_sub(1),
            Associativity::Left | Associativity::Neither => self.precedence,
        }
    }
}

const OPERATOR_TABLE: &[(SyntaxKind, OperatorInfo)] = &[
    (SyntaxKind::T_NONE, OperatorInfo::INERT),
    (SyntaxKind::T_EOF, OperatorInfo::INERT),
    (SyntaxKind::T_NUMBER, OperatorInfo::value()),
    (SyntaxKind::T_BANG, OperatorInfo::symbol("!", 100).postfix().right()),
    (SyntaxKind::T_STAR, OperatorInfo::symbol("*", 90).infix()),
    (SyntaxKind::T_SLASH, OperatorInfo::symbol("/", 90).infix()),
    (SyntaxKind::T_PERCENT, OperatorInfo::symbol("%", 90).infix()),
    (
        SyntaxKind::T_PLUS,
        OperatorInfo::symbol("+", 80).prefix().infix().left(),
    ),
    (
        SyntaxKind::T_MINUS,
        OperatorInfo::symbol("-", 80).prefix().infix().left(),
    ),
    (SyntaxKind::T_SHL, OperatorInfo::symbol("<<", 70).infix()),
    (SyntaxKind::T_SHR, OperatorInfo::symbol(">>", 70).infix()),
    (SyntaxKind::T_AMP, OperatorInfo::symbol("&", 60).infix()),
    (SyntaxKind::T_CARET, OperatorInfo::symbol("^", 55).infix()),
    (SyntaxKind::T_PIPE, OperatorInfo::symbol("|", 50).infix()),
    (SyntaxKind::T_TILDE, OperatorInfo::symbol("~", 40).prefix().left()),
    (SyntaxKind::T_LPAREN, OperatorInfo::symbol("(", 0)),
    (SyntaxKind::T_RPAREN, OperatorInfo::symbol(")", 0)),
];

/// Lookup the table row for `kind`.
///
/// Kinds without a row are inert: precedence 0 and no fixity.
#[must_use]
pub fn operator_info(kind: SyntaxKind) -> &'static OperatorInfo {
    OPERATOR_TABLE
        .iter()
        .find_map(|(k, info)| (kind == *k).then_some(info))
        .unwrap_or(&OperatorInfo::INERT)
}
