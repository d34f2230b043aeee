//! Syntax errors reported by the expression parser.

use thiserror::Error;

use crate::tokenizer::LexError;
use crate::{Span, SyntaxKind, Token};

/// Errors that abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Scanning failed while the parser was pulling tokens.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A token that cannot start an operand.
    #[error("unexpected token {found} at line {}, column {}", found.line, found.column)]
    UnexpectedToken { found: Token },
    /// A specific kind was required, e.g. the `)` closing a group.
    #[error("expected {expected}, found {found} at line {}, column {}", found.line, found.column)]
    Expected { expected: SyntaxKind, found: Token },
    /// An operator reached end of input before its operand.
    #[error("missing operand for {operator} at line {}, column {}", operator.line, operator.column)]
    MissingOperand { operator: Token },
    /// Operands nested past [`MAX_NESTING`](crate::parser::expression::MAX_NESTING).
    #[error("expression nested deeper than {limit} levels at {found}, line {}, column {}", found.line, found.column)]
    NestingTooDeep { found: Token, limit: usize },
    /// Input continued after a complete expression.
    #[error("unexpected trailing token {found} at line {}, column {}", found.line, found.column)]
    TrailingToken { found: Token },
}

impl ParseError {
    /// Byte range the error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Lex(err) => err.span().clone(),
            Self::UnexpectedToken { found }
            | Self::Expected { found, .. }
            | Self::TrailingToken { found }
            | Self::NestingTooDeep { found, .. } => found.span.clone(),
            Self::MissingOperand { operator } => operator.span.clone(),
        }
    }
}
