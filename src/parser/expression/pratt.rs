//! Core Pratt parser implementation and entry points.
//!
//! This module defines the [`Parser`] struct and the public
//! [`parse_expression`] / [`parse_complete_expression`] functions, which pull
//! tokens lazily from the tokenizer and build expression trees.

use crate::Token;
use crate::parser::ParseError;
use crate::parser::ast::Expr;
use crate::parser::token_stream::TokenStream;

/// Deepest chain of nested operands accepted before parsing gives up.
pub const MAX_NESTING: usize = 128;

/// Precedence-climbing parser over a single token stream.
pub struct Parser<'src> {
    pub(super) ts: TokenStream<'src>,
    depth: usize,
}

/// Parse a source string into an [`Expr`].
///
/// Empty input yields `Ok(None)`. Tokens left over after a complete
/// expression are not inspected; use [`parse_complete_expression`] to reject
/// them.
///
/// # Examples
///
/// ```rust
/// use pratt_calc::parse_expression;
///
/// let expr = parse_expression("2 + 3 * 4").ok().flatten();
/// assert_eq!(expr.map(|e| e.to_sexpr()).as_deref(), Some("(+ 2 (* 3 4))"));
/// ```
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
pub fn parse_expression(src: &str) -> Result<Option<Expr>, ParseError> {
    Parser::new(src).parse()
}

/// Parse a source string, requiring the expression to span all of it.
///
/// # Errors
/// Returns [`ParseError::TrailingToken`] when input continues after the
/// expression, otherwise behaves like [`parse_expression`].
pub fn parse_complete_expression(src: &str) -> Result<Option<Expr>, ParseError> {
    Parser::new(src).parse_complete()
}

impl<'src> Parser<'src> {
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self::from_token_stream(TokenStream::new(src))
    }

    #[must_use]
    pub fn from_token_stream(ts: TokenStream<'src>) -> Self {
        Self { ts, depth: 0 }
    }

    /// Parse one expression from the stream.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered.
    pub fn parse(mut self) -> Result<Option<Expr>, ParseError> {
        self.parse_expr(0).inspect_err(|err| log::debug!("parse failed: {err}"))
    }

    /// Parse one expression and require end of input after it.
    ///
    /// # Errors
    /// As [`Parser::parse`], plus [`ParseError::TrailingToken`].
    pub fn parse_complete(mut self) -> Result<Option<Expr>, ParseError> {
        let expr = self.parse_expr(0)?;
        if expr.is_some() {
            let next = self.ts.next_token()?;
            if !next.is_eof() {
                log::debug!("trailing input after token {}", self.ts.index());
                return Err(ParseError::TrailingToken { found: next });
            }
        }
        Ok(expr)
    }

    pub(super) fn parse_expr(&mut self, rbp: u8) -> Result<Option<Expr>, ParseError> {
        if self.depth >= MAX_NESTING {
            let found = self.ts.peek()?.clone();
            return Err(ParseError::NestingTooDeep {
                found,
                limit: MAX_NESTING,
            });
        }
        self.depth += 1;
        let expr = self.parse_nested(rbp);
        self.depth -= 1;
        expr
    }

    fn parse_nested(&mut self, rbp: u8) -> Result<Option<Expr>, ParseError> {
        let Some(lhs) = self.parse_prefix()? else {
            return Ok(None);
        };
        self.parse_infix(lhs, rbp).map(Some)
    }

    /// Parse the operand following `operator`, which must be present.
    pub(super) fn parse_operand(&mut self, operator: &Token, rbp: u8) -> Result<Expr, ParseError> {
        self.parse_expr(rbp)?
            .ok_or_else(|| ParseError::MissingOperand {
                operator: operator.clone(),
            })
    }
}
