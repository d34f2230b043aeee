//! Operand parsing (null denotation): literals, groups and prefix operators.

use crate::SyntaxKind;
use crate::parser::ParseError;
use crate::parser::ast::{Expr, NumberLiteral};
use crate::parser::precedence::operator_info;

use super::Parser;

impl Parser<'_> {
    /// Consume the token that starts an operand and build its node.
    ///
    /// Returns `Ok(None)` when the stream is already at end of input.
    pub(super) fn parse_prefix(&mut self) -> Result<Option<Expr>, ParseError> {
        let token = self.ts.next_token()?;
        match token.kind {
            SyntaxKind::T_EOF => Ok(None),
            SyntaxKind::T_NUMBER => Ok(Some(Expr::Value(NumberLiteral::from_token(&token)))),
            SyntaxKind::T_LPAREN => self.parse_group().map(Some),
            kind if kind.is_prefix() => {
                let bp = operator_info(kind).operand_binding_power();
                let operand = self.parse_operand(&token, bp)?;
                Ok(Some(Expr::Prefix {
                    op: token,
                    expr: Box::new(operand),
                }))
            }
            _ => Err(ParseError::UnexpectedToken { found: token }),
        }
    }

    /// Parse the inside of `( ... )`; the opening paren is already consumed.
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let open = self.ts.token().clone();
        let inner = self.parse_expr(0)?;
        self.ts.expect(SyntaxKind::T_RPAREN)?;
        inner.ok_or(ParseError::MissingOperand { operator: open })
    }
}
