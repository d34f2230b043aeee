//! Infix and postfix operator handling (left denotation).

use crate::parser::ParseError;
use crate::parser::ast::Expr;
use crate::parser::precedence::operator_info;

use super::pratt::Parser;

impl Parser<'_> {
    /// Extend `lhs` with operators binding tighter than `rbp`.
    pub(super) fn parse_infix(&mut self, mut lhs: Expr, rbp: u8) -> Result<Expr, ParseError> {
        loop {
            let info = operator_info(self.ts.peek()?.kind);
            if rbp >= info.precedence {
                break;
            }
            if info.postfix {
                let op = self.ts.next_token()?;
                lhs = Expr::Postfix {
                    lhs: Box::new(lhs),
                    op,
                };
            } else if info.infix {
                let op = self.ts.next_token()?;
                let rhs = self.parse_operand(&op, info.operand_binding_power())?;
                lhs = Expr::Infix {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                };
            } else {
                break;
            }
        }
        Ok(lhs)
    }
}
