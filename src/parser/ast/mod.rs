//! Expression tree produced by the Pratt parser.

mod expr;
mod number;

pub use expr::Expr;
pub use number::NumberLiteral;
