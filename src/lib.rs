//! Library crate for pratt-calc.
//!
//! Tokenizes arithmetic expressions, parses them with a Pratt parser driven
//! by a static operator table and evaluates the resulting tree.

#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod language;
pub mod parser;
pub mod token;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::{Error, calculate};
pub use evaluator::{EvalError, evaluate};
pub use language::SyntaxKind;
pub use parser::ast::{self, Expr};
pub use parser::{ParseError, parse_complete_expression, parse_expression};
pub use token::{Radix, Span, Token};
pub use tokenizer::{LexError, Tokenizer, tokenize};
