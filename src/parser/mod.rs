//! Expression parser.
//!
//! [`token_stream::TokenStream`] buffers tokens pulled from the tokenizer and
//! [`expression`] implements the Pratt loop over it. Precedence and fixity
//! come from [`precedence`].

pub mod ast;
pub mod expression;
pub mod precedence;
pub mod token_stream;

mod error;

pub use error::ParseError;
pub use expression::{Parser, parse_complete_expression, parse_expression};

#[cfg(test)]
mod tests;
