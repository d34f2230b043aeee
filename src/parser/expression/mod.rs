//! Pratt parser for arithmetic expressions.
//!
//! Provides [`parse_expression`], a hand-rolled precedence-climbing parser.
//! The implementation is split across submodules: [`pratt`] hosts the parser
//! and its entry points, [`prefix`] handles literals, groups and prefix
//! operators, and [`infix`] folds infix and postfix operators. All operator
//! decisions go through the table in [`crate::parser::precedence`].

mod infix;
mod pratt;
mod prefix;

pub use pratt::{MAX_NESTING, Parser, parse_complete_expression, parse_expression};
