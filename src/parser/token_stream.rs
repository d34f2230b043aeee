//! Lookahead buffer over the tokenizer.
//!
//! [`TokenStream`] turns the one-shot [`Tokenizer`] into a forward cursor
//! with arbitrary lookahead. Tokens that were peeked but not yet consumed are
//! queued and handed out in order by [`TokenStream::next_token`].
//!
//! ```
//! use pratt_calc::SyntaxKind;
//! use pratt_calc::parser::token_stream::TokenStream;
//!
//! # fn main() -> Result<(), pratt_calc::LexError> {
//! let mut stream = TokenStream::new("1 + 2");
//! assert_eq!(stream.token_at(2)?.kind, SyntaxKind::T_PLUS);
//! assert_eq!(stream.next_token()?.kind, SyntaxKind::T_NUMBER);
//! assert_eq!(stream.index(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use crate::tokenizer::{LexError, Tokenizer};
use crate::{SyntaxKind, Token};

use super::ParseError;

pub struct TokenStream<'src> {
    tokenizer: Tokenizer<'src>,
    buffered: VecDeque<Token>,
    previous: Token,
    current: Token,
    index: usize,
}

impl<'src> TokenStream<'src> {
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self::from_tokenizer(Tokenizer::new(src))
    }

    #[must_use]
    pub fn from_tokenizer(tokenizer: Tokenizer<'src>) -> Self {
        Self {
            tokenizer,
            buffered: VecDeque::new(),
            previous: Token::none(),
            current: Token::none(),
            index: 0,
        }
    }

    /// Advance one token and return the new current token.
    ///
    /// # Errors
    /// Propagates scanning errors from the tokenizer.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let next = match self.buffered.pop_front() {
            Some(token) => token,
            None => self.pull()?,
        };
        self.previous = std::mem::replace(&mut self.current, next);
        self.index += 1;
        Ok(self.current.clone())
    }

    /// The most recently consumed token.
    #[must_use]
    pub fn token(&self) -> &Token {
        &self.current
    }

    /// The token `lookahead` positions past the current one.
    ///
    /// `token_at(0)` is the current token. Larger values scan ahead and keep
    /// the scanned tokens buffered until they are consumed.
    ///
    /// # Errors
    /// Propagates scanning errors from the tokenizer.
    pub fn token_at(&mut self, lookahead: usize) -> Result<&Token, LexError> {
        let Some(offset) = lookahead.checked_sub(1) else {
            return Ok(&self.current);
        };
        while self.buffered.len() <= offset {
            let token = self.pull()?;
            self.buffered.push_back(token);
        }
        Ok(self.buffered.get(offset).unwrap_or(&self.current))
    }

    /// Shorthand for `token_at(1)`.
    ///
    /// # Errors
    /// Propagates scanning errors from the tokenizer.
    pub fn peek(&mut self) -> Result<&Token, LexError> {
        self.token_at(1)
    }

    /// The token consumed before the current one.
    #[must_use]
    pub fn previous(&self) -> &Token {
        &self.previous
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Consume one token, requiring it to be of `kind`.
    ///
    /// # Errors
    /// Returns [`ParseError::Expected`] on a kind mismatch, or a wrapped
    /// scanning error.
    pub fn expect(&mut self, kind: SyntaxKind) -> Result<Token, ParseError> {
        let token = self.next_token()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::Expected {
                expected: kind,
                found: token,
            })
        }
    }

    fn pull(&mut self) -> Result<Token, LexError> {
        if self.tokenizer.is_available() {
            self.tokenizer.read_token()
        } else {
            Ok(self.tokenizer.eof_token())
        }
    }
}
