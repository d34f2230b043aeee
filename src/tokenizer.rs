//! Lexical analysis for arithmetic expressions.
//!
//! [`Tokenizer`] converts raw source text into a lazy sequence of
//! [`Token`]s. Recognition is delegated to the `logos` crate; this module
//! adds line/column tracking, radix detection for numeric literals and the
//! single end-of-input token the parser relies on. Scanning is fail-fast:
//! the first unrecognised character ends the stream with a [`LexError`].

use logos::Logos;
use phf::phf_map;
use thiserror::Error;

use crate::SyntaxKind;
use crate::token::{Radix, Span, Token};

/// Errors raised while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unrecognised character '{found}' at line {line}, column {column}")]
    UnexpectedChar {
        found: char,
        span: Span,
        line: usize,
        column: usize,
    },
    /// `<` or `>` without its doubled partner.
    #[error("expected '{expected}' after '{found}' at line {line}, column {column}")]
    MalformedOperator {
        found: char,
        expected: char,
        span: Span,
        line: usize,
        column: usize,
    },
}

impl LexError {
    /// Byte range of the offending input.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedChar { span, .. } | Self::MalformedOperator { span, .. } => span,
        }
    }
}

/// Line bookkeeping carried by the `logos` lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineTracker {
    line: usize,
    line_start: usize,
}

impl Default for LineTracker {
    fn default() -> Self {
        Self {
            line: 1,
            line_start: 0,
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LineTracker)]
enum RawToken {
    #[regex(r"[ \t\x0C]+", logos::skip)]
    Whitespace,
    #[regex(r"\r\n|\r|\n", newline)]
    Newline,
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?", literal_radix)]
    #[regex(r"0[xX][0-9a-fA-F_]*(\.[0-9a-fA-F_]*)?", literal_radix)]
    #[regex(r"0[oO][0-7_]*(\.[0-7_]*)?", literal_radix)]
    #[regex(r"0[bB][01_]*(\.[01_]*)?", literal_radix)]
    Number(Radix),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Radix markers accepted after a leading `0`.
static RADIX_MARKERS: phf::Map<char, Radix> = phf_map! {
    'x' => Radix::Hexadecimal,
    'X' => Radix::Hexadecimal,
    'o' => Radix::Octal,
    'O' => Radix::Octal,
    'b' => Radix::Binary,
    'B' => Radix::Binary,
};

fn literal_radix(lex: &mut logos::Lexer<RawToken>) -> Radix {
    let mut chars = lex.slice().chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(marker)) => RADIX_MARKERS
            .get(&marker)
            .copied()
            .unwrap_or(Radix::Decimal),
        _ => Radix::Decimal,
    }
}

fn newline(lex: &mut logos::Lexer<RawToken>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

impl RawToken {
    /// Kind of a significant token; `None` for trivia.
    fn kind(self) -> Option<SyntaxKind> {
        let kind = match self {
            Self::Number(_) => SyntaxKind::T_NUMBER,
            Self::Plus => SyntaxKind::T_PLUS,
            Self::Minus => SyntaxKind::T_MINUS,
            Self::Star => SyntaxKind::T_STAR,
            Self::Slash => SyntaxKind::T_SLASH,
            Self::Percent => SyntaxKind::T_PERCENT,
            Self::Amp => SyntaxKind::T_AMP,
            Self::Pipe => SyntaxKind::T_PIPE,
            Self::Tilde => SyntaxKind::T_TILDE,
            Self::Caret => SyntaxKind::T_CARET,
            Self::Shl => SyntaxKind::T_SHL,
            Self::Shr => SyntaxKind::T_SHR,
            Self::Bang => SyntaxKind::T_BANG,
            Self::LParen => SyntaxKind::T_LPAREN,
            Self::RParen => SyntaxKind::T_RPAREN,
            Self::Whitespace | Self::Newline => return None,
        };
        Some(kind)
    }
}

/// Lazy scanner over a single source string.
///
/// Produces tokens until exactly one [`SyntaxKind::T_EOF`] token has been
/// returned or an error occurs; [`Tokenizer::is_available`] reports whether
/// another call to [`Tokenizer::read_token`] is meaningful.
pub struct Tokenizer<'src> {
    src: &'src str,
    lexer: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            lexer: RawToken::lexer(src),
            finished: false,
        }
    }

    /// Whether another token (possibly the end-of-input token) can be read.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.finished
    }

    /// Scan the next token.
    ///
    /// Once input is exhausted a single end-of-input token is returned and
    /// the tokenizer becomes unavailable. Calling again after that keeps
    /// returning end-of-input tokens.
    ///
    /// # Errors
    /// Returns a [`LexError`] for characters that start no token, including a
    /// lone `<` or `>`. The tokenizer is unavailable afterwards.
    pub fn read_token(&mut self) -> Result<Token, LexError> {
        loop {
            let Some(result) = self.lexer.next() else {
                self.finished = true;
                return Ok(self.eof_token());
            };
            let span = self.lexer.span();
            let (line, column) = self.line_column(span.start);
            let Ok(raw) = result else {
                self.finished = true;
                let err = self.lex_error(span, line, column);
                log::debug!("tokenizer stopped: {err}");
                return Err(err);
            };
            let Some(kind) = raw.kind() else {
                continue;
            };
            let radix = match raw {
                RawToken::Number(radix) => Some(radix),
                _ => None,
            };
            let token = Token {
                kind,
                text: self.lexer.slice().to_string(),
                span,
                line,
                column,
                radix,
            };
            log::trace!("token {:?} {:?} at {line}:{column}", token.kind, token.text);
            return Ok(token);
        }
    }

    /// End-of-input token positioned just past the source text.
    #[must_use]
    pub fn eof_token(&self) -> Token {
        let end = self.src.len();
        let (line, column) = self.line_column(end);
        Token::eof(end, line, column)
    }

    fn line_column(&self, offset: usize) -> (usize, usize) {
        let LineTracker { line, line_start } = self.lexer.extras;
        let column = self
            .src
            .get(line_start..offset)
            .map_or(0, |text| text.chars().count());
        (line, column + 1)
    }

    fn lex_error(&self, span: Span, line: usize, column: usize) -> LexError {
        let found = self
            .src
            .get(span.start..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_default();
        match found {
            '<' | '>' => LexError::MalformedOperator {
                found,
                expected: found,
                span,
                line,
                column,
            },
            _ => LexError::UnexpectedChar {
                found,
                span,
                line,
                column,
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.is_available().then(|| self.read_token())
    }
}

/// Tokenise `src` up to and including the end-of-input token.
///
/// # Examples
///
/// ```rust
/// use pratt_calc::{SyntaxKind, tokenize};
///
/// let tokens = tokenize("0x1F << 2").unwrap_or_default();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [SyntaxKind::T_NUMBER, SyntaxKind::T_SHL, SyntaxKind::T_NUMBER, SyntaxKind::T_EOF]
/// );
/// ```
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(src).collect()
}
