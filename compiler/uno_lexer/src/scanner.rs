//! Byte-level scanner producing class-value tokens.
//!
//! Whitespace bytes are all ASCII, so splitting on them never cuts a
//! multi-byte UTF-8 character: every token span lies on `char` boundaries.

use uno_ir::{Span, Token, TokenKind};

use crate::LexError;

/// Incremental scanner over a source string.
///
/// Yields one token per maximal run of whitespace or non-whitespace bytes.
/// Adjacent tokens therefore always differ in kind.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: u32,
    len: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        let len = u32::try_from(source.len())
            .map_err(|_| LexError::SourceTooLarge { len: source.len() })?;
        Ok(Scanner {
            bytes: source.as_bytes(),
            pos: 0,
            len,
        })
    }

    #[inline]
    fn current(&self) -> Option<u8> {
        self.bytes.get(self.pos as usize).copied()
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let first = self.current()?;
        let kind = if first.is_ascii_whitespace() {
            self.eat_while(|b| b.is_ascii_whitespace());
            TokenKind::Whitespace
        } else {
            self.eat_while(|b| !b.is_ascii_whitespace());
            TokenKind::ClassName
        };
        Some(Token::new(kind, Span::new(start, self.pos)))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.pos) as usize;
        (usize::from(remaining > 0), Some(remaining))
    }
}
