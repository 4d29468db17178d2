//! Token types shared by the lexer and the parser.
//!
//! The class-value language has exactly two token kinds, so tokens are
//! small `Copy` values: a kind plus the span of source text it covers.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Source text covered by this token.
    ///
    /// Returns an empty string if the span does not lie on character
    /// boundaries inside `source`, e.g. when the token was built by hand
    /// against a different buffer.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // Span (8 bytes) + one-byte kind, padded to the span's alignment.
    crate::static_assert_size!(Token, 12);
    crate::static_assert_size!(TokenKind, 1);
}
