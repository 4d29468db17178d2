//! Lexer errors.

use thiserror::Error;

/// Errors that prevent lexing from starting.
///
/// Malformed class names are not errors: any non-whitespace text is a
/// class name as far as the lexer is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Byte offsets in the source would not fit in a `u32` span.
    #[error("source is {len} bytes, but spans are limited to {max} bytes", max = u32::MAX)]
    SourceTooLarge { len: usize },
}
