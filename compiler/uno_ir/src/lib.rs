//! Uno IR - shared token and syntax tree types.
//!
//! This crate holds the vocabulary the lexer and parser agree on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - `rowan`-backed syntax nodes for parser output
//! - A `Visitor` for external traversal of parsed trees
//!
//! Nothing in here parses. Tokens are produced by an upstream lexer and
//! trees are built by `uno_parse`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod syntax;
mod token;
pub mod visitor;

pub use span::{Span, SpanError};
pub use syntax::{ElementKind, NodeKind, SyntaxElement, SyntaxNode, SyntaxToken, UnoLanguage};
pub use token::{Token, TokenKind, TokenList};
pub use visitor::Visitor;
