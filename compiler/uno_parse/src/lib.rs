//! Recursive descent parser for `UnoCSS` class values.
//!
//! Turns a flat token stream into a shallow `rowan` syntax tree:
//!
//! ```text
//! file       = classValue* ;
//! classValue = CLASS_NAME (WHITESPACE CLASS_NAME)* ;
//! ```
//!
//! Parsing never fails. Rules either match and consume at least one token,
//! or fail having consumed nothing. Tokens left over when the root loop
//! stops are attached to the root as bare tokens and reported through
//! [`Parse::errors`], so the tree always covers the whole input.

mod cursor;
mod error;
mod grammar;
mod progress;

pub use cursor::{Cursor, Marker};
pub use error::{ErrorCode, ParseError};
pub use progress::Progress;

use rowan::GreenNode;
use tracing::debug;
use uno_ir::{NodeKind, Span, SyntaxNode, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, which were lexed from `source`.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream into a `FILE` tree.
    pub fn parse(mut self) -> Parse {
        let token_count = self.cursor.token_count();
        self.file();
        let matched = self.cursor.position();
        self.attach_unmatched();

        let green = self.cursor.finish(NodeKind::File);
        debug!(
            tokens = token_count,
            matched,
            errors = self.errors.len(),
            "parsed class value file"
        );
        Parse {
            green,
            errors: self.errors,
            matched,
        }
    }

    /// Keep whatever the root loop left behind.
    ///
    /// The grammar has no rule for these tokens, so they are attached to the
    /// root unwrapped and reported once.
    fn attach_unmatched(&mut self) {
        let Some(first) = self.cursor.bump_any() else {
            return;
        };
        let mut span: Span = first.span;
        while let Some(token) = self.cursor.bump_any() {
            span = span.merge(token.span);
        }
        self.errors.push(ParseError::new(
            ErrorCode::E1001,
            format!("expected CLASS_NAME, found {}", first.kind),
            span,
        ));
    }
}

/// Parse result: the green tree plus any diagnostics.
///
/// Equality compares tree structure, so two parses of the same tokens are
/// equal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Parse {
    /// The finished `FILE` tree.
    pub green: GreenNode,
    /// Diagnostics for tokens no rule matched. Never fatal.
    pub errors: Vec<ParseError>,
    /// Number of tokens consumed by grammar rules, from the start of the stream.
    pub matched: usize,
}

impl Parse {
    /// The `FILE` root.
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The `CLASS_VALUE` nodes, in source order.
    pub fn class_values(&self) -> impl Iterator<Item = SyntaxNode> {
        self.root().child_nodes()
    }
}

/// Parse a token list lexed from `source`.
pub fn parse(tokens: &TokenList, source: &str) -> Parse {
    Parser::new(tokens, source).parse()
}
