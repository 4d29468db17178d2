//! Token cursor for navigating the token stream.
//!
//! Provides lookahead, consumption and node boundaries. Every consumed token
//! is pushed into a `rowan` green-tree builder as a child of the innermost
//! open node, so the cursor is also the tree builder: rules never touch
//! tokens except through it.
//!
//! Nodes are opened lazily. `open_node` only takes a builder checkpoint;
//! `close_node` with success wraps everything consumed since that
//! checkpoint in a node. A failed close leaves the consumed tokens where
//! they already are, in the enclosing node.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};
use tracing::trace;
use uno_ir::{NodeKind, Token, TokenKind, TokenList};

/// Start of an open node, returned by [`Cursor::open_node`].
///
/// Must be handed back to [`Cursor::close_node`].
#[must_use = "an open node must be closed with `Cursor::close_node`"]
#[derive(Debug)]
pub struct Marker {
    checkpoint: Checkpoint,
    /// Cursor position when the node was opened.
    pos: usize,
}

impl Marker {
    /// Token position at which the node was opened.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// Cursor over a token list.
///
/// Owned by a single parse. The tokens and the source they were lexed
/// from are borrowed immutably. Token spans must tile `source`: each token's
/// text is copied into the tree, and the tree's offsets are recomputed from
/// those texts.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    root: Checkpoint,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        let builder = GreenNodeBuilder::new();
        let root = builder.checkpoint();
        Cursor {
            tokens,
            source,
            pos: 0,
            builder,
            root,
        }
    }

    /// Get the total number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking - compare positions before and after
    /// a rule to determine if tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if every token has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Kind of the current token, or `None` at end of stream.
    #[inline]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_kind_at(0)
    }

    /// Kind of the token `n` places ahead of the current one.
    ///
    /// `peek_kind_at(0)` is the current token. Returns `None` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> Option<TokenKind> {
        self.tokens.kind_at(self.pos + n)
    }

    /// Check if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consume the current token if it has the given kind.
    ///
    /// Returns whether it matched. Nothing changes on a mismatch.
    pub fn consume_if_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.bump_any();
            true
        } else {
            false
        }
    }

    /// Consume a fixed sequence of token kinds, all or nothing.
    ///
    /// Every kind is checked by lookahead before anything is consumed, so a
    /// failed attempt leaves the position exactly where it was. An empty
    /// sequence trivially matches and consumes nothing.
    pub fn consume_sequence_if_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        let matches = kinds
            .iter()
            .enumerate()
            .all(|(i, &kind)| self.peek_kind_at(i) == Some(kind));
        if matches {
            for _ in kinds {
                self.bump_any();
            }
        }
        matches
    }

    /// Consume the current token whatever its kind.
    ///
    /// Returns the consumed token, or `None` at end of stream.
    pub fn bump_any(&mut self) -> Option<Token> {
        let token = *self.tokens.get(self.pos)?;
        trace!(
            pos = self.pos,
            kind = token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        self.builder.token(token.kind.into(), token.text(self.source));
        Some(token)
    }

    /// Open a node starting at the current position.
    pub fn open_node(&mut self) -> Marker {
        Marker {
            checkpoint: self.builder.checkpoint(),
            pos: self.pos,
        }
    }

    /// Close the node opened by `marker`.
    ///
    /// With `success`, the tokens consumed since `marker` become a node of
    /// `kind` inside the enclosing node. Without it, the marker is dropped
    /// and those tokens stay consumed as children of the enclosing node.
    #[allow(clippy::needless_pass_by_value)] // consuming the marker closes it exactly once
    pub fn close_node(&mut self, marker: Marker, kind: NodeKind, success: bool) {
        trace!(
            kind = kind.display_name(),
            start = marker.pos,
            end = self.pos,
            success,
            "close node"
        );
        if success {
            self.builder.start_node_at(marker.checkpoint, kind.into());
            self.builder.finish_node();
        }
    }

    /// Wrap everything consumed in a root node of `kind` and return the
    /// finished green tree.
    pub fn finish(mut self, kind: NodeKind) -> GreenNode {
        self.builder.start_node_at(self.root, kind.into());
        self.builder.finish_node();
        self.builder.finish()
    }
}
