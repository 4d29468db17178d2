//! Syntax tree visitor.
//!
//! External tooling traverses parsed trees through this trait instead of
//! matching on node internals.
//!
//! # Design
//!
//! `SyntaxNode::accept` matches on the node kind and calls the
//! kind-specific `visit_*` method. Default implementations call
//! [`walk_node`], which visits the children in source order. Override
//! `visit_*` methods to add behavior at specific nodes, and call
//! `walk_node` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountClassNames {
//!     count: usize,
//! }
//!
//! impl Visitor for CountClassNames {
//!     fn visit_token(&mut self, token: &SyntaxToken) {
//!         if token.kind() == TokenKind::ClassName {
//!             self.count += 1;
//!         }
//!     }
//! }
//! ```

use std::fmt::Write;

use super::{SyntaxElement, SyntaxNode, SyntaxToken};

/// Syntax tree visitor trait.
///
/// The visitor can mutate its own state during traversal.
/// The tree itself remains immutable.
pub trait Visitor {
    /// Visit the root `FILE` node.
    fn visit_file(&mut self, node: &SyntaxNode) {
        walk_node(self, node);
    }

    /// Visit a `CLASS_VALUE` node.
    fn visit_class_value(&mut self, node: &SyntaxNode) {
        walk_node(self, node);
    }

    /// Visit a token leaf.
    fn visit_token(&mut self, token: &SyntaxToken) {
        let _ = token;
    }
}

/// Visit every child of `node` in source order.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &SyntaxNode) {
    for child in node.children() {
        walk_element(visitor, &child);
    }
}

/// Visit a single child element.
pub fn walk_element<V: Visitor + ?Sized>(visitor: &mut V, element: &SyntaxElement) {
    match element {
        SyntaxElement::Node(node) => node.accept(visitor),
        SyntaxElement::Token(token) => visitor.visit_token(token),
    }
}

/// Renders a tree as indented `KIND@span` lines.
pub(crate) struct TreeDump {
    depth: usize,
    out: String,
}

impl TreeDump {
    pub(crate) fn new() -> Self {
        TreeDump {
            depth: 0,
            out: String::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn node(&mut self, node: &SyntaxNode) {
        let indent = self.depth * 2;
        // Writing into a String cannot fail.
        let _ = writeln!(
            self.out,
            "{:indent$}{}@{}",
            "",
            node.kind().display_name(),
            node.span()
        );
        self.depth += 1;
        walk_node(self, node);
        self.depth -= 1;
    }
}

impl Visitor for TreeDump {
    fn visit_file(&mut self, node: &SyntaxNode) {
        self.node(node);
    }

    fn visit_class_value(&mut self, node: &SyntaxNode) {
        self.node(node);
    }

    fn visit_token(&mut self, token: &SyntaxToken) {
        let indent = self.depth * 2;
        let _ = writeln!(
            self.out,
            "{:indent$}{}@{} {:?}",
            "",
            token.kind().display_name(),
            token.span(),
            token.text()
        );
    }
}
