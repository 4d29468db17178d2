//! Syntax tree produced by the parser.
//!
//! Trees are stored as `rowan` green trees and read through typed wrappers.
//! The tree is lossless: every token keeps its text, and concatenating the
//! leaves of the root in order gives back the parsed source.
//!
//! ```text
//! FILE
//! ├── CLASS_VALUE
//! │   ├── CLASS_NAME "flex"
//! │   ├── WHITESPACE " "
//! │   └── CLASS_NAME "gap-2"
//! └── ...
//! ```

use std::fmt;

use rowan::{GreenNode, Language, NodeOrToken};

use super::visitor::{TreeDump, Visitor};
use super::{Span, Token, TokenKind};

/// Kinds of structural nodes.
///
/// A closed set: the root is always `File`, and its only node children
/// are `ClassValue`s.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Root of every parse.
    File,
    /// `CLASS_NAME (WHITESPACE CLASS_NAME)*`
    ClassValue,
}

impl NodeKind {
    /// Grammar name of this kind, as it appears in tree dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            NodeKind::File => "FILE",
            NodeKind::ClassValue => "CLASS_VALUE",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of any tree element: a token leaf or a node.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ElementKind {
    Token(TokenKind),
    Node(NodeKind),
}

impl From<TokenKind> for ElementKind {
    fn from(kind: TokenKind) -> Self {
        ElementKind::Token(kind)
    }
}

impl From<NodeKind> for ElementKind {
    fn from(kind: NodeKind) -> Self {
        ElementKind::Node(kind)
    }
}

/// The class-value language, as seen by `rowan`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum UnoLanguage {}

// Raw kind numbering inside green trees.
const RAW_CLASS_NAME: u16 = 0;
const RAW_WHITESPACE: u16 = 1;
const RAW_FILE: u16 = 2;
const RAW_CLASS_VALUE: u16 = 3;

impl Language for UnoLanguage {
    type Kind = ElementKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> ElementKind {
        match raw.0 {
            RAW_CLASS_NAME => ElementKind::Token(TokenKind::ClassName),
            RAW_WHITESPACE => ElementKind::Token(TokenKind::Whitespace),
            RAW_FILE => ElementKind::Node(NodeKind::File),
            RAW_CLASS_VALUE => ElementKind::Node(NodeKind::ClassValue),
            other => unreachable!("raw kind {other} was not produced by kind_to_raw"),
        }
    }

    fn kind_to_raw(kind: ElementKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(match kind {
            ElementKind::Token(TokenKind::ClassName) => RAW_CLASS_NAME,
            ElementKind::Token(TokenKind::Whitespace) => RAW_WHITESPACE,
            ElementKind::Node(NodeKind::File) => RAW_FILE,
            ElementKind::Node(NodeKind::ClassValue) => RAW_CLASS_VALUE,
        })
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        UnoLanguage::kind_to_raw(kind.into())
    }
}

impl From<NodeKind> for rowan::SyntaxKind {
    fn from(kind: NodeKind) -> Self {
        UnoLanguage::kind_to_raw(kind.into())
    }
}

/// A child of a syntax node: either a nested node or a token leaf.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxElement {
    #[inline]
    pub fn span(&self) -> Span {
        match self {
            SyntaxElement::Node(node) => node.span(),
            SyntaxElement::Token(token) => token.span(),
        }
    }

    #[inline]
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    #[inline]
    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Node(_) => None,
            SyntaxElement::Token(token) => Some(token),
        }
    }
}

impl From<rowan::SyntaxElement<UnoLanguage>> for SyntaxElement {
    fn from(element: rowan::SyntaxElement<UnoLanguage>) -> Self {
        match element {
            NodeOrToken::Node(node) => SyntaxElement::Node(SyntaxNode(node)),
            NodeOrToken::Token(token) => SyntaxElement::Token(SyntaxToken(token)),
        }
    }
}

/// A token leaf of a syntax tree.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SyntaxToken(rowan::SyntaxToken<UnoLanguage>);

impl SyntaxToken {
    pub fn kind(&self) -> TokenKind {
        match self.0.kind() {
            ElementKind::Token(kind) => kind,
            ElementKind::Node(kind) => unreachable!("token carries node kind {kind}"),
        }
    }

    pub fn span(&self) -> Span {
        self.0.text_range().into()
    }

    /// Source text of this token.
    pub fn text(&self) -> &str {
        self.0.text()
    }

    /// The token as the lexer would have produced it.
    pub fn to_token(&self) -> Token {
        Token::new(self.kind(), self.span())
    }
}

impl fmt::Debug for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} {:?}", self.kind(), self.span(), self.text())
    }
}

/// A syntax node.
///
/// A cheap handle into a shared tree. Equality is identity: two handles are
/// equal when they point at the same node of the same tree. Compare
/// [`SyntaxNode::green`] for structural equality.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SyntaxNode(rowan::SyntaxNode<UnoLanguage>);

impl SyntaxNode {
    /// Root node of a finished green tree.
    pub fn new_root(green: GreenNode) -> Self {
        SyntaxNode(rowan::SyntaxNode::new_root(green))
    }

    pub fn kind(&self) -> NodeKind {
        match self.0.kind() {
            ElementKind::Node(kind) => kind,
            ElementKind::Token(kind) => unreachable!("node carries token kind {kind}"),
        }
    }

    /// Byte range covered by this node. An empty node covers `start..start`.
    pub fn span(&self) -> Span {
        self.0.text_range().into()
    }

    /// Direct children, nodes and tokens interleaved in source order.
    pub fn children(&self) -> impl Iterator<Item = SyntaxElement> {
        self.0.children_with_tokens().map(SyntaxElement::from)
    }

    /// Direct child nodes.
    pub fn child_nodes(&self) -> impl Iterator<Item = SyntaxNode> {
        self.0.children().map(SyntaxNode)
    }

    /// Direct token children.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .map(SyntaxToken)
    }

    /// Every token under this node, depth first, in source order.
    pub fn leaves(&self) -> impl Iterator<Item = SyntaxToken> {
        self.0
            .descendants_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .map(SyntaxToken)
    }

    /// The `CLASS_NAME` tokens under this node, in source order.
    pub fn class_names(&self) -> impl Iterator<Item = SyntaxToken> {
        self.leaves().filter(|t| t.kind() == TokenKind::ClassName)
    }

    /// Source text covered by this node.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// The underlying green node.
    pub fn green(&self) -> GreenNode {
        self.0.green().into_owned()
    }

    /// Dispatch to the visitor method for this node's kind.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self.kind() {
            NodeKind::File => visitor.visit_file(self),
            NodeKind::ClassValue => visitor.visit_class_value(self),
        }
    }

    /// Indented rendering of the tree, one element per line.
    ///
    /// ```text
    /// FILE@0..10
    ///   CLASS_VALUE@0..10
    ///     CLASS_NAME@0..4 "flex"
    ///     WHITESPACE@4..5 " "
    ///     CLASS_NAME@5..10 "gap-2"
    /// ```
    pub fn dump(&self) -> String {
        let mut dump = TreeDump::new();
        self.accept(&mut dump);
        dump.finish()
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind(), self.span())
    }
}
