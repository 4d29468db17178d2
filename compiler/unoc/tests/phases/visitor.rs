//! Tests for tree traversal (`uno_ir::visitor`).

use pretty_assertions::assert_eq;
use uno_ir::visitor::walk_node;
use unoc::{parse_source, SyntaxNode, SyntaxToken, TokenKind, Visitor};

/// Visitor that collects the text of every class name.
#[derive(Default)]
struct ClassNameCollector {
    names: Vec<String>,
}

impl Visitor for ClassNameCollector {
    fn visit_token(&mut self, token: &SyntaxToken) {
        if token.kind() == TokenKind::ClassName {
            self.names.push(token.text().to_owned());
        }
    }
}

/// Visitor that records which nodes it entered, without descending into
/// class values.
#[derive(Default)]
struct NodeRecorder {
    files: usize,
    class_values: usize,
    tokens: usize,
}

impl Visitor for NodeRecorder {
    fn visit_file(&mut self, node: &SyntaxNode) {
        self.files += 1;
        walk_node(self, node);
    }

    fn visit_class_value(&mut self, _node: &SyntaxNode) {
        self.class_values += 1;
    }

    fn visit_token(&mut self, _token: &SyntaxToken) {
        self.tokens += 1;
    }
}

#[test]
fn test_collect_class_names() {
    let result = parse_source("flex gap-2 ").unwrap();
    let mut collector = ClassNameCollector::default();
    result.root().accept(&mut collector);
    assert_eq!(collector.names, vec!["flex", "gap-2"]);
}

#[test]
fn test_override_stops_descent() {
    // One class value, then a trailing whitespace token on the root.
    let result = parse_source("a b ").unwrap();
    let mut recorder = NodeRecorder::default();
    result.root().accept(&mut recorder);
    assert_eq!(recorder.files, 1);
    assert_eq!(recorder.class_values, 1);
    assert_eq!(recorder.tokens, 1);
}

#[test]
fn test_default_visitor_reaches_every_leaf() {
    struct CountAll(usize);
    impl Visitor for CountAll {
        fn visit_token(&mut self, _token: &SyntaxToken) {
            self.0 += 1;
        }
    }

    let result = parse_source(" a b  c ").unwrap();
    let mut count = CountAll(0);
    result.root().accept(&mut count);
    assert_eq!(count.0, result.tokens().len());
}
