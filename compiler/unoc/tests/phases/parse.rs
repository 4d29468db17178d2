//! Parser tests driven through `parse_source`.

use pretty_assertions::assert_eq;
use unoc::{parse_source, reparse, ErrorCode, NodeKind};

#[test]
fn test_parse_class_attribute() {
    let source = "flex items-center gap-2";
    let result = parse_source(source).unwrap();

    assert_eq!(result.class_values().collect::<Vec<_>>(), vec![source]);
    assert_eq!(
        result.class_names().collect::<Vec<_>>(),
        vec!["flex", "items-center", "gap-2"]
    );
    assert!(result.errors().is_empty());
    assert_eq!(result.parse().matched, result.tokens().len());
}

#[test]
fn test_parse_dump() {
    let result = parse_source("m-1 p-2").unwrap();
    assert_eq!(
        result.dump(),
        "\
FILE@0..7
  CLASS_VALUE@0..7
    CLASS_NAME@0..3 \"m-1\"
    WHITESPACE@3..4 \" \"
    CLASS_NAME@4..7 \"p-2\"
"
    );
}

#[test]
fn test_parse_empty_source() {
    let result = parse_source("").unwrap();
    assert_eq!(result.root().kind(), NodeKind::File);
    assert_eq!(result.root().children().count(), 0);
    assert_eq!(result.class_values().count(), 0);
    assert!(result.errors().is_empty());
}

#[test]
fn test_parse_whitespace_only() {
    let result = parse_source("   ").unwrap();
    assert_eq!(result.class_values().count(), 0);
    assert_eq!(result.root().tokens().count(), 1);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].code, ErrorCode::E1001);
}

#[test]
fn test_parse_trailing_newline() {
    let source = "text-lg font-bold\n";
    let result = parse_source(source).unwrap();
    assert_eq!(
        result.class_values().collect::<Vec<_>>(),
        vec!["text-lg font-bold"]
    );

    let err = &result.errors()[0];
    assert_eq!(
        err.message,
        "expected CLASS_NAME, found WHITESPACE".to_string()
    );
    assert_eq!(&source[err.span.to_range()], "\n");
    assert_eq!(result.root().span().to_range(), 0..source.len());
}

#[test]
fn test_parse_indented_attribute() {
    // Leading whitespace stops the root loop before any class value.
    let source = "\n    flex\n    grid\n";
    let result = parse_source(source).unwrap();
    assert_eq!(result.parse().matched, 0);
    assert_eq!(result.class_values().count(), 0);
    assert_eq!(result.class_names().collect::<Vec<_>>(), vec!["flex", "grid"]);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].span.to_range(), 0..source.len());
}

#[test]
fn test_reparse_matches_original() {
    for source in ["", "a", "a b", " a", "a ", "a  b c", "x\ty\nz "] {
        let result = parse_source(source).unwrap();
        assert_eq!(&reparse(&result.root()), result.parse(), "source: {source:?}");
    }
}

#[test]
fn test_root_text_is_source() {
    let source = "  before:content-['→']\tgrid ";
    let result = parse_source(source).unwrap();
    assert_eq!(result.root().text(), source);
    assert_eq!(result.source(), source);
}

#[test]
fn test_error_display() {
    let result = parse_source("ring ").unwrap();
    assert_eq!(
        result.errors()[0].to_string(),
        "E1001: expected CLASS_NAME, found WHITESPACE at 4..5"
    );
}
