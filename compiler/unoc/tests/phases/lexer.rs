//! Lexer tests over real class attribute values.

use pretty_assertions::assert_eq;
use unoc::{lex, Span, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_variants_and_shortcuts() {
    let source = "hover:text-red-500 md:(p-4 m-2) !important [&>*]:mt-1";
    let tokens = lex(source).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text(source)).collect();
    assert_eq!(
        texts,
        vec![
            "hover:text-red-500",
            " ",
            "md:(p-4",
            " ",
            "m-2)",
            " ",
            "!important",
            " ",
            "[&>*]:mt-1",
        ]
    );
}

#[test]
fn test_lex_mixed_whitespace() {
    use TokenKind::{ClassName as N, Whitespace as W};
    assert_eq!(kinds("\n  flex\r\n\tgrid  "), vec![W, N, W, N, W]);
}

#[test]
fn test_lex_non_ascii_names() {
    let source = "before:content-['→'] 日本";
    let tokens = lex(source).unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text(source), "before:content-['→']");
    assert_eq!(tokens[2].text(source), "日本");
    assert_eq!(tokens[2].span.end as usize, source.len());
}

#[test]
fn test_lex_spans_tile_source() {
    let source = " a  bb   ccc ";
    let tokens = lex(source).unwrap();
    let mut end = 0;
    for token in &tokens {
        assert_eq!(token.span.start, end);
        end = token.span.end;
    }
    assert_eq!(end as usize, source.len());
    assert_eq!(tokens[0].span, Span::new(0, 1));
}
