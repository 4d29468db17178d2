//! `UnoCSS` class-value front end.
//!
//! Runs the two phases over a source string and keeps their results
//! together:
//!
//! ```text
//! &str ──► uno_lexer::lex ──► TokenList ──► uno_parse::parse ──► Parse
//! ```
//!
//! # Debugging
//!
//! Enable tracing with environment variables:
//! - `RUST_LOG=uno_parse=debug` - Parse summaries
//! - `RUST_LOG=uno_parse=trace` - Every consumed token and node boundary

use std::sync::Once;

use tracing::debug;

pub use uno_ir::{
    NodeKind, Span, SyntaxElement, SyntaxNode, SyntaxToken, Token, TokenKind, TokenList, Visitor,
};
pub use uno_lexer::{lex, LexError};
pub use uno_parse::{parse, ErrorCode, Parse, ParseError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// A parsed source string together with its tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceParse {
    source: String,
    tokens: TokenList,
    parse: Parse,
}

impl SourceParse {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// The `FILE` root.
    pub fn root(&self) -> SyntaxNode {
        self.parse.root()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.parse.errors
    }

    /// Source text of each `CLASS_VALUE`, in order.
    pub fn class_values(&self) -> impl Iterator<Item = &str> {
        self.parse
            .class_values()
            .map(move |node| self.slice(node.span()))
    }

    /// Source text of each class name in the file, including any in
    /// trailing tokens no class value matched.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.parse
            .root()
            .class_names()
            .map(move |token| self.slice(token.span()))
    }

    /// Indented tree dump, see [`SyntaxNode::dump`].
    pub fn dump(&self) -> String {
        self.parse.root().dump()
    }

    fn slice(&self, span: Span) -> &str {
        self.source.get(span.to_range()).unwrap_or_default()
    }
}

/// Lex and parse `source`.
///
/// # Errors
///
/// Fails only when `source` is too long for `u32` spans. Grammar problems
/// are reported through [`SourceParse::errors`] instead.
pub fn parse_source(source: &str) -> Result<SourceParse, LexError> {
    let tokens = lex(source)?;
    let parse = parse(&tokens, source);
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        errors = parse.errors.len(),
        "parsed source"
    );
    Ok(SourceParse {
        source: source.to_owned(),
        tokens,
        parse,
    })
}

/// Parse the leaves of an existing tree again.
///
/// For any tree this crate produced, the result equals the original parse.
pub fn reparse(root: &SyntaxNode) -> Parse {
    let tokens: TokenList = root.leaves().map(|token| token.to_token()).collect();
    parse(&tokens, &root.text())
}
