//! Lexer for `UnoCSS` class-value strings.
//!
//! Splits a class attribute value such as `"flex hover:bg-red-500  p-4"`
//! into alternating `CLASS_NAME` and `WHITESPACE` tokens. Every byte of the
//! source lands in exactly one token, so the token spans tile the input.
//!
//! Whitespace is the ASCII whitespace set used by HTML class lists
//! (space, tab, line feed, form feed, carriage return). Everything else,
//! including non-ASCII text, belongs to a class name.

mod lex_error;
mod scanner;

pub use lex_error::LexError;
pub use scanner::Scanner;

use uno_ir::TokenList;

/// Lex source text into a token list.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    Ok(Scanner::new(source)?.collect())
}
