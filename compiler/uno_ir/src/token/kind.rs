//! Token kinds for the class-value language.

use std::fmt;

/// Token kinds produced by the upstream lexer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A utility class name: `flex`, `hover:bg-red-500`, `[&>*]:p-2`.
    ClassName,
    /// A run of whitespace separating class names.
    Whitespace,
}

impl TokenKind {
    /// Grammar name of this kind, as it appears in tree dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::ClassName => "CLASS_NAME",
            TokenKind::Whitespace => "WHITESPACE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
