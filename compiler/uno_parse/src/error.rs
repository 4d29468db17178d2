//! Parse diagnostics.
//!
//! Parsing never fails. Tokens the grammar could not place are still kept
//! in the tree, and a diagnostic describing them is recorded alongside.

use std::fmt;

use thiserror::Error;
use uno_ir::Span;

/// Stable codes for parser diagnostics.
///
/// Format: E#### where the first digit indicates the phase (1 = parser).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected token: input left over after the last class value.
    E1001,
}

impl ErrorCode {
    /// Short description of what the code means.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse diagnostic with an error code.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{code}: {message} at {span}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }
}
