//! Grammar rules.
//!
//! ```text
//! file       = classValue* ;
//! classValue = CLASS_NAME (WHITESPACE CLASS_NAME)* ;
//! ```
//!
//! Each rule returns whether it matched. A rule that does not match has
//! consumed nothing; a rule that matches has consumed at least one token.

use tracing::{debug, warn};
use uno_ir::{NodeKind, TokenKind};

use crate::progress::Progress;
use crate::Parser;

/// The repeated tail of a `classValue`: `WHITESPACE CLASS_NAME`.
const CLASS_VALUE_TAIL: [TokenKind; 2] = [TokenKind::Whitespace, TokenKind::ClassName];

impl Parser<'_> {
    /// `file = classValue*`
    ///
    /// Always succeeds, even with no input.
    pub(crate) fn file(&mut self) {
        let count = self.repeat("file", Self::class_value);
        debug!(class_values = count, "file");
    }

    /// `classValue = CLASS_NAME (WHITESPACE CLASS_NAME)*`
    ///
    /// Fails without consuming anything unless the current token is a
    /// `CLASS_NAME`. A `WHITESPACE` not followed by a `CLASS_NAME` ends the
    /// node and is left for the caller.
    pub(crate) fn class_value(&mut self) -> bool {
        if !self.cursor.check(TokenKind::ClassName) {
            return false;
        }
        let marker = self.cursor.open_node();
        let matched = self.cursor.consume_if_kind(TokenKind::ClassName);
        if matched {
            self.repeat("class_value", |p| {
                p.cursor.consume_sequence_if_kinds(&CLASS_VALUE_TAIL)
            });
        }
        self.cursor.close_node(marker, NodeKind::ClassValue, matched);
        matched
    }

    /// Run `item` until it fails to match, returning how many times it did.
    ///
    /// An item that reports a match without consuming a token also ends the
    /// loop. The grammar cannot produce such a match, but an empty match
    /// repeated forever would never terminate.
    pub(crate) fn repeat(
        &mut self,
        rule: &'static str,
        mut item: impl FnMut(&mut Self) -> bool,
    ) -> usize {
        let mut count = 0;
        loop {
            let start = self.cursor.position();
            if !item(self) {
                break;
            }
            if Progress::between(start, self.cursor.position()).none() {
                warn!(rule, pos = start, "empty match in repetition, stopping");
                break;
            }
            count += 1;
        }
        count
    }
}
