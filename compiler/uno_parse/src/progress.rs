//! Progress tracking for repetition loops.
//!
//! A repetition that matches without consuming a token would loop forever.
//! Loops compare the cursor position before and after each item and stop
//! on `Progress::None`.

/// Indicates whether parsing made progress (consumed tokens).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Parser consumed one or more tokens.
    Made,
    /// Parser did not consume any tokens.
    None,
}

impl Progress {
    /// Progress between two cursor positions.
    #[inline]
    pub fn between(before: usize, after: usize) -> Progress {
        if after > before {
            Progress::Made
        } else {
            Progress::None
        }
    }

    /// Returns true if no progress was made.
    #[inline]
    pub fn none(self) -> bool {
        matches!(self, Progress::None)
    }
}
