//! Character-offset selection model for text surfaces

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Half-open selection `[start, end)` in character offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection (a plain cursor)
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the reported end offset is the "no real selection" sentinel
    pub fn is_sentinel(&self, len: usize, quirk: SelectionQuirk) -> bool {
        quirk == SelectionQuirk::LegacyEndSentinel
            && (self.end == 1 || self.end == 2)
            && self.end != len
    }

    /// Apply `quirk` and check the range against a buffer of `len` chars.
    /// A sentinel end is widened to `len`.
    pub fn normalize(self, len: usize, quirk: SelectionQuirk) -> Result<Self, SelectionError> {
        let mut end = self.end;
        if self.is_sentinel(len, quirk) {
            warn!("Selection end {} treated as no-selection sentinel, using {}", end, len);
            end = len;
        }

        if self.start > end {
            return Err(SelectionError::Inverted {
                start: self.start,
                end,
            });
        }
        if end > len {
            return Err(SelectionError::OutOfBounds { end, len });
        }

        Ok(Self::new(self.start, end))
    }
}

/// How to interpret selection offsets reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionQuirk {
    /// An end offset of 1 or 2 means "nothing selected"; use the buffer length instead.
    /// Some hosts report these values when no text is selected.
    #[default]
    LegacyEndSentinel,
    /// Offsets are taken as reported
    None,
}
