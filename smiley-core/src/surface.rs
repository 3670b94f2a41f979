//! Host text surfaces the engine reads from and writes back to

use ropey::Rope;
use std::ops::Range;

use crate::selection::Selection;

/// Capability a host exposes for its active text input
pub trait TextSurface {
    /// Current content
    fn text(&self) -> String;

    /// Replace the whole content
    fn set_text(&mut self, text: &str);

    /// Current selection in character offsets
    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection);

    /// Content length in characters
    fn len_chars(&self) -> usize {
        self.text().chars().count()
    }

    /// Replace the characters in `range` with `snippet`
    fn replace(&mut self, range: Range<usize>, snippet: &str) {
        let text = self.text();
        let mut result = String::with_capacity(text.len() + snippet.len());
        result.extend(text.chars().take(range.start));
        result.push_str(snippet);
        result.extend(text.chars().skip(range.end));
        self.set_text(&result);
    }
}

/// In-memory text buffer with a selection
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
    selection: Selection,
}

impl TextBuffer {
    /// Create a buffer with the cursor at the end of `text`
    pub fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let end = rope.len_chars();
        Self {
            rope,
            selection: Selection::caret(end),
        }
    }

    pub fn with_selection(text: &str, selection: Selection) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection,
        }
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn replace(&mut self, range: Range<usize>, snippet: &str) {
        let start = range.start;
        self.rope.remove(range);
        self.rope.insert(start, snippet);
    }
}

#[cfg(feature = "clipboard")]
pub use clipboard::ClipboardSurface;

#[cfg(feature = "clipboard")]
mod clipboard {
    use anyhow::{Context, Result};
    use std::ops::Range;

    use super::{TextBuffer, TextSurface};
    use crate::selection::Selection;

    /// System clipboard as a text surface. The cursor starts at the end of the
    /// clipboard text; edits stay local until [`ClipboardSurface::commit`].
    pub struct ClipboardSurface {
        clipboard: arboard::Clipboard,
        buffer: TextBuffer,
    }

    impl ClipboardSurface {
        pub fn open() -> Result<Self> {
            let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
            let text = clipboard
                .get_text()
                .context("Failed to read text from clipboard")?;
            Ok(Self {
                clipboard,
                buffer: TextBuffer::new(&text),
            })
        }

        /// Write the buffer back to the clipboard
        pub fn commit(&mut self) -> Result<()> {
            self.clipboard
                .set_text(self.buffer.text())
                .context("Failed to write text to clipboard")
        }
    }

    impl TextSurface for ClipboardSurface {
        fn text(&self) -> String {
            self.buffer.text()
        }

        fn set_text(&mut self, text: &str) {
            self.buffer.set_text(text);
        }

        fn selection(&self) -> Selection {
            self.buffer.selection()
        }

        fn set_selection(&mut self, selection: Selection) {
            self.buffer.set_selection(selection);
        }

        fn len_chars(&self) -> usize {
            self.buffer.len_chars()
        }

        fn replace(&mut self, range: Range<usize>, snippet: &str) {
            self.buffer.replace(range, snippet);
        }
    }
}
