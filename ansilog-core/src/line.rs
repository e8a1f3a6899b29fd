//! Line representation
//!
//! A line is an ordered sequence of [`Chunk`]s, each a non-empty run of
//! code units drawn with a single [`Style`]. Lines are sparse: a line is
//! exactly as long as what has been printed to it. The model is
//! append-biased; chunks are split only when an overwrite lands inside
//! one, and adjacent chunks are never merged even when their styles are
//! equal.

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// A contiguous run of code units sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub style: Style,
}

impl Chunk {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Chunk {
            text: text.into(),
            style,
        }
    }

    /// A run of `count` spaces, used for padding writes past the end of
    /// a line and for erase-to-beginning.
    pub fn spaces(count: usize, style: Style) -> Self {
        Chunk {
            text: " ".repeat(count),
            style,
        }
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    chunks: Vec<Chunk>,
}

impl Line {
    pub fn new() -> Self {
        Line { chunks: Vec::new() }
    }

    pub fn with_chunks(chunks: Vec<Chunk>) -> Self {
        Line { chunks }
    }

    /// Column index one past the last printed cell: the sum of the
    /// chunks' lengths in code units.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The logical row contents: every chunk's text, concatenated.
    pub fn text(&self) -> String {
        self.chunks.iter().map(|chunk| chunk.text.as_str()).collect()
    }

    /// Overwrite the columns [column, column + chunk.len()) with `chunk`.
    ///
    /// Writing at the current end appends; writing past the end first
    /// appends a padding run of spaces in the chunk's style; writing
    /// inside the line splits the surrounding chunks. Empty chunks are
    /// never stored.
    pub fn write(&mut self, column: usize, chunk: Chunk) {
        if chunk.is_empty() {
            return;
        }

        let len = self.len();
        if column >= len {
            if column > len {
                self.chunks.push(Chunk::spaces(column - len, chunk.style));
            }
            self.chunks.push(chunk);
            return;
        }

        let mut chunks = self.take_prefix(column).chunks;
        let suffix = self.drop_prefix(column + chunk.len());
        chunks.push(chunk);
        chunks.extend(suffix.chunks);
        self.chunks = chunks;
    }

    /// The prefix covering the first `n` columns. A chunk spanning
    /// column `n` is truncated by code-unit count; chunks that truncate
    /// to nothing are omitted.
    pub fn take_prefix(&self, n: usize) -> Line {
        let mut chunks = Vec::new();
        let mut remaining = n;
        for chunk in &self.chunks {
            if remaining == 0 {
                break;
            }
            let chunk_len = chunk.len();
            if chunk_len <= remaining {
                chunks.push(chunk.clone());
                remaining -= chunk_len;
            } else {
                let text: String = chunk.text.chars().take(remaining).collect();
                chunks.push(Chunk::new(text, chunk.style));
                remaining = 0;
            }
        }
        Line { chunks }
    }

    /// The suffix starting at column `n`, symmetric to `take_prefix`.
    pub fn drop_prefix(&self, n: usize) -> Line {
        let mut chunks = Vec::new();
        let mut to_skip = n;
        for chunk in &self.chunks {
            if to_skip == 0 {
                chunks.push(chunk.clone());
                continue;
            }
            let chunk_len = chunk.len();
            if chunk_len <= to_skip {
                to_skip -= chunk_len;
            } else {
                let text: String = chunk.text.chars().skip(to_skip).collect();
                chunks.push(Chunk::new(text, chunk.style));
                to_skip = 0;
            }
        }
        Line { chunks }
    }

    /// Truncate the line at `column`.
    pub fn erase_to_end(&mut self, column: usize) {
        self.chunks = self.take_prefix(column).chunks;
    }

    /// Blank the columns [0, column) with spaces in `style`. The net
    /// effect is an in-place blank; the suffix from `column` onward is
    /// untouched. A no-op at column 0.
    pub fn erase_to_beginning(&mut self, column: usize, style: Style) {
        if column == 0 {
            return;
        }
        self.write(0, Chunk::spaces(column, style));
    }

    /// Empty the line entirely.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}
