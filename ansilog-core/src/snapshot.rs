//! Model snapshots for testing and tooling
//!
//! Snapshots capture the buffer contents in a serializable format for
//! deterministic testing, golden files, and the headless runner.

use serde::{Deserialize, Serialize};

use crate::line::{Chunk, Line};
use crate::model::Model;

/// A snapshot of the whole model: every row's chunks plus the cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: Vec<Vec<ChunkSnapshot>>,
    pub cursor: CursorSnapshot,
}

/// Snapshot of a single chunk. Colors are rendered as their debug names
/// so golden files stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkSnapshot {
    pub text: String,
    pub fg: String,
    pub bg: String,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverted: bool,
}

impl From<&Chunk> for ChunkSnapshot {
    fn from(chunk: &Chunk) -> Self {
        ChunkSnapshot {
            text: chunk.text.clone(),
            fg: format!("{:?}", chunk.style.foreground),
            bg: format!("{:?}", chunk.style.background),
            bold: chunk.style.bold,
            faint: chunk.style.faint,
            italic: chunk.style.italic,
            underline: chunk.style.underline,
            inverted: chunk.style.inverted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub row: usize,
    pub col: usize,
}

impl Snapshot {
    pub fn from_model(model: &Model) -> Self {
        let rows = model
            .buffer()
            .lines()
            .iter()
            .map(|line| line.chunks().iter().map(ChunkSnapshot::from).collect())
            .collect();
        Snapshot {
            rows,
            cursor: CursorSnapshot {
                row: model.cursor().row,
                col: model.cursor().col,
            },
        }
    }

    /// The text content of a specific row. Verbatim: the sparse model
    /// has no trailing cell padding to trim.
    pub fn row_text(&self, row: usize) -> String {
        match self.rows.get(row) {
            Some(chunks) => chunks.iter().map(|chunk| chunk.text.as_str()).collect(),
            None => String::new(),
        }
    }

    /// The text content of the whole buffer, one line per row.
    pub fn text(&self) -> String {
        (0..self.rows.len())
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A text representation for debugging, with the cursor marked.
    pub fn to_debug_string(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "Cursor: ({}, {})\n---\n",
            self.cursor.row, self.cursor.col
        ));
        for (row, _) in self.rows.iter().enumerate() {
            let marker = if row == self.cursor.row {
                format!(" <- cursor at col {}", self.cursor.col)
            } else {
                String::new()
            };
            s.push_str(&format!("{:3}|{}|{}\n", row, self.row_text(row), marker));
        }
        s
    }
}

/// Simplified snapshot: just the row texts and the cursor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextSnapshot {
    pub rows: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl TextSnapshot {
    pub fn from_model(model: &Model) -> Self {
        TextSnapshot {
            rows: model.buffer().lines().iter().map(Line::text).collect(),
            cursor_row: model.cursor().row,
            cursor_col: model.cursor().col,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
