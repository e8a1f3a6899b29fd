//! Cursor position
//!
//! The cursor tracks a (row, column) pair. Moves toward the origin
//! saturate at 0; moves away from it are unbounded, since the buffer
//! grows on demand when something is printed there.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub row: usize,
    pub col: usize,
}

impl CursorPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self, n: usize) {
        self.row = self.row.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize) {
        self.row += n;
    }

    pub fn move_left(&mut self, n: usize) {
        self.col = self.col.saturating_sub(n);
    }

    pub fn move_right(&mut self, n: usize) {
        self.col += n;
    }

    pub fn carriage_return(&mut self) {
        self.col = 0;
    }
}
