//! Log model
//!
//! The [`Model`] is the main entry point of the buffer core. It glues the
//! parser to the buffer: `update` feeds one chunk of input, prepending
//! any escape-sequence tail stashed by the previous call, and applies the
//! resulting actions in order. Style-only actions fold into the current
//! [`Style`]; everything else moves the cursor or mutates the buffer.

use ansilog_parser::{parse, Action, EraseMode};
use serde::{Deserialize, Serialize};

use crate::buffer::Buffer;
use crate::cursor::CursorPosition;
use crate::line::{Chunk, Line};
use crate::style::Style;

/// Linebreak policy: whether `\n` resets the column (Cooked) or
/// preserves it (Raw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDiscipline {
    Raw,
    Cooked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    line_discipline: LineDiscipline,
    buffer: Buffer,
    cursor: CursorPosition,
    saved_cursor: Option<CursorPosition>,
    style: Style,
    remainder: String,
}

impl Model {
    /// Create an empty model with the given linebreak policy.
    pub fn new(line_discipline: LineDiscipline) -> Self {
        Model {
            line_discipline,
            buffer: Buffer::new(),
            cursor: CursorPosition::new(),
            saved_cursor: None,
            style: Style::new(),
            remainder: String::new(),
        }
    }

    pub fn line_discipline(&self) -> LineDiscipline {
        self.line_discipline
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// The unterminated escape tail carried over to the next `update`.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    /// The text of one row, empty when the row does not exist.
    pub fn line_text(&self, row: usize) -> String {
        self.buffer
            .line(row)
            .map(Line::text)
            .unwrap_or_default()
    }

    /// Feed one chunk of input. Arbitrary cut points are fine, including
    /// mid-escape: the unterminated tail is stashed and prepended to the
    /// next call's input.
    pub fn update(&mut self, input: &str) {
        let pending = std::mem::take(&mut self.remainder);
        let actions = if pending.is_empty() {
            parse(input)
        } else {
            log::trace!("prepending {} stashed escape bytes", pending.len());
            let mut joined = pending;
            joined.push_str(input);
            parse(&joined)
        };
        for action in actions {
            self.apply(action);
        }
    }

    /// Apply a single action. Actions the cursor engine does not handle
    /// explicitly fall through to the style fold and can never touch the
    /// buffer or the cursor.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Print(text) => {
                let advance = text.chars().count();
                let column = self.cursor.col;
                let chunk = Chunk::new(text, self.style);
                self.buffer
                    .update_line(self.cursor.row, |line| line.write(column, chunk));
                self.cursor.move_right(advance);
            }
            Action::CarriageReturn => {
                self.cursor.carriage_return();
            }
            Action::Linebreak => {
                self.cursor.move_down(1);
                if self.line_discipline == LineDiscipline::Cooked {
                    self.cursor.carriage_return();
                }
                // a trailing newline adds a visible row
                self.buffer.ensure_row(self.cursor.row);
            }
            Action::CursorUp(n) => self.cursor.move_up(n),
            Action::CursorDown(n) => self.cursor.move_down(n),
            Action::CursorForward(n) => self.cursor.move_right(n),
            Action::CursorBack(n) => self.cursor.move_left(n),
            Action::CursorPosition(row, col) => {
                self.cursor.row = row.saturating_sub(1);
                self.cursor.col = col.saturating_sub(1);
            }
            // the wire value is applied without the 1-based adjustment,
            // matching the reference behavior
            Action::CursorColumn(col) => {
                self.cursor.col = col;
            }
            Action::SaveCursorPosition => {
                self.saved_cursor = Some(self.cursor);
            }
            Action::RestoreCursorPosition => {
                if let Some(saved) = self.saved_cursor {
                    self.cursor = saved;
                }
            }
            Action::EraseLine(mode) => {
                let column = self.cursor.col;
                let style = self.style;
                self.buffer.update_line(self.cursor.row, |line| match mode {
                    EraseMode::ToEnd => line.erase_to_end(column),
                    EraseMode::ToBeginning => line.erase_to_beginning(column, style),
                    EraseMode::All => line.clear(),
                });
            }
            Action::Remainder(tail) => {
                self.remainder = tail;
            }
            other => {
                self.style = self.style.apply(&other);
            }
        }
    }
}
