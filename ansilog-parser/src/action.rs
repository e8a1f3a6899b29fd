//! Parser actions
//!
//! These represent the semantic meaning of parsed escape sequences and
//! control characters. The consumer pattern-matches on them in order; the
//! parser never emits `Remainder` except as the final action of a parse.

use crate::color::Color;

/// Which part of the line an EraseLine action clears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    ToBeginning,
    ToEnd,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One or more printable code units
    Print(String),

    Linebreak,
    CarriageReturn,

    /// SGR color and attribute updates; `None` selects the default color
    SetForeground(Option<Color>),
    SetBackground(Option<Color>),
    SetBold(bool),
    SetFaint(bool),
    SetItalic(bool),
    SetUnderline(bool),
    SetInverted(bool),

    CursorUp(usize),
    CursorDown(usize),
    CursorForward(usize),
    CursorBack(usize),

    /// Row and column, 1-based on the wire
    CursorPosition(usize, usize),
    /// Column only; the wire value is applied verbatim (see the model)
    CursorColumn(usize),

    SaveCursorPosition,
    RestoreCursorPosition,

    EraseLine(EraseMode),

    /// Unterminated trailing escape bytes, handed back to the caller to
    /// prepend to the next input chunk
    Remainder(String),
}

impl Action {
    pub fn is_print(&self) -> bool {
        matches!(self, Action::Print(_))
    }

    pub fn is_remainder(&self) -> bool {
        matches!(self, Action::Remainder(_))
    }

    /// Whether this action only updates the style state
    pub fn is_style(&self) -> bool {
        matches!(
            self,
            Action::SetForeground(_)
                | Action::SetBackground(_)
                | Action::SetBold(_)
                | Action::SetFaint(_)
                | Action::SetItalic(_)
                | Action::SetUnderline(_)
                | Action::SetInverted(_)
        )
    }
}
