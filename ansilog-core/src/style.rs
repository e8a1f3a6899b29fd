//! Text style state
//!
//! A [`Style`] is the set of SGR attributes in effect when a chunk is
//! printed: optional foreground and background colors plus five boolean
//! flags. It is a small copyable value; updates replace the whole record.

use ansilog_parser::{Action, Color};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverted: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one action into the style. The seven style-setting actions
    /// produce an updated record; every other action returns the style
    /// unchanged.
    pub fn apply(&self, action: &Action) -> Style {
        match action {
            Action::SetForeground(color) => Style {
                foreground: *color,
                ..*self
            },
            Action::SetBackground(color) => Style {
                background: *color,
                ..*self
            },
            Action::SetBold(on) => Style { bold: *on, ..*self },
            Action::SetFaint(on) => Style { faint: *on, ..*self },
            Action::SetItalic(on) => Style {
                italic: *on,
                ..*self
            },
            Action::SetUnderline(on) => Style {
                underline: *on,
                ..*self
            },
            Action::SetInverted(on) => Style {
                inverted: *on,
                ..*self
            },
            _ => *self,
        }
    }
}
