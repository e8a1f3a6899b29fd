//! Terminal color representation
//!
//! The color set is the closed 16-color ANSI palette: the eight standard
//! colors and their bright variants. The default (absent) color is
//! represented as `Option::None` at the use site, not as a variant here.

use serde::{Deserialize, Serialize};

/// Named colors from the standard 16-color ANSI palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Convert from the low digit of an SGR color code (30-37 for fg,
    /// 40-47 for bg)
    pub fn from_sgr_normal(code: usize) -> Option<Self> {
        match code {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }

    /// Convert from the low digit of an SGR bright color code (90-97 for
    /// fg, 100-107 for bg)
    pub fn from_sgr_bright(code: usize) -> Option<Self> {
        match code {
            0 => Some(Color::BrightBlack),
            1 => Some(Color::BrightRed),
            2 => Some(Color::BrightGreen),
            3 => Some(Color::BrightYellow),
            4 => Some(Color::BrightBlue),
            5 => Some(Color::BrightMagenta),
            6 => Some(Color::BrightCyan),
            7 => Some(Color::BrightWhite),
            _ => None,
        }
    }

    /// Whether this is one of the eight bright variants
    pub fn is_bright(self) -> bool {
        matches!(
            self,
            Color::BrightBlack
                | Color::BrightRed
                | Color::BrightGreen
                | Color::BrightYellow
                | Color::BrightBlue
                | Color::BrightMagenta
                | Color::BrightCyan
                | Color::BrightWhite
        )
    }

    /// The lowercase base color name, without any bright prefix
    pub fn name(self) -> &'static str {
        match self {
            Color::Black | Color::BrightBlack => "black",
            Color::Red | Color::BrightRed => "red",
            Color::Green | Color::BrightGreen => "green",
            Color::Yellow | Color::BrightYellow => "yellow",
            Color::Blue | Color::BrightBlue => "blue",
            Color::Magenta | Color::BrightMagenta => "magenta",
            Color::Cyan | Color::BrightCyan => "cyan",
            Color::White | Color::BrightWhite => "white",
        }
    }
}
