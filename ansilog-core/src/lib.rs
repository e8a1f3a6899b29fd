//! Ansilog Core
//!
//! The terminal-like buffer model behind ansilog:
//! - Styled chunk runs grouped into sparse lines
//! - A growable row buffer with whole-row replacement
//! - Cursor state and the action dispatch that drives both
//! - Serializable snapshots for testing and tooling
//!
//! This crate has no I/O and no ambient state; a [`Model`] is a pure
//! deterministic function of the input fed to [`Model::update`]. The
//! escape-sequence parser lives in `ansilog-parser` and is re-exported
//! here for convenience.

pub mod buffer;
pub mod cursor;
pub mod line;
pub mod model;
pub mod snapshot;
pub mod style;

pub use buffer::Buffer;
pub use cursor::CursorPosition;
pub use line::{Chunk, Line};
pub use model::{LineDiscipline, Model};
pub use snapshot::{Snapshot, TextSnapshot};
pub use style::Style;

pub use ansilog_parser::{Action, Color, EraseMode};
