//! Ansilog
//!
//! Maintains a terminal-like buffer from a stream of text interleaved
//! with ANSI escape sequences, and projects it to HTML. Built for tools
//! that post-process captured terminal output (CI log viewers, build
//! dashboards), where the stream arrives incrementally and must render
//! faithfully: cursor movement, in-place overwrites, line erasure, and
//! SGR styling.
//!
//! # Architecture
//!
//! - `ansilog-parser`: escape-sequence parser producing a flat list of
//!   actions, resumable across arbitrary chunk boundaries
//! - `ansilog-core`: the buffer model (styled chunk runs, sparse lines,
//!   cursor engine, snapshots)
//! - `html` (this crate): the HTML projection and a per-row memoizing
//!   renderer
//!
//! # Example
//!
//! ```
//! use ansilog::{LineDiscipline, Model};
//!
//! let mut model = Model::new(LineDiscipline::Cooked);
//! model.update("building: \u{1b}[32mok\u{1b}[0m\n");
//! assert_eq!(model.line_text(0), "building: ok");
//!
//! let html = ansilog::html::render(&model);
//! assert!(html.contains("ansi-green-fg"));
//! ```

pub mod html;

pub use ansilog_core::{
    Buffer, Chunk, CursorPosition, Line, LineDiscipline, Model, Snapshot, Style, TextSnapshot,
};
pub use ansilog_parser::{parse, Action, Color, EraseMode};
