//! Ansilog Parser
//!
//! Incremental parser for text interleaved with ANSI escape sequences,
//! as captured from build jobs and other terminal-attached processes.
//!
//! The parser recognizes the CSI subset relevant to log rendering (SGR
//! styling, cursor movement, line erasure) and tolerates input cut at
//! arbitrary points, including mid-escape: the unterminated tail comes
//! back as [`Action::Remainder`] for the caller to prepend to the next
//! chunk.
//!
//! This crate has no terminal or I/O dependencies and is `no_std`-shaped
//! apart from allocation; the buffer model lives in `ansilog-core`.

pub mod action;
pub mod color;
pub mod parser;

pub use action::{Action, EraseMode};
pub use color::Color;
pub use parser::parse;
