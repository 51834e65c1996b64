//! Interactive chess board editor.
//!
//! Wires the position model and analyzer to a text front end:
//! - [`command`] parses editor commands such as `place e4 Q`
//! - [`session`] owns the position and the background engine evaluation
//! - [`render`] draws the board, reports and engine suggestions
//! - [`clipboard`] hands FEN text to an external clipboard program
//! - [`config`] loads `board-editor.toml`

pub mod clipboard;
pub mod command;
pub mod config;
pub mod render;
pub mod session;
