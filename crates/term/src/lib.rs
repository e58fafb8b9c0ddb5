//! Terminal output module.
//!
//! The game loop only knows the [`RenderSink`] trait: clear the screen, write
//! the board. This crate provides the crossterm-backed [`TerminalRenderer`] for
//! real terminals and [`FrameCapture`] for tests and headless runs.

pub mod renderer;
pub mod sink;

pub use console_game_types as types;

pub use renderer::{encode_clear_into, encode_line_into, TerminalRenderer};
pub use sink::{FrameCapture, RenderSink};
