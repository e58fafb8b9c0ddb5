//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game loop. It defines the
//! [`InputSource`] seam, decodes raw key bytes into [`crate::types::Symbol`]s
//! and maps `crossterm` key events onto the same byte protocol, so scripted and
//! real keyboards look identical to the engine.

pub mod map;
pub mod poll;
pub mod source;

pub use console_game_types as types;

pub use map::{encode_key_event, encode_symbol, RawKey};
pub use poll::poll_input;
pub use source::{CrosstermInput, InputSource, ScriptedInput};
