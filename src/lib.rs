//! Console game engine (workspace facade crate).
//!
//! This package exposes `console_game::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use console_game_core as core;
pub use console_game_engine as engine;
pub use console_game_input as input;
pub use console_game_term as term;
pub use console_game_types as types;
