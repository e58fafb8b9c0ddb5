//! Game loop module - ties the board, entities, input and output together
//!
//! A [`ConsoleGame`] owns a [`Board`](crate::core::Board), a [`World`] of
//! players and collectibles, a [`RenderSink`](crate::term::RenderSink) and an
//! [`InputSource`](crate::input::InputSource). Every iteration it polls input,
//! lets hooks react, asks the frame scheduler whether to redraw, and sleeps.
//!
//! # Lifecycle
//!
//! `Idle → Running → Stopped`. [`ConsoleGame::initialize`] applies a
//! [`LoopConfig`] and starts running; [`World::stop`] (from a hook) or
//! [`ConsoleGame::stop`] ends the loop after the current iteration.
//!
//! # Update Modes
//!
//! | Mode | Redraws |
//! |------|---------|
//! | every frame (default) | every iteration |
//! | smart | only after something marked the frame dirty |
//! | interval(n) | iterations 0, n, 2n, ... |
//!
//! Asking for smart and interval updating at once logs a warning and uses
//! smart updating.
//!
//! # Example
//!
//! ```
//! use console_game_engine::core::{Board, KeyBindings};
//! use console_game_engine::input::ScriptedInput;
//! use console_game_engine::term::FrameCapture;
//! use console_game_engine::types::{Position, Symbol};
//! use console_game_engine::{ConsoleGame, LoopConfig};
//!
//! let board = Board::filled(5, 3, '.').unwrap();
//! let input = ScriptedInput::from_symbols([Symbol::Right, Symbol::Char('q')]);
//! let mut game = ConsoleGame::new(board, FrameCapture::new(), input);
//! let hero = game.add_player('@', Position::new(0, 0), KeyBindings::arrows());
//!
//! let config = LoopConfig::new()
//!     .smart_updating(true)
//!     .on_key(move |world, symbol| {
//!         if symbol == Symbol::Char('q') {
//!             world.stop();
//!         } else {
//!             world.apply_player_movement(hero, &symbol)?;
//!         }
//!         Ok(())
//!     });
//! game.run(config).unwrap();
//!
//! assert_eq!(game.sink().last_frame(), Some(".@...\n.....\n....."));
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod world;

pub use console_game_core as core;
pub use console_game_input as input;
pub use console_game_term as term;
pub use console_game_types as types;

pub use config::{Hook, KeyHook, LoopConfig};
pub use error::EngineError;
pub use game::ConsoleGame;
pub use world::{CollectibleId, PlayerId, World};
