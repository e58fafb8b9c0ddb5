//! Core engine module - pure, deterministic, and testable
//!
//! This module contains the board, the entity model and the frame scheduler.
//! It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same inputs always produce the same frames
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: usable by any host that can print a string
//!
//! # Module Structure
//!
//! - [`board`]: baseline grid, per-frame working copy, rendering and clamping
//! - [`entity`]: static, dynamic, collectible and player entities
//! - [`scheduler`]: every-frame, smart and interval redraw gating
//!
//! # Example
//!
//! ```
//! use console_game_core::{Board, Entity, KeyBindings};
//! use console_game_types::{Position, Symbol};
//!
//! let board = Board::filled(5, 5, '.').unwrap();
//! let mut player = Entity::player('@', Position::new(4, 4), KeyBindings::arrows());
//!
//! // Movement is unchecked...
//! player.resolve_movement(&Symbol::Right);
//! assert_eq!(player.position(), Position::new(5, 4));
//!
//! // ...and the board pulls it back when drawing.
//! let mut pos = player.position();
//! board.clamp(&mut pos);
//! assert_eq!(pos, Position::new(4, 4));
//! ```

pub mod board;
pub mod entity;
pub mod scheduler;

pub use console_game_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Grid};
pub use entity::{CollideAction, Entity, EntityKind, KeyBindings};
pub use scheduler::{FrameScheduler, UpdateMode};
