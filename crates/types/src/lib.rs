//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, input decoding, terminal rendering).
//!
//! # Coordinates
//!
//! Positions are `(x, y)` where `x` is the column (left to right) and `y` the
//! row (top to bottom). Grids are indexed `grid[y][x]`.
//!
//! | Direction | Delta `(dx, dy)` |
//! |-----------|------------------|
//! | Up | `(0, -1)` |
//! | Down | `(0, 1)` |
//! | Left | `(-1, 0)` |
//! | Right | `(1, 0)` |
//!
//! # Raw Key Protocol
//!
//! Arrow keys arrive as a two-byte sequence: [`ARROW_SENTINEL`] followed by a
//! scan code. Every other key arrives as its UTF-8 encoding.
//!
//! | Scan code | Symbol |
//! |-----------|--------|
//! | `SCAN_UP` (72) | `Symbol::Up` |
//! | `SCAN_DOWN` (80) | `Symbol::Down` |
//! | `SCAN_LEFT` (75) | `Symbol::Left` |
//! | `SCAN_RIGHT` (77) | `Symbol::Right` |
//!
//! # Examples
//!
//! ```
//! use console_game_types::{Direction, Position, Symbol};
//!
//! let mut pos = Position::new(2, 3);
//! let (dx, dy) = Direction::Up.delta();
//! pos.translate(dx, dy);
//! assert_eq!(pos, Position::new(2, 2));
//!
//! assert_eq!(Symbol::Up.direction(), Some(Direction::Up));
//! assert_eq!(Symbol::Char('w').direction(), None);
//! ```

use std::fmt;

/// First byte of a two-byte arrow-key sequence.
pub const ARROW_SENTINEL: u8 = 0xE0;

/// Scan code following [`ARROW_SENTINEL`] for the up arrow.
pub const SCAN_UP: u8 = 72;

/// Scan code following [`ARROW_SENTINEL`] for the down arrow.
pub const SCAN_DOWN: u8 = 80;

/// Scan code following [`ARROW_SENTINEL`] for the left arrow.
pub const SCAN_LEFT: u8 = 75;

/// Scan code following [`ARROW_SENTINEL`] for the right arrow.
pub const SCAN_RIGHT: u8 = 77;

/// Byte a terminal in raw mode reports for Ctrl+C.
pub const CTRL_C: u8 = 0x03;

/// A cell position on (or transiently off) the board.
///
/// Signed so a movement can push an entity past an edge before the game loop
/// clamps it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column, left to right.
    pub x: i32,
    /// Row, top to bottom.
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add a delta in place, saturating at the `i32` limits.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four movement directions a player can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed movement delta `(dx, dy)` for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_game_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A decoded key press.
///
/// - `Up`/`Down`/`Left`/`Right`: arrow keys
/// - `Char`: any other key, decoded as a literal character
/// - `Null`: an arrow-key sequence with an unknown scan code, or bytes that do
///   not decode to a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Null,
}

impl Symbol {
    /// Map an arrow-key scan code to its symbol.
    ///
    /// Unknown scan codes yield [`Symbol::Null`].
    ///
    /// # Examples
    ///
    /// ```
    /// use console_game_types::{Symbol, SCAN_LEFT};
    ///
    /// assert_eq!(Symbol::from_scan_code(SCAN_LEFT), Symbol::Left);
    /// assert_eq!(Symbol::from_scan_code(0), Symbol::Null);
    /// ```
    pub fn from_scan_code(code: u8) -> Self {
        match code {
            SCAN_UP => Symbol::Up,
            SCAN_DOWN => Symbol::Down,
            SCAN_RIGHT => Symbol::Right,
            SCAN_LEFT => Symbol::Left,
            _ => Symbol::Null,
        }
    }

    /// Arrow-key scan code for this symbol, if it is an arrow.
    pub fn scan_code(&self) -> Option<u8> {
        match self {
            Symbol::Up => Some(SCAN_UP),
            Symbol::Down => Some(SCAN_DOWN),
            Symbol::Left => Some(SCAN_LEFT),
            Symbol::Right => Some(SCAN_RIGHT),
            Symbol::Char(_) | Symbol::Null => None,
        }
    }

    /// Direction for arrow symbols.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Symbol::Up => Some(Direction::Up),
            Symbol::Down => Some(Direction::Down),
            Symbol::Left => Some(Direction::Left),
            Symbol::Right => Some(Direction::Right),
            Symbol::Char(_) | Symbol::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Symbol::Null)
    }
}

impl From<char> for Symbol {
    fn from(ch: char) -> Self {
        Symbol::Char(ch)
    }
}

impl From<Direction> for Symbol {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Symbol::Up,
            Direction::Down => Symbol::Down,
            Direction::Left => Symbol::Left,
            Direction::Right => Symbol::Right,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Up => f.write_str("up"),
            Symbol::Down => f.write_str("down"),
            Symbol::Left => f.write_str("left"),
            Symbol::Right => f.write_str("right"),
            Symbol::Char(ch) => write!(f, "{:?}", ch),
            Symbol::Null => f.write_str("null"),
        }
    }
}

/// Outcome of feeding a symbol to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementResult {
    /// The symbol was bound and the player was translated.
    Moved,
    /// The symbol was not bound; the position is untouched.
    Ignored,
}

impl MovementResult {
    pub fn moved(&self) -> bool {
        matches!(self, MovementResult::Moved)
    }
}

/// Lifecycle of a game loop.
///
/// `Idle → Running → Stopped`; `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl LoopState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopState::Idle => "idle",
            LoopState::Running => "running",
            LoopState::Stopped => "stopped",
        }
    }
}
