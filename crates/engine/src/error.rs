use thiserror::Error;

use crate::core::BoardError;

/// Errors raised by the game loop and its configuration.
///
/// Hook failures are not wrapped here; they propagate out of
/// [`ConsoleGame::step`](crate::ConsoleGame::step) as the hook's own error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("interval updating needs an interval of at least 1")]
    ZeroInterval,
    #[error("per-iteration delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidDelay(f64),
    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },
    #[error("no player with id {0}")]
    UnknownPlayer(usize),
    #[error("no collectible with id {0}")]
    UnknownCollectible(usize),
    #[error("expected a {expected} entity, got a {found} entity")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },
    #[error("game loop has not been initialized")]
    NotInitialized,
    #[error("game loop has already stopped")]
    Stopped,
    #[error(transparent)]
    Board(#[from] BoardError),
}
