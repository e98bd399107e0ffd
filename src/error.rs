//! Error type for the host-facing API

use thiserror::Error;

/// Failures reported to callers of [`Board`](crate::Board),
/// [`AIEngine`](crate::AIEngine) and [`GameState`](crate::game::GameState).
///
/// The search itself never fails: a full board is `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GomokuError {
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },
    #[error("position ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("no moves to undo")]
    NothingToUndo,
}
