//! Gomoku opponent engine
//!
//! Move selection for an automated five-in-a-row player on a rectangular board
//! of up to 25x25 cells:
//! - Five or more in a row wins (overlines allowed)
//! - Three skill levels: random, greedy heuristic, alpha-beta search
//! - Black moves first; an empty board is always answered with the center
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning and win detection
//! - [`eval`]: Pattern scores and position evaluation
//! - [`search`]: Root candidates and minimax with alpha-beta pruning
//! - [`engine`]: Move policy per difficulty
//! - [`game`]: Game session with history, undo and win/draw detection
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new(15, 15).unwrap();
//! let mut engine = AIEngine::new(15, 15, Difficulty::Medium).unwrap();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&mut board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.x, pos.y);
//! }
//! ```
//!
//! # Difficulty
//!
//! - `Easy`: uniformly random empty cell
//! - `Medium`: best cell by the single-ply heuristic for the side to move
//! - `Hard`: depth-4 minimax over the 10 most promising root cells
//!
//! # Threading
//!
//! Decisions are synchronous. The search plays and takes back stones on the
//! board it is given, so concurrent decisions need one board each.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, MAX_DIMENSION};
pub use engine::{AIEngine, Difficulty, MoveResult, MoveSource, Strategy};
pub use error::GomokuError;
pub use game::{GameMode, GameResult, GameState};
