//! Evaluation module for Gomoku AI
//!
//! Contains:
//! - Pattern score table keyed by run length and open ends
//! - Per-cell and whole-board heuristic evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_bonus, score_board, score_direction, score_position};
pub use patterns::{score_line, PatternScore};
