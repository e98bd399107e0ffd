//! Minimax search with alpha-beta pruning
//!
//! This module implements the search behind the hardest difficulty.
//!
//! # Features
//!
//! - Fixed-depth minimax, maximizing for the AI and minimizing for its opponent
//! - Alpha-beta cutoffs as soon as `beta <= alpha`
//! - Root restricted to the [`ROOT_CANDIDATES`] best cells; every empty cell
//!   is expanded below the root
//! - Faster wins and slower losses preferred through the remaining depth
//!
//! The board is explored in place: each probe places a stone, recurses and
//! removes it again, so the caller's board is unchanged when the search
//! returns.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(9, 9).unwrap();
//! for x in 0..4 {
//!     board.place_stone(Pos::new(x, 0), Stone::Black);
//! }
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Stone::Black, 2);
//! assert_eq!(result.best_move, Some(Pos::new(4, 0)));
//! ```

use log::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::score_board;
use crate::rules::find_winner;

use super::candidates::{top_candidates, ROOT_CANDIDATES};

/// Base score of a decided game, before the remaining-depth adjustment
pub const WIN_SCORE: i32 = 10_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Total minimax nodes visited
    pub nodes: u64,
}

/// Alpha-beta searcher.
///
/// Holds nothing but the node counter, so one instance can serve any number of
/// searches.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the best move for `color` searching `max_depth` plies.
    ///
    /// Each root candidate is played, then scored by a full-window minimax
    /// of `max_depth - 1` plies with the opponent to move. The first candidate
    /// with the strictly highest score is kept.
    pub fn search(&mut self, board: &mut Board, color: Stone, max_depth: u8) -> SearchResult {
        self.nodes = 0;

        let empty = board.empty_cells();
        let candidates = top_candidates(board, &empty, ROOT_CANDIDATES);
        let depth = max_depth.saturating_sub(1);

        let mut best: Option<(Pos, i32)> = None;
        for pos in candidates {
            board.place_stone(pos, color);
            let score = self.minimax(board, depth, false, color, i32::MIN, i32::MAX);
            board.remove_stone(pos);

            trace!("root candidate ({}, {}) scored {}", pos.x, pos.y, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            nodes: self.nodes,
        }
    }

    /// Minimax value of `board` from `ai`'s point of view.
    ///
    /// `maximizing` tells whose ply it is: `ai` plays on maximizing plies and
    /// its opponent on minimizing ones.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        ai: Stone,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let opponent = ai.opponent();
        match find_winner(board) {
            Some(winner) if winner == ai => return WIN_SCORE + i32::from(depth),
            Some(_) => return -WIN_SCORE - i32::from(depth),
            None => {}
        }
        if depth == 0 || board.is_full() {
            return score_board(board, ai);
        }

        let mover = if maximizing { ai } else { opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_cells() {
            board.place_stone(pos, mover);
            let score = self.minimax(board, depth - 1, !maximizing, ai, alpha, beta);
            board.remove_stone(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Nodes visited by the last `search`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}
