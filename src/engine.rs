//! Main AI Engine: move policy over the difficulty levels
//!
//! This module picks the strategy for a decision and runs it:
//!
//! 1. **Opening**: an empty board is always answered with the center cell
//! 2. **Easy**: a uniformly random empty cell
//! 3. **Medium**: the empty cell with the best single-ply heuristic score
//! 4. **Hard**: minimax with alpha-beta pruning over the best root candidates
//!
//! A full board yields no move at every level.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new(15, 15, Difficulty::Medium).unwrap();
//! let mut board = Board::new(15, 15).unwrap();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Source: {:?}", result.source);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone, MAX_DIMENSION};
use crate::error::GomokuError;
use crate::eval::score_position;
use crate::search::Searcher;

/// Skill level of the engine.
///
/// Parsing is lenient: any name other than `easy`, `medium` or `hard`
/// (case-insensitive) becomes `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth associated with the level. Only `Hard` searches.
    #[must_use]
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    #[must_use]
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::Greedy,
            Difficulty::Hard => Strategy::Search {
                depth: self.max_depth(),
            },
        }
    }
}

impl From<&str> for Difficulty {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Difficulty::from(name.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// How a decision is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random empty cell
    Random,
    /// Best single-ply heuristic score
    Greedy,
    /// Minimax with alpha-beta to the given depth
    Search { depth: u8 },
}

/// Which rule produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Center cell on an empty board
    Opening,
    Random,
    Greedy,
    Search,
    /// The board is full
    NoMove,
}

/// Result of a decision with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen cell, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Heuristic or minimax score of the move (0 for opening/random)
    pub score: i32,
    pub source: MoveSource,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Minimax nodes visited (0 outside the search)
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn new(best_move: Option<Pos>, score: i32, source: MoveSource, start: Instant) -> Self {
        Self {
            best_move,
            score,
            source,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: 0,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds only its configuration: board dimensions, difficulty and the random
/// generator used at `Easy`. It keeps no game history and no search state, so
/// changing the configuration between decisions is always safe.
///
/// Decisions take the board by `&mut` because the search plays and takes back
/// stones on it. The board is identical to the input when a call returns.
pub struct AIEngine {
    width: usize,
    height: usize,
    difficulty: Difficulty,
    max_depth: u8,
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine for a `width` x `height` board.
    pub fn new(width: usize, height: usize, difficulty: Difficulty) -> Result<Self, GomokuError> {
        Self::with_rng(width, height, difficulty, StdRng::from_entropy())
    }

    /// Create an engine whose random moves are reproducible.
    pub fn with_seed(
        width: usize,
        height: usize,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<Self, GomokuError> {
        Self::with_rng(width, height, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        width: usize,
        height: usize,
        difficulty: Difficulty,
        rng: StdRng,
    ) -> Result<Self, GomokuError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            difficulty,
            max_depth: difficulty.max_depth(),
            rng,
        })
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.max_depth = difficulty.max_depth();
    }

    /// Change the board size used for future decisions.
    ///
    /// Only rejects sizes no board can have; game-level limits are the
    /// caller's business.
    pub fn set_board_size(&mut self, width: usize, height: usize) -> Result<(), GomokuError> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Get the move for `color`, or `None` on a full board.
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{AIEngine, Board, Difficulty, Pos};
    ///
    /// let mut engine = AIEngine::new(15, 15, Difficulty::Medium).unwrap();
    /// let mut board = Board::new(15, 15).unwrap();
    /// assert_eq!(engine.get_move(&mut board, gomoku::Stone::Black), Some(Pos::new(7, 7)));
    /// ```
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the move for `color` with the score, source and timing of the
    /// decision.
    pub fn get_move_with_stats(&mut self, board: &mut Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        if board.width() != self.width || board.height() != self.height {
            warn!(
                "engine configured for {}x{} but board is {}x{}; using the board's size",
                self.width,
                self.height,
                board.width(),
                board.height()
            );
        }

        let empty = board.empty_cells();
        let result = if empty.is_empty() {
            MoveResult::new(None, 0, MoveSource::NoMove, start)
        } else if empty.len() == board.cell_count() {
            let center = Pos::new((board.width() / 2) as u8, (board.height() / 2) as u8);
            MoveResult::new(Some(center), 0, MoveSource::Opening, start)
        } else {
            match self.difficulty.strategy() {
                Strategy::Random => {
                    let pos = empty.choose(&mut self.rng).copied();
                    MoveResult::new(pos, 0, MoveSource::Random, start)
                }
                Strategy::Greedy => {
                    let (pos, score) = greedy_move(board, &empty, color);
                    MoveResult::new(pos, score, MoveSource::Greedy, start)
                }
                Strategy::Search { .. } => {
                    let search = Searcher::new().search(board, color, self.max_depth);
                    let mut result =
                        MoveResult::new(search.best_move, search.score, MoveSource::Search, start);
                    result.nodes = search.nodes;
                    result
                }
            }
        };

        debug!(
            "{} move for {:?}: {:?} score {} via {:?} ({} nodes, {}ms)",
            self.difficulty,
            color,
            result.best_move,
            result.score,
            result.source,
            result.nodes,
            result.time_ms
        );
        result
    }
}

/// Best empty cell for `color` by `score_position`, first seen on ties.
fn greedy_move(board: &Board, empty: &[Pos], color: Stone) -> (Option<Pos>, i32) {
    let mut best: Option<(Pos, i32)> = None;
    for &pos in empty {
        let score = score_position(board, pos, color);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    (best.map(|(pos, _)| pos), best.map_or(0, |(_, score)| score))
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GomokuError> {
    if (1..=MAX_DIMENSION).contains(&width) && (1..=MAX_DIMENSION).contains(&height) {
        Ok(())
    } else {
        Err(GomokuError::InvalidDimensions { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::WIN_SCORE;

    const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    fn full_board(width: usize, height: usize) -> Board {
        // Column stripes in pairs: no five anywhere
        let mut board = Board::new(width, height).unwrap();
        for pos in board.empty_cells() {
            let stone = if (pos.x / 2 + pos.y) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(pos, stone);
        }
        board
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.strategy(), Strategy::Random);
        assert_eq!(Difficulty::Medium.strategy(), Strategy::Greedy);
        assert_eq!(Difficulty::Hard.strategy(), Strategy::Search { depth: 4 });
    }

    #[test]
    fn test_difficulty_parse_fallback() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from("expert"), Difficulty::Medium);
        assert_eq!(Difficulty::from(""), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_serde() {
        let hard: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(hard, Difficulty::Hard);
        let unknown: Difficulty = serde_json::from_str("\"nightmare\"").unwrap();
        assert_eq!(unknown, Difficulty::Medium);
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
    }

    #[test]
    fn test_set_difficulty_recomputes_depth() {
        let mut engine = AIEngine::new(9, 9, Difficulty::Easy).unwrap();
        assert_eq!(engine.max_depth(), 2);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert_eq!(engine.max_depth(), 4);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.max_depth(), 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(AIEngine::new(0, 9, Difficulty::Medium).is_err());
        let mut engine = AIEngine::new(9, 9, Difficulty::Medium).unwrap();
        assert_eq!(
            engine.set_board_size(9, 40),
            Err(GomokuError::InvalidDimensions { width: 9, height: 40 })
        );
        assert_eq!(engine.width(), 9);
        assert!(engine.set_board_size(19, 13).is_ok());
        assert_eq!((engine.width(), engine.height()), (19, 13));
    }

    #[test]
    fn test_opening_move_is_center() {
        for (width, height) in [(9, 9), (15, 15), (10, 12), (25, 25)] {
            for difficulty in ALL {
                let mut engine = AIEngine::new(width, height, difficulty).unwrap();
                let mut board = Board::new(width, height).unwrap();
                let result = engine.get_move_with_stats(&mut board, Stone::Black);
                assert_eq!(
                    result.best_move,
                    Some(Pos::new((width / 2) as u8, (height / 2) as u8))
                );
                assert_eq!(result.source, MoveSource::Opening);
            }
        }
    }

    #[test]
    fn test_full_board_no_move() {
        for difficulty in ALL {
            let mut engine = AIEngine::new(9, 9, difficulty).unwrap();
            let mut board = full_board(9, 9);
            let result = engine.get_move_with_stats(&mut board, Stone::White);
            assert_eq!(result.best_move, None);
            assert_eq!(result.source, MoveSource::NoMove);
        }
    }

    #[test]
    fn test_easy_picks_empty_cell() {
        let mut engine = AIEngine::with_seed(9, 9, Difficulty::Easy, 7).unwrap();
        let mut board = Board::new(9, 9).unwrap();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        for _ in 0..20 {
            let pos = engine.get_move(&mut board, Stone::White).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_easy_seed_reproducible() {
        let mut board = Board::new(9, 9).unwrap();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let mut a = AIEngine::with_seed(9, 9, Difficulty::Easy, 42).unwrap();
        let mut b = AIEngine::with_seed(9, 9, Difficulty::Easy, 42).unwrap();
        for _ in 0..5 {
            assert_eq!(a.get_move(&mut board, Stone::White), b.get_move(&mut board, Stone::White));
        }
    }

    #[test]
    fn test_easy_single_empty_cell() {
        let mut board = full_board(9, 9);
        board.remove_stone(Pos::new(3, 6));
        let mut engine = AIEngine::new(9, 9, Difficulty::Easy).unwrap();
        assert_eq!(engine.get_move(&mut board, Stone::Black), Some(Pos::new(3, 6)));
    }

    #[test]
    fn test_medium_tie_break() {
        let mut engine = AIEngine::new(9, 9, Difficulty::Medium).unwrap();
        let mut board = Board::new(9, 9).unwrap();
        board.place_stone(Pos::new(4, 4), Stone::Black);

        // (6, 4), (6, 5), (4, 6), (5, 6) all score 4 open ones + 32; row-major wins
        let result = engine.get_move_with_stats(&mut board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(6, 4)));
        assert_eq!(result.score, 72);
        assert_eq!(result.source, MoveSource::Greedy);
    }

    #[test]
    fn test_medium_completes_five() {
        let mut engine = AIEngine::new(15, 15, Difficulty::Medium).unwrap();
        let mut board = Board::new(15, 15).unwrap();
        for y in 2..6 {
            board.place_stone(Pos::new(0, y), Stone::White);
        }
        board.place_stone(Pos::new(0, 1), Stone::Black);
        assert_eq!(engine.get_move(&mut board, Stone::White), Some(Pos::new(0, 6)));
    }

    #[test]
    fn test_medium_ignores_opponent_threat() {
        // Greedy play only scores its own lines: it does not block
        let mut engine = AIEngine::new(15, 15, Difficulty::Medium).unwrap();
        let mut board = Board::new(15, 15).unwrap();
        for x in 0..4 {
            board.place_stone(Pos::new(x, 0), Stone::Black);
        }
        let pos = engine.get_move(&mut board, Stone::White).unwrap();
        assert_ne!(pos, Pos::new(4, 0));
    }

    #[test]
    fn test_hard_blocks_four() {
        let mut engine = AIEngine::new(7, 7, Difficulty::Hard).unwrap();
        let mut board = Board::new(7, 7).unwrap();
        for x in 0..4 {
            board.place_stone(Pos::new(x, 6), Stone::Black);
        }
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::White);

        let before = board.clone();
        let result = engine.get_move_with_stats(&mut board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(4, 6)));
        assert_eq!(result.source, MoveSource::Search);
        assert!(result.nodes > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_hard_takes_win() {
        let mut engine = AIEngine::new(7, 7, Difficulty::Hard).unwrap();
        let mut board = Board::new(7, 7).unwrap();
        for y in 1..5 {
            board.place_stone(Pos::new(2, y), Stone::White);
        }
        board.place_stone(Pos::new(2, 0), Stone::Black);
        board.place_stone(Pos::new(6, 6), Stone::Black);
        board.place_stone(Pos::new(5, 6), Stone::Black);

        let result = engine.get_move_with_stats(&mut board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(2, 5)));
        // Win found right after the root move, with 3 plies left
        assert_eq!(result.score, WIN_SCORE + 3);
    }

    #[test]
    fn test_unknown_difficulty_plays_like_medium() {
        let mut board = Board::new(9, 9).unwrap();
        board.place_stone(Pos::new(4, 4), Stone::Black);
        board.place_stone(Pos::new(3, 4), Stone::White);

        let mut medium = AIEngine::new(9, 9, Difficulty::Medium).unwrap();
        let mut unknown = AIEngine::new(9, 9, Difficulty::from("impossible")).unwrap();
        assert_eq!(
            medium.get_move(&mut board, Stone::White),
            unknown.get_move(&mut board, Stone::White)
        );
    }
}
