//! Game session state
//!
//! Drives a game the way a front end would: applies human and AI moves,
//! detects wins and draws after each move, keeps the move history for undo and
//! owns the engine configuration.

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, Difficulty};
use crate::error::GomokuError;
use crate::rules::{five_line_at, has_five_at_pos};

/// Smallest board a game can be played on
pub const MIN_GAME_SIZE: usize = 9;
/// Largest board a game can be played on
pub const MAX_GAME_SIZE: usize = 25;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub move_history: Vec<(Pos, Stone)>,
    engine: AIEngine,
}

impl GameState {
    /// Start a game. Black moves first.
    pub fn new(
        width: usize,
        height: usize,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<Self, GomokuError> {
        check_game_size(width, height)?;
        Ok(Self {
            board: Board::new(width, height)?,
            mode,
            current_turn: Stone::Black,
            game_over: None,
            move_history: Vec::new(),
            engine: AIEngine::new(width, height, difficulty)?,
        })
    }

    pub fn reset(&mut self) {
        for (pos, _) in self.move_history.drain(..) {
            self.board.remove_stone(pos);
        }
        self.current_turn = Stone::Black;
        self.game_over = None;
    }

    /// Change the board size and start over.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GomokuError> {
        check_game_size(width, height)?;
        self.board = Board::new(width, height)?;
        self.engine.set_board_size(width, height)?;
        self.move_history.clear();
        self.current_turn = Stone::Black;
        self.game_over = None;
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    /// Check if it's the human's turn
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Attempt to place a stone for the human to move.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Option<&GameResult>, GomokuError> {
        if self.game_over.is_some() {
            return Err(GomokuError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(GomokuError::NotYourTurn);
        }
        self.check_target(pos)?;

        self.execute_move(pos);
        Ok(self.game_over.as_ref())
    }

    /// Let the engine play for the side to move.
    ///
    /// Returns the cell played, or `None` when the board is full.
    pub fn play_ai_move(&mut self) -> Result<Option<Pos>, GomokuError> {
        if self.game_over.is_some() {
            return Err(GomokuError::GameOver);
        }

        let color = self.current_turn;
        let Some(pos) = self.engine.get_move(&mut self.board, color) else {
            return Ok(None);
        };
        self.check_target(pos)?;
        self.execute_move(pos);
        Ok(Some(pos))
    }

    /// Undo the last move, or the last human and AI moves in PvE.
    pub fn undo(&mut self) -> Result<(), GomokuError> {
        if self.move_history.is_empty() {
            return Err(GomokuError::NothingToUndo);
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        for _ in 0..undo_count {
            if let Some((pos, color)) = self.move_history.pop() {
                self.board.remove_stone(pos);
                self.current_turn = color;
            }
        }
        self.game_over = None;
        Ok(())
    }

    fn check_target(&self, pos: Pos) -> Result<(), GomokuError> {
        let (x, y) = (i32::from(pos.x), i32::from(pos.y));
        if !self.board.in_bounds(x, y) {
            return Err(GomokuError::OutOfBounds { x, y });
        }
        if !self.board.is_empty(pos) {
            return Err(GomokuError::Occupied { x: pos.x, y: pos.y });
        }
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));

        if has_five_at_pos(&self.board, pos, color) {
            let line = five_line_at(&self.board, pos, color).unwrap_or_else(|| vec![pos]);
            debug!("{:?} wins with ({}, {})", color, pos.x, pos.y);
            self.game_over = Some(GameResult::Win {
                winner: color,
                line,
            });
            return;
        }

        if self.board.is_full() {
            debug!("board full after {} moves: draw", self.move_history.len());
            self.game_over = Some(GameResult::Draw);
            return;
        }

        self.current_turn = color.opponent();
    }
}

fn check_game_size(width: usize, height: usize) -> Result<(), GomokuError> {
    let range = MIN_GAME_SIZE..=MAX_GAME_SIZE;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(GomokuError::InvalidDimensions { width, height })
    }
}
