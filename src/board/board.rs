//! Board structure with configurable dimensions

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_DIMENSION};
use crate::error::GomokuError;

/// Game board of `width` columns and `height` rows.
///
/// Cells are stored row-major in two bitboards, so every enumeration the
/// engine performs (empty cells, occupied cells) is top row first, left to
/// right. That order is the tie-break for all "first best" selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Create an empty board.
    ///
    /// Both dimensions must be in `1..=MAX_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self, GomokuError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(GomokuError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            black: Bitboard::new(),
            white: Bitboard::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = pos.to_index(self.width);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` off the board
    #[inline]
    pub fn get_xy(&self, x: i32, y: i32) -> Option<Stone> {
        if self.in_bounds(x, y) {
            Some(self.get(Pos::new(x as u8, y as u8)))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.width);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone. Placing `Empty` is a no-op; use `remove_stone` to clear.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.width);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = pos.to_index(self.width);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cell_count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        let occupied = self.black | self.white;
        (0..self.cell_count())
            .filter(|&idx| !occupied.get(idx))
            .map(|idx| Pos::from_index(idx, self.width))
            .collect()
    }

    /// Occupied cells with their owner, in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (self.black | self.white).iter_ones().map(move |idx| {
            let stone = if self.black.get(idx) {
                Stone::Black
            } else {
                Stone::White
            };
            (Pos::from_index(idx, self.width), stone)
        })
    }
}
