//! Board representation for Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Largest supported width or height (25x25)
pub const MAX_DIMENSION: usize = 25;
pub const MAX_CELLS: usize = MAX_DIMENSION * MAX_DIMENSION; // 625

/// Stone colors. The numeric values follow the usual 0/1/2 cell encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Stone {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Stone {
    /// Get opponent color.
    ///
    /// # Panics
    /// `Empty` has no opponent; calling this on it is a caller bug.
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => panic!("Stone::Empty has no opponent"),
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_u8(value: u8) -> Option<Stone> {
        match value {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }
}

/// Position on the board: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < MAX_DIMENSION && (y as usize) < MAX_DIMENSION);
        Self { x, y }
    }

    /// Row-major index on a board of the given width
    #[inline]
    pub fn to_index(self, width: usize) -> usize {
        self.y as usize * width + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, width: usize) -> Self {
        Self {
            x: (idx % width) as u8,
            y: (idx / width) as u8,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
