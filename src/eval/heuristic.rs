//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores are built from three pieces:
//! - `score_direction`: one line through one cell for one color
//! - `score_position`: the four lines plus a center-proximity bonus
//! - `score_board`: the static evaluation used at search leaves

use crate::board::{Board, Pos, Stone};
use crate::rules::{scan_line, DIRECTIONS};

use super::patterns::score_line;

/// Score the line through `pos` along `dir` as if `color` stood on `pos`.
#[inline]
pub fn score_direction(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> i32 {
    let scan = scan_line(board, pos, dir, color);
    score_line(scan.count, scan.open_ends)
}

/// Center-proximity bonus: `(w + h - manhattan distance to the geometric
/// center) * 2`.
///
/// The center sits at `(w / 2, h / 2)` in real numbers. Doubling every term
/// keeps the arithmetic in integers without rounding.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub fn center_bonus(board: &Board, pos: Pos) -> i32 {
    let w = board.width() as i32;
    let h = board.height() as i32;
    let dist2 = (2 * i32::from(pos.x) - w).abs() + (2 * i32::from(pos.y) - h).abs();
    2 * (w + h) - dist2
}

/// Value of `pos` for `color`: all four line scores plus the center bonus.
///
/// Works on empty cells too, which is how move candidates are ranked.
#[must_use]
pub fn score_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    let lines: i32 = DIRECTIONS
        .iter()
        .map(|&dir| score_direction(board, pos, dir, color))
        .sum();
    lines + center_bonus(board, pos)
}

/// Evaluate the board from the perspective of the given color.
///
/// Every own stone adds its `score_position`, every opponent stone subtracts
/// the opponent's `score_position`. Empty cells contribute nothing.
#[must_use]
pub fn score_board(board: &Board, color: Stone) -> i32 {
    board
        .occupied()
        .map(|(pos, stone)| {
            let value = score_position(board, pos, stone);
            if stone == color {
                value
            } else {
                -value
            }
        })
        .sum()
}
