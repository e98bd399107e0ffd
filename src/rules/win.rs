//! Win condition checking
//!
//! Five or more stones in a row wins (overlines allowed).
//!
//! Two forms are provided. `has_five_at_pos` only looks at the lines through
//! one cell and is what the game uses after each move. `find_winner` scans the
//! whole board and is the terminal test of the search. For a board without a
//! winner plus one new stone, both agree.

use crate::board::{Board, Pos, Stone};

use super::line::{scan_line, DIRECTIONS};

/// Fast five-in-a-row check through a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| scan_line(board, pos, dir, color).count >= 5)
}

/// Scan every stone in row-major order and return the owner of the first
/// five-in-a-row found.
pub fn find_winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .find(|&(pos, stone)| has_five_at_pos(board, pos, stone))
        .map(|(_, stone)| stone)
}

/// Cells of the winning run through `pos`, ordered from its negative end.
///
/// Returns `None` when `pos` is not part of a five.
pub fn five_line_at(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    for &(dx, dy) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let mut x = i32::from(pos.x) - dx;
        let mut y = i32::from(pos.y) - dy;
        while board.get_xy(x, y) == Some(color) {
            line.insert(0, Pos::new(x as u8, y as u8));
            x -= dx;
            y -= dy;
        }

        // Extend in positive direction
        x = i32::from(pos.x) + dx;
        y = i32::from(pos.y) + dy;
        while board.get_xy(x, y) == Some(color) {
            line.push(Pos::new(x as u8, y as u8));
            x += dx;
            y += dy;
        }

        if line.len() >= 5 {
            return Some(line);
        }
    }
    None
}
