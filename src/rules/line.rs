//! Line scanner
//!
//! Walks the line through a cell in one of the four directions, both ways,
//! counting contiguous stones of one color and the open ends beyond them.
//! Evaluation scores the result; win detection only looks at the count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors `(dx, dy)` for line checking (4 directions).
/// Each line is scanned both ways, so the opposite vectors are not needed.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Result of scanning one line through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Contiguous stones including the origin cell
    pub count: u32,
    /// Empty in-bounds cells directly past each end of the run (0-2)
    pub open_ends: u32,
}

/// Scan the line through `pos` along `(dx, dy)` for `color`.
///
/// The origin always counts as one stone, whatever it holds, so an empty
/// cell is scored as if `color` were played there.
pub fn scan_line(board: &Board, pos: Pos, (dx, dy): (i32, i32), color: Stone) -> LineScan {
    let mut count = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        let (dx, dy) = (dx * sign, dy * sign);
        let mut x = i32::from(pos.x) + dx;
        let mut y = i32::from(pos.y) + dy;
        while board.get_xy(x, y) == Some(color) {
            count += 1;
            x += dx;
            y += dy;
        }
        if board.get_xy(x, y) == Some(Stone::Empty) {
            open_ends += 1;
        }
    }

    LineScan { count, open_ends }
}
