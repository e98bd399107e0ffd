//! Root move candidates
//!
//! Ranks empty cells by how much they are worth to either side, so the root of
//! the search only branches on the most promising few.

use crate::board::{Board, Pos, Stone};
use crate::eval::score_position;

/// Maximum moves to consider at the search root
pub const ROOT_CANDIDATES: usize = 10;

/// Combined appeal of a cell: its value for Black plus its value for White.
///
/// A cell that extends one side's line is usually also the cell the other
/// side needs to block.
#[inline]
pub fn candidate_score(board: &Board, pos: Pos) -> i32 {
    score_position(board, pos, Stone::Black) + score_position(board, pos, Stone::White)
}

/// The `limit` best cells of `empty`, highest combined score first.
///
/// The sort is stable, so equal scores keep the order of `empty`
/// (row-major when it comes from `Board::empty_cells`).
pub fn top_candidates(board: &Board, empty: &[Pos], limit: usize) -> Vec<Pos> {
    let mut scored: Vec<(Pos, i32)> = empty
        .iter()
        .map(|&pos| (pos, candidate_score(board, pos)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(pos, _)| pos).collect()
}
