//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for line patterns, keyed by the
//! run length and the number of open ends found by the line scanner.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
    /// Single stone with both sides free
    pub const OPEN_ONE: i32 = 10;
}

/// Score a scanned run.
///
/// Anything not listed scores 0, including a four with both ends blocked.
#[inline]
pub fn score_line(count: u32, open_ends: u32) -> i32 {
    match (count, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}
