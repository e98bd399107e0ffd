//! Line scanning and win conditions for five-in-a-row
//!
//! This module implements:
//! - The line scanner shared by evaluation and win detection
//! - Win conditions (5 or more in a row, overlines allowed)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{scan_line, LineScan, DIRECTIONS};
pub use win::{find_winner, five_line_at, has_five_at_pos};
