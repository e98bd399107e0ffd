//! Search module for Gomoku AI
//!
//! Contains:
//! - Root candidate selection by combined heuristic appeal
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
pub use candidates::{candidate_score, top_candidates, ROOT_CANDIDATES};
