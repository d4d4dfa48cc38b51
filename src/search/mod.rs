//! Exact branch-and-bound search for the best scored round trip.
//!
//! - [`PenaltyModel`] — late-finish penalty rule
//! - [`SearchConfig`] — pruning, edge traversal and budget settings
//! - [`BranchAndBound`] — depth-first backtracking with score-bound pruning
//! - [`solve`] — one-call entry point with the default configuration

mod branch_bound;
mod config;
mod penalty;

pub use branch_bound::{solve, BranchAndBound, SearchResult, SearchStats};
pub use config::{EdgeTraversal, SearchConfig};
pub use penalty::PenaltyModel;
