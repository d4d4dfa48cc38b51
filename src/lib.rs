//! # u-orienteering
//!
//! Time-windowed score orienteering: find the round trip from a fixed origin
//! through a subset of controls that maximizes points minus the late-finish
//! penalty, by exhaustive branch-and-bound search.
//!
//! ## Modules
//!
//! - [`graph`] — Undirected adjacency-list multigraph with typed handles
//! - [`models`] — Domain model types (Control, TimeWindow, Course, Visit, Solution)
//! - [`search`] — Branch-and-bound search engine and its configuration
//! - [`io`] — Map and course file loaders
//! - [`report`] — Text and JSON rendering of solutions
//!
//! ## Example
//!
//! ```
//! use u_orienteering::io::{parse_course, parse_map};
//! use u_orienteering::search::solve;
//!
//! let mut network = parse_map("controls 1 A\nstart A 5 5\n".as_bytes(), 1.0).unwrap();
//! let course = parse_course("timelimit 20 1\nA 10 0 100\n".as_bytes(), &mut network).unwrap();
//!
//! let best = solve(network.graph(), &course, network.start());
//! assert_eq!(best.total_score(), 10);
//! assert_eq!(best.control_codes(), vec!["A"]);
//! ```

pub mod graph;
pub mod io;
pub mod models;
pub mod report;
pub mod search;
