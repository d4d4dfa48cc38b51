//! Domain model types for scored orienteering.
//!
//! Controls with point values and time windows, the course that lists them
//! together with the time limit and penalty rate, and the visit and solution
//! records produced by the search.

mod control;
mod course;
mod solution;
mod visit;

pub use control::{Control, TimeWindow};
pub use course::Course;
pub use solution::Solution;
pub use visit::Visit;
