//! Map and course file loaders.
//!
//! - [`read_map`] / [`parse_map`] — `controls N c1 .. cN` header followed by
//!   `src dst forward reverse` connection lines
//! - [`read_course`] / [`parse_course`] — `timelimit minutes rate` header
//!   followed by `code points open close` control lines

mod course;
mod error;
mod map;

pub use course::{parse_course, read_course};
pub use error::LoadError;
pub use map::{parse_map, read_map, Network};
