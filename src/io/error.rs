//! Loader errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::GraphError;

/// Failure while reading a map or course description.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading from the input failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    /// The first line is not the expected header.
    #[error("line {line}: expected `{expected}` header, found {found:?}")]
    MissingHeader {
        /// Line number.
        line: usize,
        /// Expected header keyword.
        expected: &'static str,
        /// What was found instead.
        found: String,
    },
    /// A field could not be parsed as a number of the right kind.
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        /// Line number.
        line: usize,
        /// Name of the field.
        field: &'static str,
        /// Offending text.
        value: String,
    },
    /// A travel time is negative.
    #[error("line {line}: travel time {value} is negative")]
    NegativeTime {
        /// Line number.
        line: usize,
        /// Offending value.
        value: f64,
    },
    /// The time limit or penalty rate is negative or non-finite.
    #[error("line {line}: time limit and penalty rate must be finite and non-negative")]
    InvalidLimits {
        /// Line number.
        line: usize,
    },
    /// A control's window closes before it opens.
    #[error("line {line}: control {code} has invalid window [{open}, {close}]")]
    InvalidWindow {
        /// Line number.
        line: usize,
        /// Control code.
        code: String,
        /// Opening time.
        open: f64,
        /// Closing time.
        close: f64,
    },
    /// The same control code is listed twice.
    #[error("line {line}: control {code} is listed more than once")]
    DuplicateControl {
        /// Line number.
        line: usize,
        /// Control code.
        code: String,
    },
    /// The pace multiplier is not a positive finite number.
    #[error("pace must be a positive number, got {0}")]
    InvalidPace(f64),
    /// A connection could not be added to the graph.
    #[error("line {line}: {source}")]
    Connection {
        /// Line number.
        line: usize,
        /// Graph error.
        #[source]
        source: GraphError,
    },
}
