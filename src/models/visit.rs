//! Visit records produced by the search.

use serde::{Deserialize, Serialize};

/// A single stop on a scored trip.
///
/// `id` is the 1-based position of the control in the course listing; the
/// synthetic return to the origin uses id 0 and scores nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Code of the control (or origin) reached.
    pub code: String,
    /// 1-based course position, 0 for the return to the origin.
    pub id: usize,
    /// Clock time of the visit, after any waiting.
    pub time: f64,
    /// Points credited for this visit.
    pub points: u32,
}

impl Visit {
    /// Creates a control visit.
    pub fn new(code: impl Into<String>, id: usize, time: f64, points: u32) -> Self {
        Self {
            code: code.into(),
            id,
            time,
            points,
        }
    }

    /// Creates the return-to-origin visit that closes a trip.
    pub fn finish(code: impl Into<String>, time: f64) -> Self {
        Self::new(code, 0, time, 0)
    }

    /// Returns `true` for the return-to-origin visit.
    pub fn is_finish(&self) -> bool {
        self.id == 0
    }
}
