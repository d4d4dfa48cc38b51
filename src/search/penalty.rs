//! Late-finish penalty.

use serde::{Deserialize, Serialize};

/// Per-minute penalty for returning after the time limit.
///
/// Both factors are truncated to integers before multiplying: the overtime
/// is rounded up to whole started minutes and the rate is truncated toward
/// zero, so a fractional rate such as `1.5` charges `1` per minute.
///
/// # Examples
///
/// ```
/// use u_orienteering::search::PenaltyModel;
///
/// let pm = PenaltyModel::new(60.0, 2.0);
/// assert_eq!(pm.penalty(65.7), 12);
/// assert_eq!(pm.penalty(59.0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyModel {
    time_limit: f64,
    penalty_per_minute: f64,
}

impl PenaltyModel {
    /// Creates a penalty rule.
    pub fn new(time_limit: f64, penalty_per_minute: f64) -> Self {
        Self {
            time_limit,
            penalty_per_minute,
        }
    }

    /// Minutes allowed before the penalty applies.
    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    /// Nominal rate per minute, before truncation.
    pub fn penalty_per_minute(&self) -> f64 {
        self.penalty_per_minute
    }

    /// Started minutes over the limit when finishing at `time`.
    pub fn overtime_minutes(&self, time: f64) -> i64 {
        (time - self.time_limit).max(0.0).ceil() as i64
    }

    /// Rate actually charged per minute.
    pub fn rate(&self) -> i64 {
        self.penalty_per_minute as i64
    }

    /// Penalty for finishing at `time`.
    pub fn penalty(&self, time: f64) -> i64 {
        self.overtime_minutes(time).saturating_mul(self.rate())
    }
}
