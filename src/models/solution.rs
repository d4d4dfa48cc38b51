//! Best-trip record.

use serde::{Deserialize, Serialize};

use super::Visit;

/// A completed round trip from the origin back to the origin.
///
/// The last visit is the synthetic return to the origin. The default value
/// is the all-zero record returned when no trip beats staying home.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Solution, Visit};
///
/// let sol = Solution::new(
///     vec![Visit::new("A", 1, 5.0, 10), Visit::finish("start", 10.0)],
///     10.0,
///     10,
///     0,
/// );
/// assert_eq!(sol.total_score(), 10);
/// assert_eq!(sol.num_controls(), 1);
/// assert_eq!(sol.control_codes(), vec!["A"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solution {
    visits: Vec<Visit>,
    total_time: f64,
    total_score: i64,
    raw_score: i64,
    penalty: i64,
}

impl Solution {
    /// Creates a solution; the net score is `raw_score - penalty`.
    pub fn new(visits: Vec<Visit>, total_time: f64, raw_score: i64, penalty: i64) -> Self {
        Self {
            visits,
            total_time,
            total_score: raw_score - penalty,
            raw_score,
            penalty,
        }
    }

    /// Visits in trip order, ending with the return to the origin.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Clock time of the return to the origin.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Net score: raw score minus penalty.
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Sum of credited points.
    pub fn raw_score(&self) -> i64 {
        self.raw_score
    }

    /// Late-finish penalty.
    pub fn penalty(&self) -> i64 {
        self.penalty
    }

    /// Returns `true` for the all-zero record (no trip recorded).
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Number of control visits (the return is not counted).
    pub fn num_controls(&self) -> usize {
        self.visits.iter().filter(|v| !v.is_finish()).count()
    }

    /// Codes of the visited controls in trip order.
    pub fn control_codes(&self) -> Vec<&str> {
        self.visits
            .iter()
            .filter(|v| !v.is_finish())
            .map(|v| v.code.as_str())
            .collect()
    }
}
