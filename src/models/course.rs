//! Course definition: controls plus time limit and penalty rate.

use serde::{Deserialize, Serialize};

use super::Control;
use crate::search::PenaltyModel;

/// A scored course.
///
/// The origin is not a control: it has no score and no window.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Control, Course, TimeWindow};
///
/// let course = Course::new(60.0, 2.0)
///     .unwrap()
///     .with_control(Control::new("A", 10, TimeWindow::new(0.0, 30.0).unwrap()))
///     .with_control(Control::new("B", 20, TimeWindow::new(10.0, 50.0).unwrap()));
/// assert_eq!(course.len(), 2);
/// assert_eq!(course.total_points(), 30);
/// assert_eq!(course.latest_close(), 50.0);
/// assert_eq!(course.position("B"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    time_limit: f64,
    penalty_per_minute: f64,
    controls: Vec<Control>,
}

impl Course {
    /// Creates a course without controls.
    ///
    /// Returns `None` if either value is negative or non-finite.
    pub fn new(time_limit: f64, penalty_per_minute: f64) -> Option<Self> {
        if !time_limit.is_finite() || time_limit < 0.0 {
            return None;
        }
        if !penalty_per_minute.is_finite() || penalty_per_minute < 0.0 {
            return None;
        }
        Some(Self {
            time_limit,
            penalty_per_minute,
            controls: Vec::new(),
        })
    }

    /// Appends a control to the listing.
    pub fn with_control(mut self, control: Control) -> Self {
        self.push_control(control);
        self
    }

    /// Appends a control to the listing.
    pub fn push_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// Minutes allowed before the penalty starts accruing.
    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    /// Points deducted per started minute over the limit.
    pub fn penalty_per_minute(&self) -> f64 {
        self.penalty_per_minute
    }

    /// Controls in listing order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Returns `true` if the course has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Index of the control with the given code.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.code() == code)
    }

    /// Latest closing time over all controls, 0 for an empty course.
    pub fn latest_close(&self) -> f64 {
        self.controls
            .iter()
            .map(Control::close_time)
            .fold(0.0, f64::max)
    }

    /// Sum of all control point values.
    pub fn total_points(&self) -> i64 {
        self.controls.iter().map(|c| i64::from(c.points())).sum()
    }

    /// Penalty rule of this course.
    pub fn penalty_model(&self) -> PenaltyModel {
        PenaltyModel::new(self.time_limit, self.penalty_per_minute)
    }
}
