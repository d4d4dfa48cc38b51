//! Control and time window types.

use serde::{Deserialize, Serialize};

/// The period during which a visit to a control earns its points.
///
/// Arriving before `open` means waiting until it opens; a visit after
/// `close` is still allowed but scores nothing.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::TimeWindow;
///
/// let tw = TimeWindow::new(5.0, 10.0).unwrap();
/// assert_eq!(tw.visit_time(3.0), 5.0);
/// assert_eq!(tw.visit_time(7.5), 7.5);
/// assert!(tw.is_missed(11.0));
/// assert!(TimeWindow::new(10.0, 5.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    open: f64,
    close: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `open > close` or either value is non-finite.
    pub fn new(open: f64, close: f64) -> Option<Self> {
        if !open.is_finite() || !close.is_finite() || open > close {
            return None;
        }
        Some(Self { open, close })
    }

    /// Opening time.
    pub fn open(&self) -> f64 {
        self.open
    }

    /// Closing time.
    pub fn close(&self) -> f64 {
        self.close
    }

    /// Clock time at which a visit arriving at `arrival` takes place.
    pub fn visit_time(&self, arrival: f64) -> f64 {
        arrival.max(self.open)
    }

    /// Returns `true` if a visit at `visit_time` is too late to score.
    pub fn is_missed(&self, visit_time: f64) -> bool {
        visit_time > self.close
    }
}

/// A scorable checkpoint.
///
/// The code must match the payload of a vertex in the course graph.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Control, TimeWindow};
///
/// let c = Control::new("31", 20, TimeWindow::new(0.0, 45.0).unwrap());
/// assert_eq!(c.code(), "31");
/// assert_eq!(c.points_at(40.0), 20);
/// assert_eq!(c.points_at(46.0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    code: String,
    points: u32,
    window: TimeWindow,
}

impl Control {
    /// Creates a new control.
    pub fn new(code: impl Into<String>, points: u32, window: TimeWindow) -> Self {
        Self {
            code: code.into(),
            points,
            window,
        }
    }

    /// Identity code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Point value when visited inside the window.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Scoring window.
    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// Opening time.
    pub fn open_time(&self) -> f64 {
        self.window.open()
    }

    /// Closing time.
    pub fn close_time(&self) -> f64 {
        self.window.close()
    }

    /// Points credited for a visit at `visit_time` (zero once closed).
    pub fn points_at(&self, visit_time: f64) -> u32 {
        if self.window.is_missed(visit_time) {
            0
        } else {
            self.points
        }
    }
}
