//! Solution rendering.
//!
//! The [`Display`](std::fmt::Display) impl of [`Solution`] prints the totals
//! block followed by the visits, three per line:
//!
//! ```text
//! Total Time:	10.0
//! Total Score:	10
//! Raw Score:	10
//! Total Penalty:	0
//!
//! Controls Visited (end -> start) :
//!  -> { ID: 1 | Code: A | Time: 5.0 | Points: 10 }  -> { ID: 0 | Code: start | Time: 10.0 | Points: 0 }
//! ```

use std::fmt;

use crate::models::{Solution, Visit};

/// Visits printed on one line.
const VISITS_PER_LINE: usize = 3;

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Time:\t{:?}", self.total_time())?;
        writeln!(f, "Total Score:\t{}", self.total_score())?;
        writeln!(f, "Raw Score:\t{}", self.raw_score())?;
        writeln!(f, "Total Penalty:\t{}", self.penalty())?;
        writeln!(f)?;
        writeln!(f, "Controls Visited (end -> start) :")?;

        for (i, visit) in self.visits().iter().enumerate() {
            if (i + 1) % VISITS_PER_LINE == 0 {
                writeln!(f, " -> {} ->", VisitEntry(visit))?;
            } else {
                write!(f, " -> {} ", VisitEntry(visit))?;
            }
        }
        Ok(())
    }
}

struct VisitEntry<'a>(&'a Visit);

impl fmt::Display for VisitEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{{ ID: {} | Code: {} | Time: {:.1} | Points: {} }}",
            v.id,
            v.code,
            round_half_up(v.time),
            v.points
        )
    }
}

/// Rounds to one decimal, ties away from zero.
fn round_half_up(time: f64) -> f64 {
    (time * 10.0).round() / 10.0
}

/// Renders a solution as pretty-printed JSON.
pub fn to_json(solution: &Solution) -> serde_json::Result<String> {
    serde_json::to_string_pretty(solution)
}

/// Parses a solution previously rendered with [`to_json`].
pub fn from_json(text: &str) -> serde_json::Result<Solution> {
    serde_json::from_str(text)
}
