//! Course loader.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{LoadError, Network};
use crate::models::{Control, Course, TimeWindow};

/// Reads a course file, adding any unknown control code to `network`.
pub fn read_course(path: impl AsRef<Path>, network: &mut Network) -> Result<Course, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_course(BufReader::new(file), network)
}

/// Parses a course description.
///
/// The header `timelimit minutes rate` sets the time limit and the penalty
/// per late minute. A `controls ...` listing line is ignored. Every line with
/// exactly four fields, `code points open close`, adds a control in listing
/// order; a code missing from `network` is inserted as a new, unconnected
/// vertex. Lines with any other number of fields are skipped.
///
/// # Examples
///
/// ```
/// use u_orienteering::io::{parse_course, Network};
///
/// let mut net = Network::new();
/// let input = "timelimit 60 2\ncontrols 2 A B\nA 10 0 30\nB 20 15 60\n";
/// let course = parse_course(input.as_bytes(), &mut net).unwrap();
/// assert_eq!(course.len(), 2);
/// assert_eq!(course.time_limit(), 60.0);
/// assert!(net.vertex("B").is_some());
/// ```
pub fn parse_course<R: BufRead>(reader: R, network: &mut Network) -> Result<Course, LoadError> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.unwrap_or_default();
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 || fields[0] != "timelimit" {
        return Err(LoadError::MissingHeader {
            line: 1,
            expected: "timelimit",
            found: header.clone(),
        });
    }
    let time_limit = parse_number(fields[1], 1, "time limit")?;
    let rate = parse_number(fields[2], 1, "penalty rate")?;
    let mut course = Course::new(time_limit, rate).ok_or(LoadError::InvalidLimits { line: 1 })?;

    let mut seen = HashSet::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() == Some(&"controls") {
            continue;
        }
        if fields.len() != 4 {
            if !fields.is_empty() {
                tracing::debug!(line = line_no, "skipping course line without four fields");
            }
            continue;
        }

        let code = fields[0];
        let points: u32 = fields[1].parse().map_err(|_| LoadError::InvalidNumber {
            line: line_no,
            field: "points",
            value: fields[1].to_string(),
        })?;
        let open = parse_number(fields[2], line_no, "open time")?;
        let close = parse_number(fields[3], line_no, "close time")?;
        let window = TimeWindow::new(open, close).ok_or_else(|| LoadError::InvalidWindow {
            line: line_no,
            code: code.to_string(),
            open,
            close,
        })?;
        if !seen.insert(code.to_string()) {
            return Err(LoadError::DuplicateControl {
                line: line_no,
                code: code.to_string(),
            });
        }

        if network.vertex(code).is_none() {
            tracing::debug!(line = line_no, code, "control not on the map; adding vertex");
        }
        network.ensure_vertex(code);
        course.push_control(Control::new(code, points, window));
    }

    tracing::debug!(
        controls = course.len(),
        time_limit = course.time_limit(),
        "course loaded"
    );
    Ok(course)
}

fn parse_number(text: &str, line: usize, field: &'static str) -> Result<f64, LoadError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LoadError::InvalidNumber {
            line,
            field,
            value: text.to_string(),
        }),
    }
}
