use std::fmt::Write;

use roots_core::Observer;
use roots_solvers::equation::bracketed::{Config, DEFAULT_DEBUG_PRECISION, Event, Point};

/// Logs the bracket at every step through `tracing` at DEBUG level.
///
/// One line is logged once both endpoints are evaluated (iteration 0) and
/// then one per evaluation inside the loop, showing the bracket the point was
/// chosen from. See [`format_line`] for the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceObserver {
    precision: usize,
    first: Option<Point>,
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new(DEFAULT_DEBUG_PRECISION)
    }
}

impl TraceObserver {
    /// Creates an observer rendering floats with `precision` decimals.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            first: None,
        }
    }

    /// Creates an observer using the config's `debug_precision`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.debug_precision())
    }

    /// Returns the line this observer logs for `event`, if any.
    ///
    /// The first endpoint produces no line; it is held until the second one
    /// arrives.
    pub fn line(&mut self, event: &Event) -> Option<String> {
        match *event {
            Event::Endpoint { point, func_calls } => match self.first.take() {
                None => {
                    self.first = Some(point);
                    None
                }
                Some(first) => {
                    let (left, right) = if first.x <= point.x {
                        (first, point)
                    } else {
                        (point, first)
                    };
                    Some(format_line(0, func_calls, left, right, self.precision))
                }
            },
            Event::Iterate {
                iter,
                func_calls,
                bracket,
                ..
            } => Some(format_line(
                iter,
                func_calls,
                bracket.left(),
                bracket.right(),
                self.precision,
            )),
        }
    }
}

impl Observer<Event> for TraceObserver {
    fn observe(&mut self, event: &Event) {
        if let Some(line) = self.line(event) {
            tracing::debug!("{line}");
        }
    }
}

/// Formats one trace line:
///
/// ```text
/// Iter:   1; fcall:   3; x=[ 0.0000, 1.0000]; Δx= 1.0000; f=[-1.0000, +1.0000]
/// ```
///
/// Non-negative values get a leading space so columns line up, except the
/// right function value, which always shows its sign.
#[must_use]
pub fn format_line(
    iter: usize,
    func_calls: usize,
    left: Point,
    right: Point,
    precision: usize,
) -> String {
    let mut line = format!("Iter: {iter:3}; fcall: {func_calls:3}; x=[");
    push_spaced(&mut line, left.x, precision);
    line.push(',');
    push_spaced(&mut line, right.x, precision);
    line.push_str("]; Δx=");
    push_spaced(&mut line, right.x - left.x, precision);
    line.push_str("; f=[");
    push_spaced(&mut line, left.fx, precision);
    let _ = write!(line, ", {:+.precision$}]", right.fx);
    line
}

/// Appends `value` with a leading space in place of a plus sign.
fn push_spaced(line: &mut String, value: f64, precision: usize) {
    if value.is_sign_negative() {
        let _ = write!(line, "{value:.precision$}");
    } else {
        let _ = write!(line, " {value:.precision$}");
    }
}
