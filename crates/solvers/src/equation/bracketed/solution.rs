use std::fmt;

use super::{Point, config::DEFAULT_DEBUG_PRECISION};

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// The function values at the initial endpoints have the same sign.
    NotBracketed,

    /// Reached the iteration limit without converging.
    MaxIterations,
}

impl Status {
    /// Returns the human-readable message for this status.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Status::Converged => "Solution converged.",
            Status::NotBracketed => "Root is not bracketed.",
            Status::MaxIterations => "Maximum iterations exceeded.",
        }
    }
}

/// The outcome of a bracketing solve.
///
/// Built once when the solve ends and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    status: Status,
    point: Option<Point>,
    iterations: usize,
    func_calls: usize,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        point: Option<Point>,
        iterations: usize,
        func_calls: usize,
    ) -> Self {
        Self {
            status,
            point,
            iterations,
            func_calls,
        }
    }

    /// Returns how the solve ended.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the root estimate, or `None` if the root was not bracketed.
    #[must_use]
    pub fn x0(&self) -> Option<f64> {
        self.point.map(|p| p.x)
    }

    /// Returns the function value at [`x0`](Self::x0).
    #[must_use]
    pub fn fx0(&self) -> Option<f64> {
        self.point.map(|p| p.fx)
    }

    /// Returns true if the solve converged.
    #[must_use]
    pub fn convergence(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of times the function was called.
    #[must_use]
    pub fn func_calls(&self) -> usize {
        self.func_calls
    }

    /// Returns the message describing the outcome.
    #[must_use]
    pub fn msg(&self) -> &'static str {
        self.status.message()
    }

    /// Returns a displayable table of the solution with floats rendered to
    /// `precision` decimals.
    #[must_use]
    pub fn report(&self, precision: usize) -> Report<'_> {
        Report {
            solution: self,
            precision,
        }
    }
}

/// Renders the solution with the default precision, or with the formatter's
/// precision if one is given (`format!("{solution:.4}")`).
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DEBUG_PRECISION);
        fmt::Display::fmt(&self.report(precision), f)
    }
}

/// A right-aligned, human-readable table of a [`Solution`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
    precision: usize,
}

const LABEL_WIDTH: usize = 10;

impl Report<'_> {
    fn write_float(&self, f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
        let precision = self.precision;
        let width = precision + 8;
        match value {
            Some(v) => write!(f, "{label:>LABEL_WIDTH$} : {v:>width$.precision$}"),
            None => write!(f, "{label:>LABEL_WIDTH$} : None"),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.solution;
        writeln!(f, "{:>LABEL_WIDTH$} : {}", "converged", s.convergence())?;
        writeln!(f, "{:>LABEL_WIDTH$} : {}", "message", s.msg())?;
        writeln!(f, "{:>LABEL_WIDTH$} : {:>3}", "iterations", s.iterations())?;
        writeln!(f, "{:>LABEL_WIDTH$} : {:>3}", "func calls", s.func_calls())?;
        self.write_float(f, "x0", s.x0())?;
        writeln!(f)?;
        self.write_float(f, "f(x0)", s.fx0())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converged_solution_exposes_fields() {
        let solution = Solution::new(Status::Converged, Some(Point::new(1.5, -0.25)), 4, 6);

        assert!(solution.convergence());
        assert_eq!(solution.x0(), Some(1.5));
        assert_eq!(solution.fx0(), Some(-0.25));
        assert_eq!(solution.iterations(), 4);
        assert_eq!(solution.func_calls(), 6);
        assert_eq!(solution.msg(), "Solution converged.");
    }

    #[test]
    fn not_bracketed_has_no_point() {
        let solution = Solution::new(Status::NotBracketed, None, 0, 2);

        assert!(!solution.convergence());
        assert_eq!(solution.x0(), None);
        assert_eq!(solution.fx0(), None);
        assert_eq!(solution.msg(), "Root is not bracketed.");
    }

    #[test]
    fn report_right_aligns_fields() {
        let solution = Solution::new(Status::Converged, Some(Point::new(1.5, -0.25)), 4, 6);

        let expected = concat!(
            " converged : true\n",
            "   message : Solution converged.\n",
            "iterations :   4\n",
            "func calls :   6\n",
            "        x0 :       1.5000\n",
            "     f(x0) :      -0.2500",
        );
        assert_eq!(solution.report(4).to_string(), expected);
    }

    #[test]
    fn report_prints_none_without_root() {
        let solution = Solution::new(Status::NotBracketed, None, 0, 2);

        let text = solution.report(3).to_string();
        assert!(text.contains("        x0 : None"));
        assert!(text.contains("     f(x0) : None"));
        assert!(text.contains("   message : Root is not bracketed."));
    }

    #[test]
    fn display_honours_formatter_precision() {
        let solution = Solution::new(Status::MaxIterations, Some(Point::new(0.25, 2.0)), 5, 7);

        assert!(format!("{solution:.2}").contains("x0 :       0.25"));
        assert!(solution.to_string().contains("0.2500000000"));
    }
}
