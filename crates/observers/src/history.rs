use roots_core::Observer;
use roots_solvers::equation::bracketed::{Event, Point};

/// Records every evaluated `(x, f(x))` pair in the order the solver made the
/// calls.
///
/// After a solve, [`History::len`] equals the solution's `func_calls`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: Vec<Point>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the evaluated x values.
    #[must_use]
    pub fn x_steps(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Returns the function values, aligned with [`History::x_steps`].
    #[must_use]
    pub fn fx_steps(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fx).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Observer<Event> for History {
    fn observe(&mut self, event: &Event) {
        self.points.push(event.point());
    }
}
