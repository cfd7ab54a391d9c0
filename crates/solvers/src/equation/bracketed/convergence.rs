use super::{Config, Point};

/// The dual stopping test applied after every iterate.
///
/// A solve converges when `|f(x)| < epsilon` or when the bracket is narrower
/// than `xtol`. The function-value test is the documented contract; the width
/// test ends solves whose values never get small, such as a jump across zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Tolerances {
    epsilon: f64,
    xtol: f64,
}

impl Tolerances {
    pub(super) fn new(config: &Config) -> Self {
        Self {
            epsilon: config.epsilon(),
            xtol: config.xtol(),
        }
    }

    pub(super) fn xtol(&self) -> f64 {
        self.xtol
    }

    /// Returns true if `fx` satisfies the function-value tolerance.
    pub(super) fn is_root(&self, fx: f64) -> bool {
        fx.abs() < self.epsilon
    }

    /// Returns true if a bracket of this width satisfies the x tolerance.
    pub(super) fn is_narrow(&self, width: f64) -> bool {
        width.abs() < self.xtol
    }

    pub(super) fn is_converged(&self, point: Point, width: f64) -> bool {
        self.is_root(point.fx) || self.is_narrow(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tolerances(epsilon: f64, xtol: f64) -> Tolerances {
        Tolerances::new(&Config::new(epsilon, xtol, 10).expect("valid config"))
    }

    #[test]
    fn function_value_test_is_strict() {
        let tol = tolerances(1e-6, 1e-12);
        assert!(tol.is_root(0.0));
        assert!(tol.is_root(-5e-7));
        assert!(!tol.is_root(1e-6));
        assert!(!tol.is_root(f64::INFINITY));
    }

    #[test]
    fn width_test_ignores_orientation() {
        let tol = tolerances(1e-6, 1e-3);
        assert!(tol.is_narrow(5e-4));
        assert!(tol.is_narrow(-5e-4));
        assert!(!tol.is_narrow(1e-3));
    }

    #[test]
    fn either_test_converges() {
        let tol = tolerances(1e-6, 1e-3);
        assert!(tol.is_converged(Point::new(1.0, 1e-9), 10.0));
        assert!(tol.is_converged(Point::new(1.0, 10.0), 1e-4));
        assert!(!tol.is_converged(Point::new(1.0, 10.0), 10.0));
    }
}
