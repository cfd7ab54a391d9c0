/// An evaluated point: `x` and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The function value at x.
    pub fx: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }
}
