use thiserror::Error;

use super::Point;

/// Errors that can occur when validating bracket endpoints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Function values at the endpoints have the same strict sign.
    #[error("no sign change")]
    NoSignChange,
}

/// An interval `[left, right]` whose function values straddle zero.
///
/// Every solver step hands a new point to the bracket, which replaces the
/// endpoint sharing that point's sign. The sign change is therefore kept for
/// as long as the solve runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a validated bracket from two evaluated endpoints.
    ///
    /// The endpoints may be given in either order. An endpoint whose value is
    /// exactly zero brackets a root with anything.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if both values are strictly
    /// positive or both are strictly negative.
    pub(super) fn new(a: Point, b: Point) -> Result<Self, BracketError> {
        if !straddles_zero(a.fx, b.fx) {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self::ordered(a, b))
    }

    /// Orders two points into a bracket without checking their signs.
    pub(super) fn ordered(a: Point, b: Point) -> Self {
        if a.x <= b.x {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> Point {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> Point {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the midpoint of the bracket.
    ///
    /// Halves each endpoint before adding so that the sum cannot overflow.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.left.x + 0.5 * self.right.x
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right.x - self.left.x
    }

    /// Returns true if `x` lies strictly inside the bracket.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left.x < x && x < self.right.x
    }

    /// Shrinks the bracket by replacing the endpoint that shares `point`'s sign.
    pub(super) fn shrink(&mut self, point: Point) {
        if Sign::of(point.fx) == Sign::of(self.left.fx) {
            self.left = point;
        } else {
            self.right = point;
        }
    }

    /// Shrinks the bracket using two interior points.
    ///
    /// If the points straddle zero they become the new bracket, which is the
    /// tightest one available. Otherwise only `outer` is folded in.
    pub(super) fn shrink_pair(&mut self, inner: Point, outer: Point) {
        if Sign::of(inner.fx) == Sign::of(outer.fx) {
            self.shrink(outer);
        } else {
            *self = Self::ordered(inner, outer);
        }
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is positive (or zero).
    Positive,
    /// Value is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a function value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Whether two values bracket zero.
///
/// Compares signs instead of testing `a * b <= 0`, which misfires when the
/// product underflows.
fn straddles_zero(a: f64, b: f64) -> bool {
    !((a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0))
}

/// Ordered finite bounds for the initial interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` if either endpoint is NaN or infinite.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if left <= right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
