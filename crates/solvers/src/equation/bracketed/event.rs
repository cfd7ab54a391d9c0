use super::{Bracket, Point};

/// An evaluation reported to an observer during a solve.
///
/// Every call to the user function produces exactly one event, so the number
/// of events seen equals the final `func_calls`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// One of the two initial endpoints was evaluated.
    Endpoint { point: Point, func_calls: usize },

    /// A point was evaluated inside iteration `iter`.
    ///
    /// `bracket` is the bracket the point was chosen from, before the point
    /// is folded into it.
    Iterate {
        iter: usize,
        func_calls: usize,
        point: Point,
        bracket: Bracket,
    },
}

impl Event {
    /// Returns the evaluated point.
    #[must_use]
    pub fn point(&self) -> Point {
        match self {
            Event::Endpoint { point, .. } | Event::Iterate { point, .. } => *point,
        }
    }

    /// Returns the function-call count including this evaluation.
    #[must_use]
    pub fn func_calls(&self) -> usize {
        match self {
            Event::Endpoint { func_calls, .. } | Event::Iterate { func_calls, .. } => *func_calls,
        }
    }

    /// Returns the iteration index, which is zero for endpoint evaluations.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Endpoint { .. } => 0,
            Event::Iterate { iter, .. } => *iter,
        }
    }

    /// Returns the bracket the point was evaluated in, if any.
    #[must_use]
    pub fn bracket(&self) -> Option<Bracket> {
        match self {
            Event::Endpoint { .. } => None,
            Event::Iterate { bracket, .. } => Some(*bracket),
        }
    }
}
