use thiserror::Error;

use super::{BracketError, Solution, Status};

/// Errors that can end a bracketing solve.
///
/// `E` is the error type of the user function.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The initial interval is invalid.
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// The solve did not converge and the configuration asked for an error.
    #[error(transparent)]
    NotConverged(#[from] ConvergenceError),

    /// The function returned an error.
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: E,
    },

    /// The function returned NaN.
    #[error("function returned NaN at x = {x}")]
    NotANumber { x: f64 },
}

/// A solve that failed to converge, carrying its full [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{}", .solution.msg())]
pub struct ConvergenceError {
    solution: Solution,
}

impl ConvergenceError {
    pub(super) fn new(solution: Solution) -> Self {
        Self { solution }
    }

    /// Returns the unconverged solution.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Consumes the error and returns the unconverged solution.
    #[must_use]
    pub fn into_solution(self) -> Solution {
        self.solution
    }

    /// Returns why the solve failed.
    #[must_use]
    pub fn kind(&self) -> Status {
        self.solution.status()
    }
}
