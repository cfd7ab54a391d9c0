//! Bracketing root finders for scalar functions.
//!
//! # Algorithm
//!
//! Every method starts from an interval `[xa, xb]` whose function values
//! differ in sign and shrinks it while keeping that sign change, so a root of
//! a continuous function always stays inside. The methods differ in how they
//! pick the next point:
//!
//! - [`Method::Bisect`] takes the midpoint. Slow but the iteration count is
//!   known in advance.
//! - [`Method::Ridder`] evaluates the midpoint and then an exponential
//!   interpolation, two calls per iteration.
//! - [`Method::Brentq`] mixes inverse quadratic interpolation, secant steps
//!   and bisection.
//! - [`Method::Brenth`] is Brent's method with hyperbolic extrapolation.
//!
//! # Convergence
//!
//! A solve converges when `|f(x)| < epsilon` or when the bracket is narrower
//! than `xtol`. It stops unconverged when the endpoints do not bracket a root
//! or after `max_iter` iterations. Whether an unconverged solve is returned or
//! raised as [`Error::NotConverged`] depends on [`Config::raise_on_fail`].
//!
//! # Observer Events
//!
//! The observer receives one [`Event`] per function call: an
//! [`Event::Endpoint`] for each initial endpoint, then an [`Event::Iterate`]
//! for every point evaluated inside the loop.

mod bisect;
mod bracket;
mod brent;
mod budget;
mod config;
mod context;
mod convergence;
mod error;
mod event;
mod init;
mod method;
mod point;
mod ridder;
mod solution;


pub use bracket::{Bracket, BracketError};
pub use config::{
    Config, ConfigError, DEFAULT_DEBUG_PRECISION, DEFAULT_EPSILON, DEFAULT_MAX_ITER, DEFAULT_XTOL,
};
pub use error::{ConvergenceError, Error};
pub use event::Event;
pub use method::{Method, ParseMethodError};
pub use point::Point;
pub use solution::{Report, Solution, Status};

use roots_core::{Function, Observer};

use bracket::Bounds;
use budget::Budget;
use context::Context;
use convergence::Tolerances;
use init::{Init, initialize};

/// A configured bracketing solver.
///
/// Holds no per-solve state, so one solver can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solver {
    method: Method,
    config: Config,
}

/// Creates a solver using `method` and `config`.
#[must_use]
pub fn make_solver(method: Method, config: Config) -> Solver {
    Solver::new(method, config)
}

impl Solver {
    /// Creates a solver using `method` and `config`.
    #[must_use]
    pub fn new(method: Method, config: Config) -> Self {
        Self { method, config }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds a root of `function` in `[xa, xb]`.
    ///
    /// This is [`Solver::solve_observed`] with a no-op observer.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve_observed`].
    pub fn solve<F: Function>(
        &self,
        function: &F,
        xa: f64,
        xb: f64,
    ) -> Result<Solution, Error<F::Error>> {
        self.solve_observed(function, xa, xb, &mut ())
    }

    /// Finds a root of `function` in `[xa, xb]`, reporting every evaluation to
    /// `observer`.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBracket`] if an endpoint is not finite.
    /// - [`Error::Function`] or [`Error::NotANumber`] if an evaluation fails.
    /// - [`Error::NotConverged`] if the solve did not converge and the config
    ///   has `raise_on_fail` set.
    pub fn solve_observed<F, Obs>(
        &self,
        function: &F,
        xa: f64,
        xb: f64,
        observer: &mut Obs,
    ) -> Result<Solution, Error<F::Error>>
    where
        F: Function,
        Obs: Observer<Event>,
    {
        let bounds = Bounds::new([xa, xb])?;
        let mut ctx = Context::new(
            function,
            observer,
            Budget::new(self.config.max_iter()),
            Tolerances::new(&self.config),
        );

        let solution = match initialize(&mut ctx, bounds)? {
            Init::Done(solution) => solution,
            Init::Bracketed(bracket) => match self.method {
                Method::Bisect => bisect::solve(&mut ctx, bracket)?,
                Method::Ridder => ridder::solve(&mut ctx, bracket)?,
                Method::Brentq => brent::brentq(&mut ctx, bracket)?,
                Method::Brenth => brent::brenth(&mut ctx, bracket)?,
            },
        };

        self.conclude(solution)
    }

    /// Renders `solution` with the configured precision.
    #[must_use]
    pub fn report<'a>(&self, solution: &'a Solution) -> Report<'a> {
        solution.report(self.config.debug_precision())
    }

    /// Applies the failure policy to a finished solve.
    fn conclude<E>(&self, solution: Solution) -> Result<Solution, Error<E>> {
        tracing::info!(
            method = %self.method,
            status = ?solution.status(),
            iterations = solution.iterations(),
            func_calls = solution.func_calls(),
            x0 = ?solution.x0(),
            "{}",
            solution.msg()
        );

        if !solution.convergence() && self.config.raise_on_fail() {
            return Err(ConvergenceError::new(solution).into());
        }
        Ok(solution)
    }
}
