//! Reusable observers for the bracketing root finders.
//!
//! Each observer implements [`Observer<Event>`] and can be passed to
//! [`Solver::solve_observed`].
//!
//! - [`TraceObserver`]: logs every evaluation through `tracing`
//! - [`History`]: records every evaluated point in call order
//!
//! [`Observer<Event>`]: roots_core::Observer
//! [`Solver::solve_observed`]: roots_solvers::equation::bracketed::Solver::solve_observed

mod history;
mod trace;

pub use history::History;
pub use trace::{TraceObserver, format_line};
