//! Bracketing root finders for scalar functions.
//!
//! Given a function `f` and an interval `[xa, xb]` over which `f` changes
//! sign, the solvers in [`equation::bracketed`] shrink the interval until the
//! function value or the interval width falls below its tolerance.
//!
//! # Example
//!
//! ```
//! use roots_core::from_fn;
//! use roots_solvers::equation::bracketed::{Config, Method, Solver};
//!
//! let config = Config::new(1e-10, f64::EPSILON, 100).unwrap();
//! let solver = Solver::new(Method::Brentq, config);
//!
//! let solution = solver.solve(&from_fn(|x| x * x - 2.0), 0.0, 2.0).unwrap();
//! assert!(solution.convergence());
//! assert!((solution.x0().unwrap() - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

pub mod equation;
