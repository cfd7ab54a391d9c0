//! Solvers for scalar equations `f(x) = 0`.
//!
//! A [`Function`] maps `x` to `f(x)`. Solvers in this module drive that value
//! toward zero.
//!
//! # Solvers
//!
//! - [`bracketed`]: bisection, Ridder, and Brent's method on an interval
//!   whose endpoints bracket a root
//!
//! [`Function`]: roots_core::Function

pub mod bracketed;
