//! Core traits for the bracketing root finders.
//!
//! This crate defines the call-boundary abstractions the solvers build on:
//!
//! - [`Function`]: a scalar function `f(x)` that may fail
//! - [`from_fn`], [`try_from_fn`], [`with_args`], [`try_with_args`]: adapters
//!   that turn closures (optionally with extra arguments) into a [`Function`]
//! - [`Observer`]: receives solver events as the iteration proceeds

mod function;
mod observer;

pub use function::{
    FromFn, Function, TryFromFn, TryWithArgs, WithArgs, from_fn, try_from_fn, try_with_args,
    with_args,
};
pub use observer::Observer;
