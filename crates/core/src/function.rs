use std::convert::Infallible;

/// A scalar function whose root is being sought.
///
/// Solvers call [`Function::call`] once per evaluated `x` and treat it as a
/// black box of unknown cost. An error returned here is never retried; it
/// ends the solve and is handed back to the caller unchanged.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by an infallible closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps an infallible closure `f(x)` as a [`Function`].
///
/// # Example
///
/// ```
/// use roots_core::{Function, from_fn};
///
/// let f = from_fn(|x| x * x - 2.0);
/// assert_eq!(f.call(2.0), Ok(2.0));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn(f)
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}

/// A [`Function`] backed by a fallible closure. See [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F>(F);

/// Wraps a fallible closure `f(x) -> Result<f64, E>` as a [`Function`].
pub fn try_from_fn<F, E>(f: F) -> TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFromFn(f)
}

impl<F, E> Function for TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

/// A [`Function`] that forwards extra arguments on every call. See [`with_args`].
///
/// The arguments live in the adapter, so the solver never sees them.
#[derive(Debug, Clone)]
pub struct WithArgs<F, A> {
    f: F,
    args: A,
}

impl<F, A> WithArgs<F, A> {
    /// Returns the forwarded arguments.
    pub fn args(&self) -> &A {
        &self.args
    }
}

/// Wraps `f(x, &args)` as a [`Function`] of `x` alone.
///
/// `args` is any value the caller chooses: a tuple of positional values, a
/// struct of named parameters, or a map.
///
/// # Example
///
/// ```
/// use roots_core::{Function, with_args};
///
/// let f = with_args(|x, a: &f64| x * x - a + 1.0, 2.0);
/// assert_eq!(f.call(1.0), Ok(0.0));
/// ```
pub fn with_args<F, A>(f: F, args: A) -> WithArgs<F, A>
where
    F: Fn(f64, &A) -> f64,
{
    WithArgs { f, args }
}

impl<F, A> Function for WithArgs<F, A>
where
    F: Fn(f64, &A) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x, &self.args))
    }
}

/// A fallible [`Function`] that forwards extra arguments. See [`try_with_args`].
#[derive(Debug, Clone)]
pub struct TryWithArgs<F, A> {
    f: F,
    args: A,
}

impl<F, A> TryWithArgs<F, A> {
    /// Returns the forwarded arguments.
    pub fn args(&self) -> &A {
        &self.args
    }
}

/// Wraps a fallible `f(x, &args) -> Result<f64, E>` as a [`Function`] of `x` alone.
pub fn try_with_args<F, A, E>(f: F, args: A) -> TryWithArgs<F, A>
where
    F: Fn(f64, &A) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryWithArgs { f, args }
}

impl<F, A, E> Function for TryWithArgs<F, A>
where
    F: Fn(f64, &A) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.f)(x, &self.args)
    }
}
