use thiserror::Error;

/// Default function-value tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default minimum bracket width.
pub const DEFAULT_XTOL: f64 = f64::EPSILON;

/// Default iteration limit.
pub const DEFAULT_MAX_ITER: usize = 500;

/// Default number of decimals used when rendering floats.
pub const DEFAULT_DEBUG_PRECISION: usize = 10;

/// Configuration for the bracketing solvers.
///
/// `xtol` means the same thing for every method: the bracket width below
/// which a solve counts as converged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "raw::RawConfig", into = "raw::RawConfig")
)]
pub struct Config {
    epsilon: f64,
    xtol: f64,
    max_iter: usize,
    raise_on_fail: bool,
    debug_precision: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("xtol must be finite and positive")]
    XTol,

    #[error("max_iter must be positive")]
    MaxIter,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(DEFAULT_EPSILON, DEFAULT_XTOL, DEFAULT_MAX_ITER).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// Failures are raised as errors and floats render with
    /// [`DEFAULT_DEBUG_PRECISION`] decimals; see [`Config::with_raise_on_fail`]
    /// and [`Config::with_debug_precision`].
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is not finite and positive, or if
    /// `max_iter` is zero.
    pub fn new(epsilon: f64, xtol: f64, max_iter: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if !xtol.is_finite() || xtol <= 0.0 {
            return Err(ConfigError::XTol);
        }
        if max_iter == 0 {
            return Err(ConfigError::MaxIter);
        }

        Ok(Self {
            epsilon,
            xtol,
            max_iter,
            raise_on_fail: true,
            debug_precision: DEFAULT_DEBUG_PRECISION,
        })
    }

    /// Sets whether a failed solve is returned as an error (`true`) or as a
    /// non-converged solution (`false`).
    #[must_use]
    pub fn with_raise_on_fail(mut self, raise_on_fail: bool) -> Self {
        self.raise_on_fail = raise_on_fail;
        self
    }

    /// Sets the number of decimals used when rendering floats.
    #[must_use]
    pub fn with_debug_precision(mut self, debug_precision: usize) -> Self {
        self.debug_precision = debug_precision;
        self
    }

    /// Returns the function-value tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the minimum bracket width.
    #[must_use]
    pub fn xtol(&self) -> f64 {
        self.xtol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns true if failed solves are returned as errors.
    #[must_use]
    pub fn raise_on_fail(&self) -> bool {
        self.raise_on_fail
    }

    /// Returns the number of decimals used when rendering floats.
    #[must_use]
    pub fn debug_precision(&self) -> usize {
        self.debug_precision
    }
}

#[cfg(feature = "serde")]
mod raw {
    use super::{
        Config, ConfigError, DEFAULT_DEBUG_PRECISION, DEFAULT_EPSILON, DEFAULT_MAX_ITER,
        DEFAULT_XTOL,
    };

    /// Unvalidated mirror of [`Config`]; missing fields take their defaults.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub(super) struct RawConfig {
        epsilon: f64,
        xtol: f64,
        max_iter: usize,
        raise_on_fail: bool,
        debug_precision: usize,
    }

    impl Default for RawConfig {
        fn default() -> Self {
            Self {
                epsilon: DEFAULT_EPSILON,
                xtol: DEFAULT_XTOL,
                max_iter: DEFAULT_MAX_ITER,
                raise_on_fail: true,
                debug_precision: DEFAULT_DEBUG_PRECISION,
            }
        }
    }

    impl TryFrom<RawConfig> for Config {
        type Error = ConfigError;

        fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
            Ok(Config::new(raw.epsilon, raw.xtol, raw.max_iter)?
                .with_raise_on_fail(raw.raise_on_fail)
                .with_debug_precision(raw.debug_precision))
        }
    }

    impl From<Config> for RawConfig {
        fn from(config: Config) -> Self {
            Self {
                epsilon: config.epsilon,
                xtol: config.xtol,
                max_iter: config.max_iter,
                raise_on_fail: config.raise_on_fail,
                debug_precision: config.debug_precision,
            }
        }
    }
}
