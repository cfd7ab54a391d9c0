use std::{fmt, str::FromStr};

use thiserror::Error;

/// The bracketing algorithm a [`Solver`](super::Solver) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// Interval halving. Linear but never fails on a valid bracket.
    Bisect,

    /// Ridder's exponential-fit update between a midpoint and the bracket.
    Ridder,

    /// Brent's method with inverse-quadratic extrapolation.
    #[default]
    Brentq,

    /// Brent's method with hyperbolic extrapolation.
    Brenth,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: [Method; 4] = [
        Method::Bisect,
        Method::Ridder,
        Method::Brentq,
        Method::Brenth,
    ];

    /// Returns the lowercase name used by [`FromStr`] and [`Display`](fmt::Display).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisect => "bisect",
            Method::Ridder => "ridder",
            Method::Brentq => "brentq",
            Method::Brenth => "brenth",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {0:?}, expected one of: bisect, ridder, brentq, brenth")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseMethodError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("bisect".parse(), Ok(Method::Bisect));
        assert_eq!("Ridder".parse(), Ok(Method::Ridder));
        assert_eq!(" BRENTQ ".parse(), Ok(Method::Brentq));
        assert_eq!("brenth".parse(), Ok(Method::Brenth));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "newton".parse::<Method>().unwrap_err();
        assert_eq!(err, ParseMethodError("newton".to_owned()));
    }

    #[test]
    fn display_round_trips() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[test]
    fn default_is_brentq() {
        assert_eq!(Method::default(), Method::Brentq);
    }
}
