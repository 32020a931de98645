//! Error handling for elliptic curve primitives

use std::borrow::Cow;
use std::fmt;

/// The error type for elliptic curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Private scalar outside the valid range [1, n)
    InvalidScalar {
        /// Reason why the scalar was rejected
        reason: &'static str,
    },

    /// No modular inverse exists (operand congruent to zero)
    NoInverse {
        /// Context where the inversion was attempted
        context: &'static str,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes or characters
        expected: usize,
        /// Actual length in bytes or characters
        actual: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for elliptic curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScalar { reason } => {
                write!(f, "Invalid scalar: {}", reason)
            }
            Error::NoInverse { context } => {
                write!(f, "No modular inverse exists in {}", context)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
