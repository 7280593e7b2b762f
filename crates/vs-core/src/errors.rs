//! Error types for varswap-rs.
//!
//! Every failure the library can report is a variant of [`Error`]. Argument
//! checks are performed eagerly, at construction or resolution time, and are
//! never retried or corrected.

use thiserror::Error;

/// The top-level error type used throughout varswap-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A required input was not supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// The inputs describe a configuration the library does not support
    /// (e.g. a non-daily observation frequency).
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// A numeric input is outside its admissible range.
    #[error("invalid magnitude for {name}: {value}")]
    InvalidMagnitude {
        /// Name of the offending input.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Externally supplied data contradicts what the contract implies.
    #[error("data inconsistency: {0}")]
    DataInconsistency(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Shorthand for [`Error::MissingArgument`].
    pub fn missing(name: impl Into<String>) -> Self {
        Error::MissingArgument(name.into())
    }
}

/// Shorthand `Result` type used throughout varswap-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidMagnitude { .. })` if `$value` is negative.
///
/// `NaN` is rejected as well.
///
/// # Example
/// ```
/// use vs_core::{ensure_not_negative, errors::Error};
/// fn strike(k: f64) -> vs_core::errors::Result<f64> {
///     ensure_not_negative!(k, "variance strike");
///     Ok(k)
/// }
/// assert!(strike(0.0).is_ok());
/// assert!(matches!(strike(-0.01), Err(Error::InvalidMagnitude { .. })));
/// ```
#[macro_export]
macro_rules! ensure_not_negative {
    ($value:expr, $name:expr) => {{
        let value: f64 = $value;
        if !(value >= 0.0) {
            return Err($crate::errors::Error::InvalidMagnitude {
                name: ::std::string::String::from($name),
                value,
            });
        }
    }};
}
