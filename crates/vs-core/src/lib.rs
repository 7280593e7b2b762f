//! # vs-core
//!
//! Core types and error definitions for varswap-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: numeric type aliases, the error enum with its check macros, and
//! the date-keyed [`TimeSeries`] container used for realized observations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_not_negative!` check.
pub mod errors;

/// Ordered, key-indexed time-series container.
pub mod time_series;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for counts, array sizes, and indices.
pub type Size = usize;

/// A volatility level expressed as a decimal (e.g. 0.2 = 20 vol points).
pub type Volatility = Real;

/// A variance level (volatility squared).
pub type Variance = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use time_series::TimeSeries;
