//! # vs-currencies
//!
//! ISO 4217 settlement currencies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Currency` record and code lookup.
pub mod currency;

/// Pre-defined currencies.
pub mod currencies;

pub use currency::Currency;
