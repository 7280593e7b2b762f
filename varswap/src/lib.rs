//! # varswap
//!
//! Variance swap contract terms and their resolution into a valuation-date
//! snapshot.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `vs-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{FixedOffset, NaiveDate, TimeZone};
//! use varswap::core::TimeSeries;
//! use varswap::currencies::Currency;
//! use varswap::instruments::VarianceSwapDefinition;
//! use varswap::time::{Frequency, WeekendsOnly};
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let swap = VarianceSwapDefinition::builder()
//!     .obs_start_date(utc.with_ymd_and_hms(2012, 1, 2, 0, 0, 0).unwrap())
//!     .obs_end_date(utc.with_ymd_and_hms(2012, 1, 31, 0, 0, 0).unwrap())
//!     .settlement_date(utc.with_ymd_and_hms(2012, 2, 3, 0, 0, 0).unwrap())
//!     .obs_freq(Frequency::Daily)
//!     .currency(Currency::from_code("USD")?)
//!     .calendar(Arc::new(WeekendsOnly))
//!     .annualization_factor(252.0)
//!     .vega_params(0.2, 1000.0)
//!     .build()?;
//!
//! let fixings: TimeSeries<NaiveDate, f64> = [(2, 1290.5), (3, 1291.2), (4, 1288.9)]
//!     .into_iter()
//!     .map(|(d, v)| (NaiveDate::from_ymd_opt(2012, 1, d).unwrap(), v))
//!     .collect();
//! let resolved = swap.to_derivative(&utc.with_ymd_and_hms(2012, 1, 5, 0, 0, 0).unwrap(), &fixings)?;
//! assert_eq!(resolved.observations(), &[1290.5, 1291.2, 1288.9]);
//! assert_eq!(resolved.n_obs_disrupted(), 1);
//! # Ok::<(), varswap::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and time series.
pub use vs_core as core;

/// Calendars, frequencies, day counters, and time calculators.
pub use vs_time as time;

/// Settlement currencies.
pub use vs_currencies as currencies;

/// Variance swap definitions and resolved snapshots.
pub use vs_instruments as instruments;
