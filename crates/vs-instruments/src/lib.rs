//! # vs-instruments
//!
//! Variance swap contract terms and their resolution, as of a valuation
//! date, into a snapshot ready for a pricing model.
//!
//! ```
//! use std::sync::Arc;
//! use chrono::{FixedOffset, TimeZone};
//! use vs_core::TimeSeries;
//! use vs_currencies::currencies::USD;
//! use vs_instruments::VarianceSwapDefinition;
//! use vs_time::{Frequency, WeekendsOnly};
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let swap = VarianceSwapDefinition::from_vega_params(
//!     utc.with_ymd_and_hms(2012, 1, 2, 0, 0, 0).unwrap(),
//!     utc.with_ymd_and_hms(2012, 1, 31, 0, 0, 0).unwrap(),
//!     utc.with_ymd_and_hms(2012, 2, 3, 0, 0, 0).unwrap(),
//!     Frequency::Daily,
//!     USD,
//!     Arc::new(WeekendsOnly),
//!     252.0,
//!     0.2,
//!     1000.0,
//! )?;
//! assert_eq!(swap.n_obs_expected(), 22);
//!
//! let valuation = utc.with_ymd_and_hms(2011, 12, 15, 0, 0, 0).unwrap();
//! let resolved = swap.to_derivative(&valuation, &TimeSeries::new())?;
//! assert!(resolved.observations().is_empty());
//! assert_eq!(resolved.n_obs_disrupted(), 0);
//! # Ok::<(), vs_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod instrument;
pub mod variance_swap;

pub use instrument::Instrument;
pub use variance_swap::{
    count_expected_good_days, VarianceSwap, VarianceSwapDefinition,
    VarianceSwapDefinitionBuilder,
};
