//! `Instrument` base trait.
//!
//! An instrument here is a trade definition: static terms that can be asked
//! whether they are still alive as of some instant.

use chrono::{DateTime, FixedOffset};

/// Base trait for all trade definitions.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// Short type name (e.g. `"VarianceSwap"`).
    fn instrument_type(&self) -> &str;

    /// The last date on which the instrument has a cash flow.
    fn maturity_date(&self) -> DateTime<FixedOffset>;

    /// Whether the instrument has fully settled as of `as_of`.
    fn is_expired(&self, as_of: &DateTime<FixedOffset>) -> bool {
        self.maturity_date() < *as_of
    }
}
