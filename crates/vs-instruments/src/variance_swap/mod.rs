//! Variance swaps.
//!
//! A variance swap is a forward contract on the realized variance of an
//! underlying; its floating leg is the variance realized over the
//! observation window.
//!
//! * [`VarianceSwapDefinition`] holds the static trade terms captured at
//!   inception.
//! * [`VarianceSwap`] is the view of those terms as of one valuation date:
//!   schedule offsets in years, the fixings realized so far, and the number
//!   of disrupted observations.

mod definition;
mod derivative;

pub use definition::{count_expected_good_days, VarianceSwapDefinition, VarianceSwapDefinitionBuilder};
pub use derivative::VarianceSwap;
