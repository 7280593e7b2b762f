//! Year fractions between timezone-aware instants.
//!
//! Instruments measure their schedule relative to a valuation instant with a
//! [`TimeCalculator`]. The library default is Actual/Actual (ISDA) applied to
//! calendar dates, with the target instant first rebased into the valuation
//! instant's offset so that neither side gains or loses a day.

use crate::day_counter::{ActualActualIsda, DayCounter};
use chrono::{DateTime, FixedOffset};
use vs_core::Time;

/// Measures signed time, in years, between two instants.
pub trait TimeCalculator: std::fmt::Debug + Send + Sync {
    /// Years from `from` to `to`; negative when `to` precedes `from`.
    fn years_between(&self, from: &DateTime<FixedOffset>, to: &DateTime<FixedOffset>) -> Time;
}

/// A [`TimeCalculator`] backed by a [`DayCounter`] on calendar dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayCountTimeCalculator<D: DayCounter> {
    day_counter: D,
}

/// The default time calculator: Actual/Actual (ISDA).
pub type ActualActualTimeCalculator = DayCountTimeCalculator<ActualActualIsda>;

impl<D: DayCounter> DayCountTimeCalculator<D> {
    /// Wrap a day counter.
    pub fn new(day_counter: D) -> Self {
        Self { day_counter }
    }

    /// The underlying day-count convention.
    pub fn day_counter(&self) -> &D {
        &self.day_counter
    }
}

impl<D: DayCounter> TimeCalculator for DayCountTimeCalculator<D> {
    fn years_between(&self, from: &DateTime<FixedOffset>, to: &DateTime<FixedOffset>) -> Time {
        let rebased = to.with_timezone(from.offset());
        self.day_counter
            .year_fraction(from.date_naive(), rebased.date_naive())
    }
}
