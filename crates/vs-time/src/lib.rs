//! # vs-time
//!
//! Calendar, frequency, period, day counter, and time-calculator types.
//!
//! Calendar dates are `chrono::NaiveDate`; timezone-aware instants are
//! `chrono::DateTime<FixedOffset>`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Calendars with user-supplied holidays.
pub mod calendars;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Observation / event frequency.
pub mod frequency;

/// `Period` — a time span in a `TimeUnit`.
pub mod period;

/// Year fractions between timezone-aware instants.
pub mod time_calculator;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::BespokeCalendar;
pub use day_counter::{Actual365Fixed, ActualActualIsda, DayCounter};
pub use frequency::Frequency;
pub use period::Period;
pub use time_calculator::{ActualActualTimeCalculator, DayCountTimeCalculator, TimeCalculator};
pub use time_unit::TimeUnit;
