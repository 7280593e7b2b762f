//! Calendars built from data supplied at run time.

/// Weekends plus a user-defined holiday list.
pub mod bespoke_calendar;

pub use bespoke_calendar::BespokeCalendar;
