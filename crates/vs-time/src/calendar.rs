//! `Calendar` trait and the trivial calendar implementations.
//!
//! A calendar answers one question for the rest of the library: is a given
//! date a working (good business) day. Implementations must be pure; the
//! same date always gets the same answer.

use chrono::{Datelike, NaiveDate, Weekday};
use std::any::Any;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Weekends Only"`).
    fn name(&self) -> &str;

    /// The calendar as `Any`, for downcasting in [`same_as`](Self::same_as).
    fn as_any(&self) -> &dyn Any;

    /// Whether `other` marks exactly the same days as business days.
    ///
    /// The default holds for calendars whose rules are fixed by their type:
    /// two calendars are the same if they have the same concrete type.
    /// Calendars carrying data (holiday lists) must override this.
    fn same_as(&self, other: &dyn Calendar) -> bool {
        self.as_any().type_id() == other.as_any().type_id()
    }

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend according to this calendar.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// A null calendar: every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_business_day(&self, _date: NaiveDate) -> bool {
        true
    }

    fn is_weekend(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Saturdays and Sundays are holidays; there are no other holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
    }
}
