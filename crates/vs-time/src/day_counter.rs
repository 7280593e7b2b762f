//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the fraction of a year between two calendar
//! dates. The year fractions are signed: swapping the arguments flips the
//! sign.

use chrono::{Datelike, NaiveDate};
use vs_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        (d2 - d1).num_days()
    }

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: NaiveDate, d2: NaiveDate) -> Time;
}

/// Actual/365 (Fixed): `actual_days / 365`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn year_fraction(&self, d1: NaiveDate, d2: NaiveDate) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/Actual (ISDA).
///
/// The period is split at year boundaries; days falling in a leap year are
/// divided by 366, the others by 365.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl ActualActualIsda {
    fn days_in_year(year: i32) -> Real {
        if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
            366.0
        } else {
            365.0
        }
    }
}

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn year_fraction(&self, d1: NaiveDate, d2: NaiveDate) -> Time {
        if d1 == d2 {
            return 0.0;
        }
        if d1 > d2 {
            return -self.year_fraction(d2, d1);
        }
        let (y1, y2) = (d1.year(), d2.year());
        if y1 == y2 {
            return self.day_count(d1, d2) as Real / Self::days_in_year(y1);
        }
        // Stub to the end of the first year, whole years in between, stub
        // from the start of the last year.
        let mut sum = (y2 - y1 - 1) as Real;
        if let Some(next_jan1) = NaiveDate::from_ymd_opt(y1 + 1, 1, 1) {
            sum += self.day_count(d1, next_jan1) as Real / Self::days_in_year(y1);
        }
        if let Some(last_jan1) = NaiveDate::from_ymd_opt(y2, 1, 1) {
            sum += self.day_count(last_jan1, d2) as Real / Self::days_in_year(y2);
        }
        sum
    }
}
