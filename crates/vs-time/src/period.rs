//! `Period` — a time span expressed in a [`TimeUnit`].

use crate::frequency::Frequency;
use crate::time_unit::TimeUnit;
use chrono::{Days, Months, NaiveDate};
use vs_core::errors::{Error, Result};

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Construct the period between consecutive events of `freq`.
    ///
    /// # Errors
    /// Returns an error for `NoFrequency` and `OtherFrequency`.
    pub fn from_frequency(freq: Frequency) -> Result<Self> {
        match freq {
            Frequency::NoFrequency | Frequency::OtherFrequency => Err(Error::InvalidArgument(
                format!("cannot convert {freq} to a Period"),
            )),
            Frequency::Once => Ok(Period::new(0, TimeUnit::Years)),
            Frequency::Annual => Ok(Period::new(1, TimeUnit::Years)),
            Frequency::Semiannual => Ok(Period::new(6, TimeUnit::Months)),
            Frequency::EveryFourthMonth => Ok(Period::new(4, TimeUnit::Months)),
            Frequency::Quarterly => Ok(Period::new(3, TimeUnit::Months)),
            Frequency::Bimonthly => Ok(Period::new(2, TimeUnit::Months)),
            Frequency::Monthly => Ok(Period::new(1, TimeUnit::Months)),
            Frequency::EveryFourthWeek => Ok(Period::new(4, TimeUnit::Weeks)),
            Frequency::Biweekly => Ok(Period::new(2, TimeUnit::Weeks)),
            Frequency::Weekly => Ok(Period::new(1, TimeUnit::Weeks)),
            Frequency::Daily => Ok(Period::new(1, TimeUnit::Days)),
        }
    }

    /// Whether stepping by this period moves a date strictly forward.
    pub fn is_positive(&self) -> bool {
        self.length > 0
    }

    /// Move `date` by this period.
    ///
    /// Month and year steps clamp to the end of the target month
    /// (Jan 31 + 1M = Feb 28/29).
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the result leaves chrono's date range.
    pub fn advance(&self, date: NaiveDate) -> Result<NaiveDate> {
        let n = self.length.unsigned_abs();
        let forward = self.length >= 0;
        let moved = match self.unit {
            TimeUnit::Days => shift_days(date, u64::from(n), forward),
            TimeUnit::Weeks => shift_days(date, 7 * u64::from(n), forward),
            TimeUnit::Months => shift_months(date, n, forward),
            TimeUnit::Years => n
                .checked_mul(12)
                .and_then(|months| shift_months(date, months, forward)),
        };
        moved.ok_or_else(|| Error::Date(format!("{date} + {self} is out of range")))
    }
}

fn shift_days(date: NaiveDate, n: u64, forward: bool) -> Option<NaiveDate> {
    if forward {
        date.checked_add_days(Days::new(n))
    } else {
        date.checked_sub_days(Days::new(n))
    }
}

fn shift_months(date: NaiveDate, n: u32, forward: bool) -> Option<NaiveDate> {
    if forward {
        date.checked_add_months(Months::new(n))
    } else {
        date.checked_sub_months(Months::new(n))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
