//! Bespoke calendar — weekends plus a user-defined holiday list.

use crate::calendar::Calendar;
use chrono::NaiveDate;
use std::any::Any;
use std::collections::BTreeSet;

/// A calendar whose holidays are added manually at run time.
///
/// Saturdays and Sundays are always holidays. Typical use is an exchange
/// calendar loaded from reference data, or a test calendar with a handful of
/// closures.
///
/// Two bespoke calendars are the same calendar when both the name and the
/// holiday set match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeSet<NaiveDate>,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar with an initial set of holidays.
    pub fn with_holidays(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Add a holiday. Weekends are already non-business days.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn same_as(&self, other: &dyn Calendar) -> bool {
        other
            .as_any()
            .downcast_ref::<BespokeCalendar>()
            .is_some_and(|other| other == self)
    }

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
