use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::{nd, Cal, DateRoll};

/// A business day calendar which is the potential union of multiple calendars.
///
/// When the union of a business day calendar is observed the following are true:
///
/// - a weekday is such if it is a weekday in all calendars.
/// - a holiday is such if it is a holiday in any calendar.
/// - a business day is such if it is a business day in all calendars.
///
/// An empty union treats every date as a business day.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct UnionCal {
    /// A vector of [Cal] used to determine **business** days.
    pub calendars: Vec<Cal>,
}

impl UnionCal {
    /// Create a new [UnionCal].
    ///
    /// # Examples
    /// ```rust
    /// # use leadtime::calendars::{Cal, UnionCal, nd, DateRoll};
    /// let weekends = Cal::new(vec![], vec![5, 6]);
    /// let site = Cal::new(vec![nd(2025, 6, 12)], vec![]);
    /// let ucal = UnionCal::new(vec![weekends, site]);
    /// assert!(ucal.is_non_bus_day(&nd(2025, 6, 12)));
    /// ```
    pub fn new(calendars: Vec<Cal>) -> Self {
        UnionCal { calendars }
    }
}

impl DateRoll for UnionCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().all(|cal| cal.is_weekday(date))
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().any(|cal| cal.is_holiday(date))
    }
}

impl<T> PartialEq<T> for UnionCal
where
    T: DateRoll,
{
    fn eq(&self, other: &T) -> bool {
        self.cal_date_range(&nd(1970, 1, 1), &nd(2200, 12, 31))
            .iter()
            .all(|x| self.is_bus_day(x) == other.is_bus_day(x))
    }
}
