use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::calendars::named::{get_holidays_by_name, get_weekmask_by_name};
use crate::calendars::{nd, DateRoll, NamedCal, UnionCal};
use crate::error::LeadtimeError;

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general business days. In Western culture these
///   are typically `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week, and cannot be
///   business days.
///
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. `week_mask` is a vector of days
    /// (0=Mon,.., 6=Sun) that are excluded from the working week. Values outside that range are
    /// ignored; use [`Cal::try_new`] to reject them.
    pub fn new(holidays: Vec<NaiveDate>, week_mask: Vec<u8>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask: week_mask
                .into_iter()
                .filter_map(|v| Weekday::try_from(v).ok())
                .collect(),
        }
    }

    /// Create a calendar, validating the `week_mask`.
    ///
    /// Errors if any value is not a weekday index or if every day of the week is excluded.
    pub fn try_new(holidays: Vec<NaiveDate>, week_mask: Vec<u8>) -> Result<Self, LeadtimeError> {
        let mut mask: HashSet<Weekday> = HashSet::new();
        for v in week_mask {
            mask.insert(Weekday::try_from(v).map_err(|_| LeadtimeError::InvalidWeekMask(v))?);
        }
        if mask.len() == 7 {
            return Err(LeadtimeError::EmptyWorkingWeek);
        }
        Ok(Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask: mask,
        })
    }

    /// Create a calendar from the static data of a named calendar, e.g. `"bus"` or `"jpn"`.
    pub fn try_from_name(name: &str) -> Result<Self, LeadtimeError> {
        Cal::try_new(get_holidays_by_name(name)?, get_weekmask_by_name(name)?)
    }

    /// Add further holidays, e.g. those read from yearly holiday files at start up.
    pub fn extend_holidays<I: IntoIterator<Item = NaiveDate>>(&mut self, holidays: I) {
        self.holidays.extend(holidays);
    }

    /// The holidays of the calendar in insertion order.
    pub fn holidays(&self) -> &IndexSet<NaiveDate> {
        &self.holidays
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }
}

impl PartialEq<UnionCal> for Cal {
    fn eq(&self, other: &UnionCal) -> bool {
        self.cal_date_range(&nd(1970, 1, 1), &nd(2200, 12, 31))
            .iter()
            .all(|x| self.is_bus_day(x) == other.is_bus_day(x))
    }
}

impl PartialEq<NamedCal> for Cal {
    fn eq(&self, other: &NamedCal) -> bool {
        other.union_cal.eq(self)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![nd(2015, 9, 5), nd(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, vec![5, 6])
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_holiday(&nd(2015, 9, 7))); // In hol list
        assert!(!cal.is_holiday(&nd(2015, 9, 10))); // Not in hol list
        assert!(!cal.is_holiday(&nd(2024, 1, 6))); // Not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&nd(2015, 9, 7))); // Monday
        assert!(cal.is_weekday(&nd(2015, 9, 10))); // Thursday
        assert!(!cal.is_weekday(&nd(2024, 1, 6))); // Saturday
        assert!(!cal.is_weekday(&nd(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_new_ignores_invalid_mask() {
        let cal = Cal::new(vec![], vec![5, 6, 9]);
        assert_eq!(cal.week_mask.len(), 2);
    }

    #[test]
    fn test_try_new_errors() {
        assert!(matches!(
            Cal::try_new(vec![], vec![5, 7]),
            Err(LeadtimeError::InvalidWeekMask(7))
        ));
        assert!(matches!(
            Cal::try_new(vec![], vec![0, 1, 2, 3, 4, 5, 6]),
            Err(LeadtimeError::EmptyWorkingWeek)
        ));
        assert!(Cal::try_new(vec![], vec![]).is_ok());
    }

    #[test]
    fn test_extend_holidays() {
        let mut cal = Cal::new(vec![], vec![5, 6]);
        cal.extend_holidays(vec![nd(2025, 1, 1), nd(2025, 1, 1), nd(2025, 1, 13)]);
        assert_eq!(cal.holidays().len(), 2);
        assert!(cal.is_non_bus_day(&nd(2025, 1, 13)));
    }

    #[test]
    fn test_cross_equality() {
        let cal = fixture_hol_cal();
        let ucal = UnionCal::new(vec![cal.clone()]);
        assert_eq!(cal, ucal);
        let other = Cal::new(vec![], vec![5, 6]);
        assert_ne!(other, ucal);
    }
}
