use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::From;

use crate::calendars::{Cal, DateRoll, NamedCal, UnionCal};

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Container for calendar types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Calendar {
    Cal(Cal),
    UnionCal(UnionCal),
    NamedCal(NamedCal),
}

impl From<Cal> for Calendar {
    fn from(item: Cal) -> Self {
        Calendar::Cal(item)
    }
}

impl From<UnionCal> for Calendar {
    fn from(item: UnionCal) -> Self {
        Calendar::UnionCal(item)
    }
}

impl From<NamedCal> for Calendar {
    fn from(item: NamedCal) -> Self {
        Calendar::NamedCal(item)
    }
}

impl Default for Calendar {
    /// Saturday and Sunday weekends without holidays.
    fn default() -> Self {
        Calendar::Cal(Cal::new(vec![], vec![5, 6]))
    }
}

impl DateRoll for Calendar {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_weekday(date),
            Calendar::UnionCal(c) => c.is_weekday(date),
            Calendar::NamedCal(c) => c.is_weekday(date),
        }
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        match self {
            Calendar::Cal(c) => c.is_holiday(date),
            Calendar::UnionCal(c) => c.is_holiday(date),
            Calendar::NamedCal(c) => c.is_holiday(date),
        }
    }
}
