use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::{Cal, DateRoll, UnionCal};
use crate::error::LeadtimeError;

/// A wrapper for a UnionCal struct specified by a string representation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "NamedCalDataModel")]
pub struct NamedCal {
    pub name: String,
    #[serde(skip)]
    pub union_cal: UnionCal,
}

#[derive(Deserialize)]
struct NamedCalDataModel {
    name: String,
}

impl TryFrom<NamedCalDataModel> for NamedCal {
    type Error = LeadtimeError;

    fn try_from(model: NamedCalDataModel) -> Result<Self, Self::Error> {
        Self::try_new(&model.name)
    }
}

impl NamedCal {
    /// Create a new [`NamedCal`].
    ///
    /// # Notes
    /// `name` must be a string that contains pre-defined calendars separated by commas.
    ///
    /// # Examples
    /// ```rust
    /// # use leadtime::calendars::{NamedCal};
    /// let named_cal = NamedCal::try_new("bus,jpn");
    /// # let named_cal = named_cal.unwrap();
    /// assert_eq!(named_cal.union_cal.calendars.len(), 2);
    /// ```
    pub fn try_new(name: &str) -> Result<Self, LeadtimeError> {
        let name_ = name.trim().to_lowercase();
        let cals: Vec<Cal> = parse_cals(&name_)?;
        Ok(Self {
            name: name_,
            union_cal: UnionCal { calendars: cals },
        })
    }
}

impl DateRoll for NamedCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.union_cal.is_weekday(date)
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.union_cal.is_holiday(date)
    }
}

fn parse_cals(name: &str) -> Result<Vec<Cal>, LeadtimeError> {
    let mut cals: Vec<Cal> = Vec::new();
    for cal in name.split(',') {
        let cal = cal.trim();
        if cal.is_empty() {
            return Err(LeadtimeError::MalformedCalendarName(name.to_string()));
        }
        cals.push(Cal::try_from_name(cal)?)
    }
    Ok(cals)
}

impl<T> PartialEq<T> for NamedCal
where
    T: DateRoll,
{
    fn eq(&self, other: &T) -> bool {
        self.union_cal.eq(other)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::nd;

    #[test]
    fn test_named_cal() {
        let ncal = NamedCal::try_new("bus,jpn").unwrap();

        assert!(ncal.is_non_bus_day(&nd(2025, 5, 6))); // substitute holiday
        assert!(ncal.is_non_bus_day(&nd(2025, 6, 14))); // Saturday
        assert!(ncal.is_bus_day(&nd(2025, 5, 7)));
        assert!(ncal.is_non_bus_day(&nd(2028, 5, 3))); // Wednesday holiday
    }

    #[test]
    fn test_named_cal_case_and_whitespace() {
        let ncal = NamedCal::try_new(" JPN ").unwrap();
        assert_eq!(ncal.name, "jpn");
    }

    #[test]
    fn test_named_cal_error() {
        assert!(matches!(
            NamedCal::try_new("bus,,jpn"),
            Err(LeadtimeError::MalformedCalendarName(_))
        ));
        assert!(matches!(
            NamedCal::try_new(""),
            Err(LeadtimeError::MalformedCalendarName(_))
        ));
        assert!(matches!(
            NamedCal::try_new("bus|jpn"),
            Err(LeadtimeError::UnknownCalendar(_))
        ));
        assert!(matches!(
            NamedCal::try_new("ldn"),
            Err(LeadtimeError::UnknownCalendar(_))
        ));
    }

    #[test]
    fn test_named_cal_deserialize_error() {
        let result: Result<NamedCal, _> = serde_json::from_str(r#"{"name":"nowhere"}"#);
        assert!(result.is_err());
    }
}
