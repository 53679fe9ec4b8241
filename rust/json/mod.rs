//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

use serde::{Deserialize, Serialize};

use crate::calendars::{Cal, Calendar, NamedCal, UnionCal};
use crate::scheduling::{AnchorPolicy, DeliverySchedule, Plan, ScheduleEntry};

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Return an indented JSON string representing the object.
    fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl JSON for Cal {}
impl JSON for UnionCal {}
impl JSON for NamedCal {}
impl JSON for Calendar {}
impl JSON for AnchorPolicy {}
impl JSON for ScheduleEntry {}
impl JSON for DeliverySchedule {}
impl JSON for Plan {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::nd;

    #[test]
    fn test_cal_json() {
        let hols = vec![nd(2015, 9, 8), nd(2015, 9, 10)];
        let hcal = Cal::new(hols, vec![5, 6]);
        let js = hcal.to_json().unwrap();
        let hcal2 = Cal::from_json(&js).unwrap();
        assert_eq!(hcal, hcal2);
    }

    #[test]
    fn test_named_cal_json() {
        let ncal = NamedCal::try_new("bus,jpn").unwrap();
        let js = ncal.to_json().unwrap();
        assert_eq!(js, r#"{"name":"bus,jpn"}"#);
        let ncal2 = NamedCal::from_json(&js).unwrap();
        assert_eq!(ncal, ncal2);
    }

    #[test]
    fn test_schedule_entry_json() {
        let entry = ScheduleEntry {
            name: "Pack".to_string(),
            start: nd(2025, 6, 11),
            end: nd(2025, 6, 13),
        };
        let js = entry.to_json().unwrap();
        assert_eq!(js, r#"{"name":"Pack","start":"2025-06-11","end":"2025-06-13"}"#);
    }

    #[test]
    fn test_anchor_policy_json() {
        let policy = AnchorPolicy::from_json(r#"{"policy":"cal_days_before_delivery","days":60}"#)
            .unwrap();
        assert_eq!(policy, AnchorPolicy::CalDaysBeforeDelivery { days: 60 });
        let js = AnchorPolicy::NextMonday.to_json().unwrap();
        assert_eq!(js, r#"{"policy":"next_monday"}"#);
    }
}
