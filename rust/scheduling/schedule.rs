use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The scheduled window of one process of one delivery, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The schedule of one delivery, processes in forward chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySchedule {
    pub name: String,
    /// The requested delivery date, before rolling to a business day.
    pub delivery_date: NaiveDate,
    pub schedule: Vec<ScheduleEntry>,
    /// Start of the first scheduled process, or the delivery date if nothing was scheduled.
    pub start_date: NaiveDate,
}

/// The schedules of every delivery of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub deliveries: Vec<DeliverySchedule>,
    /// The earliest delivery start date; `None` without deliveries.
    pub global_start_date: Option<NaiveDate>,
    /// Reference date positioning the start of a rendered chart.
    pub anchor_date: NaiveDate,
}

/// The minimum start date of a set of delivery schedules.
pub fn earliest_start(deliveries: &[DeliverySchedule]) -> Option<NaiveDate> {
    deliveries.iter().map(|d| d.start_date).min()
}

impl Plan {
    /// Iterate over every scheduled process, tagged by the name of its delivery.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ScheduleEntry)> {
        self.deliveries
            .iter()
            .flat_map(|d| d.schedule.iter().map(move |e| (d.name.as_str(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::nd;

    fn fixture_delivery(name: &str, start: NaiveDate) -> DeliverySchedule {
        DeliverySchedule {
            name: name.to_string(),
            delivery_date: nd(2025, 6, 20),
            schedule: vec![ScheduleEntry {
                name: "Pack".to_string(),
                start,
                end: nd(2025, 6, 20),
            }],
            start_date: start,
        }
    }

    #[test]
    fn test_earliest_start() {
        let deliveries = vec![
            fixture_delivery("A", nd(2025, 6, 10)),
            fixture_delivery("B", nd(2025, 6, 5)),
        ];
        assert_eq!(earliest_start(&deliveries), Some(nd(2025, 6, 5)));
        assert_eq!(earliest_start(&[]), None);
    }

    #[test]
    fn test_plan_entries() {
        let plan = Plan {
            deliveries: vec![
                fixture_delivery("A", nd(2025, 6, 10)),
                fixture_delivery("B", nd(2025, 6, 5)),
            ],
            global_start_date: Some(nd(2025, 6, 5)),
            anchor_date: nd(2025, 6, 4),
        };
        let names: Vec<&str> = plan.entries().map(|(d, _)| d).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
