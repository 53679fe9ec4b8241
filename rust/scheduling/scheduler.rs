use chrono::NaiveDate;
use tracing::debug;

use crate::calendars::DateRoll;
use crate::scheduling::schedule::earliest_start;
use crate::scheduling::{AnchorPolicy, Delivery, DeliverySchedule, Plan, ScheduleEntry};

/// Back-schedules deliveries against a business day calendar.
///
/// The calendar is borrowed, so one calendar loaded at start up can serve any number of
/// schedulers concurrently.
#[derive(Debug)]
pub struct Scheduler<'a, T: DateRoll + ?Sized> {
    calendar: &'a T,
    anchor: AnchorPolicy,
}

impl<'a, T: DateRoll + ?Sized> Scheduler<'a, T> {
    /// Create a scheduler using the default [`AnchorPolicy`].
    pub fn new(calendar: &'a T) -> Self {
        Scheduler {
            calendar,
            anchor: AnchorPolicy::default(),
        }
    }

    /// Replace the [`AnchorPolicy`].
    pub fn with_anchor(mut self, anchor: AnchorPolicy) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn calendar(&self) -> &T {
        self.calendar
    }

    /// Schedule the processes of one delivery backward from its delivery date.
    ///
    /// Processes are chained from the last to the first: each finishes on the business day
    /// preceding the start of its successor, and the last finishes on the delivery date rolled
    /// back to a business day. Processes with zero lead time are not recorded but still occupy
    /// one business day of the chain.
    pub fn schedule_delivery(&self, delivery: &Delivery) -> DeliverySchedule {
        let mut cursor = self.calendar.roll_backward_bus_day(&delivery.date);
        let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(delivery.processes.len());

        for process in delivery.processes.iter().rev() {
            let end = cursor;
            let start = self
                .calendar
                .bus_days_before(&end, process.lead_time.days());
            if !process.lead_time.is_zero() {
                schedule.push(ScheduleEntry {
                    name: process.name.clone(),
                    start,
                    end,
                });
            }
            cursor = start
                .pred_opt()
                .map_or(start, |d| self.calendar.roll_backward_bus_day(&d));
        }
        schedule.reverse();

        let start_date = schedule.first().map_or(delivery.date, |e| e.start);
        debug!(
            delivery = %delivery.name,
            delivery_date = %delivery.date,
            %start_date,
            processes = schedule.len(),
            "scheduled delivery"
        );
        DeliverySchedule {
            name: delivery.name.clone(),
            delivery_date: delivery.date,
            schedule,
            start_date,
        }
    }

    /// Schedule every delivery and aggregate the global start and anchor dates.
    ///
    /// `today` is the anchor when there are no deliveries.
    pub fn schedule(&self, deliveries: &[Delivery], today: NaiveDate) -> Plan {
        let schedules: Vec<DeliverySchedule> = deliveries
            .iter()
            .map(|d| self.schedule_delivery(d))
            .collect();
        let global_start_date = earliest_start(&schedules);
        let earliest_delivery = deliveries.iter().map(|d| d.date).min();
        let anchor_date =
            self.anchor
                .anchor(self.calendar, global_start_date, earliest_delivery, today);
        debug!(
            deliveries = schedules.len(),
            global_start_date = ?global_start_date,
            %anchor_date,
            "scheduled plan"
        );
        Plan {
            deliveries: schedules,
            global_start_date,
            anchor_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{nd, Cal};
    use crate::scheduling::Process;

    fn fixture_cal() -> Cal {
        Cal::new(vec![], vec![5, 6])
    }

    fn fixture_hol_cal() -> Cal {
        // Marine Day 2025, Monday
        Cal::new(vec![nd(2025, 7, 21)], vec![5, 6])
    }

    #[test]
    fn test_single_process() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new("Ward A", nd(2025, 6, 13), vec![Process::new("Pack", 3)]);
        let result = scheduler.schedule_delivery(&delivery);
        assert_eq!(
            result.schedule,
            vec![ScheduleEntry {
                name: "Pack".to_string(),
                start: nd(2025, 6, 11),
                end: nd(2025, 6, 13),
            }]
        );
        assert_eq!(result.start_date, nd(2025, 6, 11));
    }

    #[test]
    fn test_chain() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new(
            "Ward A",
            nd(2025, 6, 13),
            vec![Process::new("A", 2), Process::new("B", 3)],
        );
        let result = scheduler.schedule_delivery(&delivery);
        // B: Wed 11th - Fri 13th, A: Mon 9th - Tue 10th
        assert_eq!(result.schedule[0].name, "A");
        assert_eq!(result.schedule[0].start, nd(2025, 6, 9));
        assert_eq!(result.schedule[0].end, nd(2025, 6, 10));
        assert_eq!(result.schedule[1].name, "B");
        assert_eq!(result.schedule[1].start, nd(2025, 6, 11));
        assert_eq!(result.schedule[1].end, nd(2025, 6, 13));
        assert_eq!(result.start_date, nd(2025, 6, 9));
    }

    #[test]
    fn test_chain_over_holiday_and_weekend() {
        let cal = fixture_hol_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new(
            "Ward B",
            nd(2025, 7, 23),
            vec![Process::new("Pick", 1), Process::new("Pack", 2)],
        );
        let result = scheduler.schedule_delivery(&delivery);
        // Pack: Tue 22nd - Wed 23rd, Pick: Fri 18th, skipping Marine Day and the weekend.
        assert_eq!(result.schedule[1].start, nd(2025, 7, 22));
        assert_eq!(result.schedule[0].start, nd(2025, 7, 18));
        assert_eq!(result.schedule[0].end, nd(2025, 7, 18));
    }

    #[test]
    fn test_zero_lead_time_not_recorded_but_consumes_a_day() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new(
            "Ward A",
            nd(2025, 6, 13),
            vec![
                Process::new("A", 1),
                Process::new("Skipped", 0),
                Process::new("B", 1),
            ],
        );
        let result = scheduler.schedule_delivery(&delivery);
        assert_eq!(result.schedule.len(), 2);
        assert_eq!(result.schedule[1].end, nd(2025, 6, 13));
        assert_eq!(result.schedule[0].end, nd(2025, 6, 11));
    }

    #[test]
    fn test_all_zero_lead_times_fallback_to_delivery_date() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new(
            "Ward A",
            nd(2025, 6, 14),
            vec![Process::new("A", 0), Process::new("B", 0)],
        );
        let result = scheduler.schedule_delivery(&delivery);
        assert!(result.schedule.is_empty());
        assert_eq!(result.start_date, nd(2025, 6, 14));
    }

    #[test]
    fn test_first_process_zero_uses_earliest_recorded() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new(
            "Ward A",
            nd(2025, 6, 13),
            vec![Process::new("A", 0), Process::new("B", 2), Process::new("C", 1)],
        );
        let result = scheduler.schedule_delivery(&delivery);
        assert_eq!(result.schedule[0].name, "B");
        assert_eq!(result.start_date, nd(2025, 6, 11));
    }

    #[test]
    fn test_weekend_delivery_snaps() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let delivery = Delivery::new("Ward A", nd(2025, 6, 14), vec![Process::new("Pack", 1)]);
        let result = scheduler.schedule_delivery(&delivery);
        assert_eq!(result.schedule[0].start, nd(2025, 6, 13));
        assert_eq!(result.schedule[0].end, nd(2025, 6, 13));
        assert_eq!(result.delivery_date, nd(2025, 6, 14));
    }

    #[test]
    fn test_schedule_aggregates() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal);
        let deliveries = vec![
            Delivery::new("A", nd(2025, 6, 12), vec![Process::new("Pack", 3)]),
            Delivery::new("B", nd(2025, 6, 11), vec![Process::new("Pack", 5)]),
        ];
        let plan = scheduler.schedule(&deliveries, nd(2025, 1, 1));
        assert_eq!(plan.deliveries[0].start_date, nd(2025, 6, 10));
        assert_eq!(plan.deliveries[1].start_date, nd(2025, 6, 5));
        assert_eq!(plan.global_start_date, Some(nd(2025, 6, 5)));
        assert_eq!(plan.anchor_date, nd(2025, 6, 4));
    }

    #[test]
    fn test_schedule_empty() {
        let cal = fixture_cal();
        let scheduler = Scheduler::new(&cal).with_anchor(AnchorPolicy::NextMonday);
        let plan = scheduler.schedule(&[], nd(2025, 6, 11));
        assert!(plan.deliveries.is_empty());
        assert_eq!(plan.global_start_date, None);
        assert_eq!(plan.anchor_date, nd(2025, 6, 11));
    }
}
