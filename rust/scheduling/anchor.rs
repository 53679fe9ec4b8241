use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::calendars::DateRoll;

/// Rules placing the anchor date of a rendered schedule chart.
///
/// The anchor is a presentation aid only: it never changes any scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum AnchorPolicy {
    /// The start of a `days` business day span ending on the global start date, i.e.
    /// `days - 1` business days earlier.
    BusDaysBeforeStart { days: u32 },
    /// A fixed number of calendar days before the earliest delivery date.
    CalDaysBeforeDelivery { days: u32 },
    /// The Monday on or after the global start date.
    NextMonday,
}

impl Default for AnchorPolicy {
    fn default() -> Self {
        AnchorPolicy::BusDaysBeforeStart { days: 2 }
    }
}

impl AnchorPolicy {
    /// Determine the anchor date.
    ///
    /// With no deliveries (`global_start` and `earliest_delivery` are `None`) the anchor is `today`,
    /// as for a submitted request that scheduled nothing. An empty form shown before any
    /// submission is not a plan and has no anchor here.
    pub fn anchor<T: DateRoll + ?Sized>(
        &self,
        calendar: &T,
        global_start: Option<NaiveDate>,
        earliest_delivery: Option<NaiveDate>,
        today: NaiveDate,
    ) -> NaiveDate {
        match self {
            AnchorPolicy::BusDaysBeforeStart { days } => global_start
                .map_or(today, |start| calendar.bus_days_before(&start, *days)),
            AnchorPolicy::CalDaysBeforeDelivery { days } => earliest_delivery.map_or(today, |d| {
                d.checked_sub_days(Days::new(u64::from(*days)))
                    .unwrap_or(NaiveDate::MIN)
            }),
            AnchorPolicy::NextMonday => global_start.map_or(today, |start| {
                let offset = (7 - start.weekday().num_days_from_monday()) % 7;
                start
                    .checked_add_days(Days::new(u64::from(offset)))
                    .unwrap_or(start)
            }),
        }
    }
}
