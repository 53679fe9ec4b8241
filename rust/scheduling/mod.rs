//! Back-schedule the processes of deliveries against a business day calendar.
//!
//! A [`Delivery`] names a delivery date and the ordered [`Process`] steps that must be complete
//! by then, each with a [`LeadTime`] in business days. The [`Scheduler`] works backward from the
//! delivery date: the last process finishes on the delivery date (rolled back to a business day),
//! and every earlier process finishes on the business day before its successor starts.
//!
//! Across several deliveries a [`Plan`] reports the earliest start date and an anchor date for
//! charting, placed by an [`AnchorPolicy`].
//!
//! ### Example
//! ```rust
//! # use leadtime::calendars::{Cal, nd};
//! # use leadtime::scheduling::{Delivery, Process, Scheduler};
//! let cal = Cal::new(vec![], vec![5, 6]);
//! let delivery = Delivery::new(
//!     "Ward A",
//!     nd(2025, 6, 13),                                  // Friday
//!     vec![Process::new("Pick", 2), Process::new("Pack", 3)],
//! );
//! let plan = Scheduler::new(&cal).schedule(&[delivery], nd(2025, 6, 1));
//! let schedule = &plan.deliveries[0].schedule;
//! assert_eq!(schedule[0].start, nd(2025, 6, 9));        // Pick: Mon - Tue
//! assert_eq!(schedule[1].start, nd(2025, 6, 11));       // Pack: Wed - Fri
//! assert_eq!(plan.global_start_date, Some(nd(2025, 6, 9)));
//! assert_eq!(plan.anchor_date, nd(2025, 6, 6));
//! ```

mod anchor;
mod process;
mod schedule;
mod scheduler;

pub use crate::scheduling::{
    anchor::AnchorPolicy,
    process::{Delivery, LeadTime, Process, DEFAULT_PROCESS_NAMES, MAX_LEAD_TIME},
    schedule::{earliest_start, DeliverySchedule, Plan, ScheduleEntry},
    scheduler::Scheduler,
};
