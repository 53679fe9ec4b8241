//! Business day calendars and date rolling.
//!
//! *leadtime* provides three calendar types: [`Cal`], [`UnionCal`] and [`NamedCal`] and the
//! container enum [`Calendar`]. These are based on simple holiday and weekend specification and
//! union rules for combinations. Some common calendars are implemented directly by name.
//!
//! All calendars implement the [`DateRoll`] trait which provides the business day predicate,
//! rolling to business days and the back-dating of lead times with
//! [`DateRoll::bus_days_before`].
//!
//! ### Example
//! This example creates a calendar with Saturday and Sunday weekends and one holiday, Marine Day
//! 2025, and back-dates a three business day task finishing on Wednesday 23rd July.
//! ```rust
//! # use leadtime::calendars::{Cal, nd, DateRoll};
//! let cal = Cal::new(vec![nd(2025, 7, 21)], vec![5, 6]);
//! assert_eq!(nd(2025, 7, 18), cal.bus_days_before(&nd(2025, 7, 23), 3));
//! assert_eq!(nd(2025, 7, 18), cal.roll_backward_bus_day(&nd(2025, 7, 21)));
//! ```

mod cal;
mod calendar;
mod dateroll;
pub mod holidays;
mod named;
mod named_cal;
mod union_cal;

pub use crate::calendars::{
    cal::Cal,
    calendar::{nd, Calendar},
    dateroll::DateRoll,
    named::NAMES,
    named_cal::NamedCal,
    union_cal::UnionCal,
};
