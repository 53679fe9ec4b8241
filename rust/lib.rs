//! This is the documentation for leadtime
//!
//! *leadtime* back-schedules work against a business day calendar. Given a delivery date and the
//! lead times, in business days, of an ordered list of processes, it finds the start and end
//! date of every process so that each finishes before its successor starts and the last
//! finishes on the delivery date, skipping weekends and holidays.
//!
//! - [`calendars`]: business day calendars, holiday loading and the [`calendars::DateRoll`]
//!   trait containing the back-dating calculation.
//! - [`scheduling`]: processes, deliveries and the [`scheduling::Scheduler`].
//! - [`input`]: turning structured or form-shaped requests into deliveries.
//! - [`config`]: the TOML configuration file.


pub mod calendars;
pub mod config;
pub mod error;
pub mod input;
pub mod json;
pub mod scheduling;

pub use calendars::{nd, Cal, Calendar, DateRoll, NamedCal, UnionCal};
pub use config::Config;
pub use error::LeadtimeError;
pub use json::JSON;
pub use scheduling::{
    AnchorPolicy, Delivery, DeliverySchedule, LeadTime, Plan, Process, ScheduleEntry, Scheduler,
};
