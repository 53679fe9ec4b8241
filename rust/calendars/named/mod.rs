//! Data for pre-existing named holiday calendars: static tables, or rules for `jpn`.
//!

pub mod all;
pub mod bus;
pub mod jpn;

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::LeadtimeError;

/// Names of the calendars with static data.
pub const NAMES: &[&str] = &["all", "bus", "jpn"];

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<Vec<u8>, LeadtimeError> {
    let hmap: HashMap<&str, &[u8]> = HashMap::from([
        ("all", all::WEEKMASK),
        ("bus", bus::WEEKMASK),
        ("jpn", jpn::WEEKMASK),
    ]);
    match hmap.get(name) {
        None => Err(LeadtimeError::UnknownCalendar(name.to_string())),
        Some(value) => Ok(value.to_vec()),
    }
}

pub(crate) fn get_holidays_by_name(name: &str) -> Result<Vec<NaiveDate>, LeadtimeError> {
    if name == "jpn" {
        return Ok(jpn::holidays());
    }
    let hmap: HashMap<&str, &[&str]> =
        HashMap::from([("all", all::HOLIDAYS), ("bus", bus::HOLIDAYS)]);
    match hmap.get(name) {
        None => Err(LeadtimeError::UnknownCalendar(name.to_string())),
        Some(value) => value
            .iter()
            .map(|x| {
                NaiveDate::parse_from_str(x, "%Y-%m-%d")
                    .map_err(|_| LeadtimeError::InvalidDate(x.to_string()))
            })
            .collect(),
    }
}
