//! Define the Japanese national holiday calendar.
//!
//! Holidays are calculated by rule rather than listed: fixed dates, the "Happy Monday" holidays,
//! the vernal and autumnal equinoxes, one-off observances, substitute holidays for holidays
//! falling on a Sunday and the citizens' holiday for a day lying between two holidays.

use chrono::prelude::*;
use std::collections::BTreeSet;

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// First year with generated holidays.
pub const FIRST_YEAR: i32 = 1980;
/// Last year with generated holidays; the equinox approximation holds until 2150.
pub const LAST_YEAR: i32 = 2150;

/// Every holiday from [`FIRST_YEAR`] to [`LAST_YEAR`], sorted.
pub fn holidays() -> Vec<NaiveDate> {
    (FIRST_YEAR..=LAST_YEAR).flat_map(holidays_in_year).collect()
}

/// The holidays of one year, sorted.
pub fn holidays_in_year(year: i32) -> Vec<NaiveDate> {
    let national: BTreeSet<NaiveDate> = national_holidays(year).into_iter().flatten().collect();

    let mut all = national.clone();
    if year >= 1986 {
        let between: Vec<NaiveDate> = national
            .iter()
            .filter_map(|d| {
                let next = d.succ_opt()?;
                let after = next.succ_opt()?;
                (national.contains(&after)
                    && !national.contains(&next)
                    && next.weekday() != Weekday::Sun)
                    .then_some(next)
            })
            .collect();
        all.extend(between);
    }

    let substitutes: Vec<NaiveDate> = national
        .iter()
        .filter(|d| d.weekday() == Weekday::Sun)
        .filter_map(|d| {
            let mut next = d.succ_opt()?;
            if year < 2007 {
                return (!all.contains(&next)).then_some(next);
            }
            while all.contains(&next) {
                next = next.succ_opt()?;
            }
            Some(next)
        })
        .collect();
    all.extend(substitutes);
    all.into_iter().collect()
}

fn national_holidays(year: i32) -> Vec<Option<NaiveDate>> {
    let mut days = vec![
        ymd(year, 1, 1),
        if year >= 2000 {
            nth_monday(year, 1, 2)
        } else {
            ymd(year, 1, 15)
        },
        ymd(year, 2, 11),
        ymd(year, 3, vernal_equinox_day(year)),
        ymd(year, 4, 29),
        ymd(year, 5, 3),
        ymd(year, 5, 5),
        ymd(year, 9, autumnal_equinox_day(year)),
        ymd(year, 11, 3),
        ymd(year, 11, 23),
    ];
    if year >= 2007 {
        days.push(ymd(year, 5, 4));
    }
    if year >= 2020 {
        days.push(ymd(year, 2, 23));
    }
    if (1989..=2018).contains(&year) {
        days.push(ymd(year, 12, 23));
    }

    // Marine Day, Mountain Day and Sports Day moved for the Tokyo Olympics.
    match year {
        2020 => days.extend([ymd(2020, 7, 23), ymd(2020, 8, 10), ymd(2020, 7, 24)]),
        2021 => days.extend([ymd(2021, 7, 22), ymd(2021, 8, 8), ymd(2021, 7, 23)]),
        _ => {
            if year >= 2003 {
                days.push(nth_monday(year, 7, 3));
            } else if year >= 1996 {
                days.push(ymd(year, 7, 20));
            }
            if year >= 2016 {
                days.push(ymd(year, 8, 11));
            }
            if year >= 2000 {
                days.push(nth_monday(year, 10, 2));
            } else {
                days.push(ymd(year, 10, 10));
            }
        }
    }

    // Respect for the Aged Day
    if year >= 2003 {
        days.push(nth_monday(year, 9, 3));
    } else {
        days.push(ymd(year, 9, 15));
    }

    // Imperial observances
    match year {
        1989 => days.push(ymd(1989, 2, 24)),
        1990 => days.push(ymd(1990, 11, 12)),
        1993 => days.push(ymd(1993, 6, 9)),
        2019 => days.extend([ymd(2019, 5, 1), ymd(2019, 10, 22)]),
        _ => {}
    }
    days
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn nth_monday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n)
}

fn vernal_equinox_day(year: i32) -> u32 {
    equinox_day(year, if year < 2100 { 20.8431 } else { 21.8510 })
}

fn autumnal_equinox_day(year: i32) -> u32 {
    equinox_day(year, if year < 2100 { 23.2488 } else { 24.2488 })
}

fn equinox_day(year: i32, base: f64) -> u32 {
    let y = f64::from(year - 1980);
    (base + 0.242194 * y - (y / 4.0).floor()).floor() as u32
}
