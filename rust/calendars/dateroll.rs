use chrono::prelude::*;

/// Simple date adjustment defining business days, holidays and rolling.
///
/// Every walk over the calendar saturates at the boundaries of the representable date range
/// rather than panicking.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDate) -> bool {
        !self.is_bus_day(date)
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    ///
    /// This is the *snap* applied to delivery and process end dates.
    fn roll_backward_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        let mut new_date = *date;
        while self.is_non_bus_day(&new_date) {
            match new_date.pred_opt() {
                Some(d) => new_date = d,
                None => break,
            }
        }
        new_date
    }

    /// Return the start date of a task consuming `lead_time` business days and finishing on
    /// `end`.
    ///
    /// A non-business `end` is first rolled backward to the preceding business day, and that
    /// day counts as the first of the `lead_time` days. A `lead_time` of zero consumes nothing
    /// and returns `end` unchanged.
    ///
    /// ```rust
    /// # use leadtime::calendars::{Cal, nd, DateRoll};
    /// let cal = Cal::new(vec![], vec![5, 6]);
    /// assert_eq!(cal.bus_days_before(&nd(2025, 6, 13), 3), nd(2025, 6, 11));
    /// assert_eq!(cal.bus_days_before(&nd(2025, 6, 14), 1), nd(2025, 6, 13)); // Saturday
    /// assert_eq!(cal.bus_days_before(&nd(2025, 6, 16), 2), nd(2025, 6, 13)); // over weekend
    /// ```
    fn bus_days_before(&self, end: &NaiveDate, lead_time: u32) -> NaiveDate {
        if lead_time == 0 {
            return *end;
        }
        let mut date = self.roll_backward_bus_day(end);
        let mut remaining = lead_time - 1;
        while remaining > 0 {
            match date.pred_opt() {
                Some(d) => date = d,
                None => break,
            }
            if self.is_bus_day(&date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Count the business days between a start and end, inclusive.
    fn count_bus_days(&self, start: &NaiveDate, end: &NaiveDate) -> u32 {
        start
            .iter_days()
            .take_while(|d| d <= end)
            .filter(|d| self.is_bus_day(d))
            .count() as u32
    }

    /// Return a vector of calendar dates between a start and end, inclusive
    fn cal_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|d| d <= end).collect()
    }

    /// Print a representation of the month of the object.
    fn print_month(&self, year: i32, month: u32) -> String {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return String::new();
        };
        let mut output = format!("{:>15} {}\n", month_name(month), year);
        output += "Su Mo Tu We Th Fr Sa\n";

        let idx_start = (first.weekday().num_days_from_monday() + 1) % 7;
        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for (i, date) in first
            .iter_days()
            .take_while(|d| d.month() == month)
            .enumerate()
        {
            let s: String = if self.is_bus_day(&date) {
                format!("{:>2}", date.day())
            } else if !self.is_weekday(&date) {
                " .".to_string()
            } else {
                " *".to_string()
            };
            arr[i + idx_start as usize] = s;
        }

        for row in arr.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        output
    }

    /// Print a representation of a year of the object.
    fn print_year(&self, year: i32) -> String {
        let blank = " ".repeat(20);
        let data: Vec<Vec<String>> = (1..13)
            .map(|m| {
                let mut lines: Vec<String> = self
                    .print_month(year, m)
                    .lines()
                    .map(|s| s.to_string())
                    .collect();
                lines.resize(8, blank.clone());
                lines
            })
            .collect();
        let mut output = "\n".to_string();
        for band in 0..3 {
            for i in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[band][i],
                    data[band + 3][i],
                    data[band + 6][i],
                    data[band + 9][i]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Business day                    '.': Non-business weekend\n";
        output += "   '*': Holiday\n";
        output
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
