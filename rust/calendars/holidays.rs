//! Loading holiday dates from static yearly data files.
//!
//! A holiday file is UTF-8 text with one date per line in `YYYY-MM-DD` form, optionally followed
//! by a comma or whitespace and a holiday name. Blank lines and lines starting with `#` are
//! ignored. Loading never fails: unreadable files and malformed lines are logged and skipped so
//! that the weekend rule alone still applies.

use chrono::NaiveDate;
use itertools::Itertools;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse the contents of a holiday file. `source` only labels log messages.
pub fn parse_holidays(text: &str, source: &str) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim().trim_start_matches('\u{feff}');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let token = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        match NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            Ok(date) => dates.push(date),
            Err(err) => warn!(
                source,
                line = line_no + 1,
                entry = line,
                error = %err,
                "skipping malformed holiday entry"
            ),
        }
    }
    dates
}

/// Read one holiday file, returning no dates if it cannot be read.
pub fn load_holiday_file<P: AsRef<Path>>(path: P) -> Vec<NaiveDate> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            let dates = parse_holidays(&text, &path.display().to_string());
            debug!(path = %path.display(), count = dates.len(), "loaded holiday file");
            dates
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read holiday file");
            Vec::new()
        }
    }
}

/// Read every `*.txt` and `*.csv` file of a directory, in file name order.
pub fn load_holiday_dir<P: AsRef<Path>>(dir: P) -> Vec<NaiveDate> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "failed to read holiday directory");
            return Vec::new();
        }
    };
    entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("txt") | Some("csv")
                )
        })
        .sorted()
        .flat_map(|path| load_holiday_file(&path))
        .collect()
}
