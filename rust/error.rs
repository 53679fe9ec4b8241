//! Error type for calendar construction and file loading.
//!
//! The scheduling core never fails: invalid request data is normalised to safe defaults. Errors
//! only arise when building calendars or reading configuration and request files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by `leadtime`.
#[derive(Debug, Error)]
pub enum LeadtimeError {
    /// A named calendar was requested that has no static data.
    #[error("'{0}' is not found in list of existing calendars.")]
    UnknownCalendar(String),

    /// A week mask contained a value outside 0 (Mon) ..= 6 (Sun).
    #[error("week mask value {0} is not a valid weekday (0=Mon,..,6=Sun).")]
    InvalidWeekMask(u8),

    /// A week mask excluded every day of the week, so no date could ever be a business day.
    #[error("week mask excludes every day of the week.")]
    EmptyWorkingWeek,

    /// A calendar name contained an empty component, e.g. `"bus,,jpn"`.
    #[error("calendar name '{0}' is malformed.")]
    MalformedCalendarName(String),

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("'{0}' is not a valid YYYY-MM-DD date.")]
    InvalidDate(String),

    /// A file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A TOML document could not be parsed.
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON document could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LeadtimeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LeadtimeError::Io {
            path: path.into(),
            source,
        }
    }
}
