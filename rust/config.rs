//! Configuration file support.
//!
//! The configuration is a TOML file; every field is optional.
//!
//! ```toml
//! calendar = "bus,jpn"              # named calendars, comma separated, the default
//! week_mask = [5, 6]                # overrides the weekend of the named calendars
//! holiday_files = ["holidays/site.txt"]
//! holiday_dir = "holidays/yearly"   # every *.txt / *.csv file, one per year
//! process_names = ["Pick", "Pack"]  # used when a request names no processes
//!
//! [anchor]
//! policy = "bus_days_before_start"
//! days = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::calendars::holidays::{load_holiday_dir, load_holiday_file};
use crate::calendars::{Cal, Calendar, NamedCal, UnionCal};
use crate::error::LeadtimeError;
use crate::scheduling::AnchorPolicy;

/// The default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "leadtime.toml";

/// Configuration of the calendar and scheduling defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_calendar")]
    pub calendar: String,
    #[serde(default)]
    pub week_mask: Option<Vec<u8>>,
    #[serde(default)]
    pub holiday_files: Vec<PathBuf>,
    #[serde(default)]
    pub holiday_dir: Option<PathBuf>,
    #[serde(default)]
    pub anchor: AnchorPolicy,
    #[serde(default)]
    pub process_names: Vec<String>,
}

fn default_calendar() -> String {
    "bus,jpn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar: default_calendar(),
            week_mask: None,
            holiday_files: Vec::new(),
            holiday_dir: None,
            anchor: AnchorPolicy::default(),
            process_names: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, LeadtimeError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    ///
    /// Relative holiday paths are resolved against the directory of the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LeadtimeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LeadtimeError::io(path, e))?;
        let mut config = Self::from_toml(&text)?;
        if let Some(base) = path.parent() {
            config.holiday_files = config
                .holiday_files
                .into_iter()
                .map(|p| base.join(p))
                .collect();
            config.holiday_dir = config.holiday_dir.map(|p| base.join(p));
        }
        Ok(config)
    }

    /// Load [`DEFAULT_CONFIG_FILE`] if it exists in the working directory, or the defaults.
    pub fn from_default_location() -> Result<Self, LeadtimeError> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the business day calendar described by the configuration.
    ///
    /// An unknown calendar name or an invalid `week_mask` is an error. Holiday files that cannot
    /// be read are logged and skipped.
    pub fn build_calendar(&self) -> Result<Calendar, LeadtimeError> {
        let named = NamedCal::try_new(&self.calendar)?;

        let mut holidays = Vec::new();
        for path in self.holiday_files.iter() {
            holidays.extend(load_holiday_file(path));
        }
        if let Some(dir) = &self.holiday_dir {
            holidays.extend(load_holiday_dir(dir));
        }

        let calendar = match &self.week_mask {
            None if holidays.is_empty() => Calendar::NamedCal(named),
            None => {
                let mut calendars = named.union_cal.calendars;
                calendars.push(Cal::new(holidays.clone(), vec![]));
                Calendar::UnionCal(UnionCal::new(calendars))
            }
            Some(mask) => {
                let mut cal = Cal::try_new(holidays.clone(), mask.clone())?;
                for named_cal in named.union_cal.calendars.iter() {
                    cal.extend_holidays(named_cal.holidays().iter().copied());
                }
                Calendar::Cal(cal)
            }
        };
        info!(
            calendar = %self.calendar,
            file_holidays = holidays.len(),
            "loaded business day calendar"
        );
        Ok(calendar)
    }

    /// The configured process names, if any.
    pub fn process_names(&self) -> Option<&[String]> {
        if self.process_names.is_empty() {
            None
        } else {
            Some(&self.process_names)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{nd, DateRoll};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.calendar, "bus,jpn");
        let cal = config.build_calendar().unwrap();
        assert!(cal.is_non_bus_day(&nd(2025, 6, 14)));
        assert!(cal.is_non_bus_day(&nd(2025, 5, 6))); // Japanese substitute holiday
        assert!(cal.is_non_bus_day(&nd(2030, 1, 14))); // Coming of Age Day
        assert!(cal.is_bus_day(&nd(2025, 5, 7)));
    }

    #[test]
    fn test_weekends_only_calendar() {
        let config = Config::from_toml(r#"calendar = "bus""#).unwrap();
        let cal = config.build_calendar().unwrap();
        assert!(cal.is_bus_day(&nd(2025, 5, 6)));
    }

    #[test]
    fn test_full_config() {
        let text = r#"
calendar = "jpn"
week_mask = [6]
process_names = ["Pick", "Pack"]

[anchor]
policy = "cal_days_before_delivery"
days = 60
"#;
        let config = Config::from_toml(text).unwrap();
        assert_eq!(config.anchor, AnchorPolicy::CalDaysBeforeDelivery { days: 60 });
        assert_eq!(config.process_names().unwrap().len(), 2);
        let cal = config.build_calendar().unwrap();
        assert!(cal.is_bus_day(&nd(2025, 6, 14))); // Saturday works
        assert!(cal.is_non_bus_day(&nd(2025, 6, 15))); // Sunday
        assert!(cal.is_non_bus_day(&nd(2025, 5, 6))); // jpn holiday kept
    }

    #[test]
    fn test_unknown_calendar() {
        let config = Config::from_toml(r#"calendar = "mars""#).unwrap();
        assert!(matches!(
            config.build_calendar(),
            Err(LeadtimeError::UnknownCalendar(_))
        ));
    }

    #[test]
    fn test_invalid_week_mask() {
        let config = Config::from_toml("week_mask = [0, 1, 2, 3, 4, 5, 6]").unwrap();
        assert!(matches!(
            config.build_calendar(),
            Err(LeadtimeError::EmptyWorkingWeek)
        ));
    }

    #[test]
    fn test_holiday_files_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("site.txt")).unwrap();
        writeln!(f, "2025-06-12,Stocktake").unwrap();
        let config_path = dir.path().join("leadtime.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(f, r#"holiday_files = ["site.txt", "missing.txt"]"#).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        let cal = config.build_calendar().unwrap();
        assert!(cal.is_non_bus_day(&nd(2025, 6, 12)));
        assert!(cal.is_non_bus_day(&nd(2025, 6, 14)));
        assert!(cal.is_bus_day(&nd(2025, 6, 13)));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            Config::from_toml("calendar = "),
            Err(LeadtimeError::Toml(_))
        ));
    }
}
