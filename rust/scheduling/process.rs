use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The largest accepted lead time, roughly one hundred years of business days.
pub const MAX_LEAD_TIME: u32 = 36_500;

/// The process names used when a request names none: the dispensing steps of a pharmacy
/// preparing medication for delivery, each followed by its audit.
pub const DEFAULT_PROCESS_NAMES: &[&str] = &[
    "Picking",
    "Picking audit",
    "Unit-dose packaging",
    "Unit-dose packaging audit",
    "Stapling and taping",
    "Stapling and taping audit",
    "Calendar set",
    "Calendar set audit",
];

/// The number of business days a process requires.
///
/// Lead times are parsed leniently: numbers are rounded up to whole days, and anything that is
/// not a positive finite number is zero. Zero lead time marks a process that consumes no work.
///
/// # Examples
/// ```rust
/// # use leadtime::scheduling::LeadTime;
/// assert_eq!(LeadTime::parse("2").days(), 2);
/// assert_eq!(LeadTime::parse("1.2").days(), 2);
/// assert_eq!(LeadTime::parse("").days(), 0);
/// assert_eq!(LeadTime::parse("two").days(), 0);
/// assert_eq!(LeadTime::parse("-3").days(), 0);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "RawLeadTime", into = "u32")]
pub struct LeadTime(u32);

/// Lead times arrive as numbers or as free text; anything else, `null` included, is zero.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLeadTime {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl LeadTime {
    pub const ZERO: LeadTime = LeadTime(0);

    /// Create a lead time of whole business days, clamped to [`MAX_LEAD_TIME`].
    pub fn new(days: u32) -> Self {
        if days > MAX_LEAD_TIME {
            warn!(days, max = MAX_LEAD_TIME, "clamping lead time");
            LeadTime(MAX_LEAD_TIME)
        } else {
            LeadTime(days)
        }
    }

    /// Round a fractional lead time up to whole business days.
    pub fn from_f64(days: f64) -> Self {
        if !days.is_finite() || days <= 0.0 {
            return LeadTime::ZERO;
        }
        let days = days.ceil();
        if days > MAX_LEAD_TIME as f64 {
            LeadTime::new(u32::MAX)
        } else {
            LeadTime::new(days as u32)
        }
    }

    /// Parse free text, treating anything non-numeric as zero.
    ///
    /// Full-width digits and signs, as typed with a Japanese input method, are read as their
    /// ASCII equivalents.
    pub fn parse(text: &str) -> Self {
        let text: String = text.trim().chars().map(fold_full_width).collect();
        text.parse::<f64>().map_or(LeadTime::ZERO, LeadTime::from_f64)
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

fn fold_full_width(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (u32::from(c) - 0xFF10) as u8),
        '\u{FF0E}' => '.',
        '\u{FF0D}' => '-',
        '\u{FF0B}' => '+',
        '\u{FF45}' => 'e',
        _ => c,
    }
}

impl From<RawLeadTime> for LeadTime {
    fn from(raw: RawLeadTime) -> Self {
        match raw {
            RawLeadTime::Number(v) => LeadTime::from_f64(v),
            RawLeadTime::Text(s) => LeadTime::parse(&s),
            RawLeadTime::Other(_) => LeadTime::ZERO,
        }
    }
}

impl From<LeadTime> for u32 {
    fn from(lead_time: LeadTime) -> Self {
        lead_time.0
    }
}

impl From<u32> for LeadTime {
    fn from(days: u32) -> Self {
        LeadTime::new(days)
    }
}

/// A named step of work with its lead time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub name: String,
    pub lead_time: LeadTime,
}

impl Process {
    /// Create a process requiring `days` business days.
    pub fn new(name: impl Into<String>, days: u32) -> Self {
        Process {
            name: name.into(),
            lead_time: LeadTime::new(days),
        }
    }
}

/// A named delivery target with the ordered processes that must complete before it.
///
/// The first process is the first physical step; the last finishes on the delivery date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub name: String,
    pub date: NaiveDate,
    pub processes: Vec<Process>,
}

impl Delivery {
    pub fn new(name: impl Into<String>, date: NaiveDate, processes: Vec<Process>) -> Self {
        Delivery {
            name: name.into(),
            date,
            processes,
        }
    }
}
