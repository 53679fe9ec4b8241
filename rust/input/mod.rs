//! Build typed [`Delivery`] records from request data.
//!
//! Requests arrive either as structured documents ([`PlanRequest`], from TOML or JSON) or as the
//! flat key/value pairs of an HTML form ([`form`]). Both are normalised here so the scheduler
//! only ever receives valid dates and whole-day lead times: deliveries with a missing or
//! malformed date are dropped with a warning, and missing lead times are zero.

pub mod form;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::LeadtimeError;
use crate::scheduling::{Delivery, LeadTime, Process, DEFAULT_PROCESS_NAMES};

/// One requested delivery, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    #[serde(default)]
    pub name: String,
    /// `YYYY-MM-DD`; deliveries without a valid date are skipped.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<String>,
    /// Lead time of each process, by process index.
    #[serde(default)]
    pub lead_times: Vec<LeadTime>,
}

/// Dates arrive as text, or as TOML date literals; any other value is treated as missing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Toml(toml::value::Datetime),
    Other(serde::de::IgnoredAny),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => Some(text),
        RawDate::Toml(datetime) => datetime
            .date
            .map(|d| format!("{:04}-{:02}-{:02}", d.year, d.month, d.day)),
        RawDate::Other(_) => None,
    })
}

/// A scheduling request: process names shared by every delivery, and the deliveries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub processes: Vec<String>,
    #[serde(default)]
    pub deliveries: Vec<DeliveryRequest>,
}

impl PlanRequest {
    /// Parse a TOML request document.
    pub fn from_toml(text: &str) -> Result<Self, LeadtimeError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a JSON request document.
    pub fn from_json(text: &str) -> Result<Self, LeadtimeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a request file, choosing the format by extension: `.json` is JSON, anything else TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LeadtimeError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| LeadtimeError::io(path, e))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            _ => Self::from_toml(&text),
        }
    }

    /// The process names, falling back to [`DEFAULT_PROCESS_NAMES`] when none are given.
    pub fn process_names(&self) -> Vec<String> {
        if self.processes.is_empty() {
            DEFAULT_PROCESS_NAMES.iter().map(|s| s.to_string()).collect()
        } else {
            self.processes.clone()
        }
    }

    /// Validate the request into deliveries, skipping those without a valid date.
    pub fn deliveries(&self) -> Vec<Delivery> {
        let names = self.process_names();
        self.deliveries
            .iter()
            .enumerate()
            .filter_map(|(index, request)| {
                let date = parse_delivery_date(request.date.as_deref(), index)?;
                let processes = names
                    .iter()
                    .enumerate()
                    .map(|(p, name)| Process {
                        name: name.clone(),
                        lead_time: request.lead_times.get(p).copied().unwrap_or_default(),
                    })
                    .collect();
                let name = if request.name.trim().is_empty() {
                    format!("Delivery {}", index + 1)
                } else {
                    request.name.clone()
                };
                Some(Delivery::new(name, date, processes))
            })
            .collect()
    }
}

/// Parse a delivery date, logging and returning `None` for missing or malformed input.
pub(crate) fn parse_delivery_date(date: Option<&str>, index: usize) -> Option<NaiveDate> {
    let text = date.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        warn!(delivery = index, "skipping delivery without a date");
        return None;
    }
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(delivery = index, date = text, error = %err, "skipping delivery with malformed date");
            None
        }
    }
}
