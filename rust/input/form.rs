//! Parse the flat key/value pairs submitted by the scheduling form.
//!
//! The form repeats `process_name[]` once per process and `delivery_name[]` once per delivery,
//! both in display order. Per delivery `d` it sends `delivery_date_{d}`, and per process `p` of
//! delivery `d` the lead time `process_{p}_days_{d}`. Only the first value of a repeated
//! single-valued key is used.

use std::collections::HashMap;

use crate::input::{DeliveryRequest, PlanRequest};
use crate::scheduling::LeadTime;

const PROCESS_NAME_KEY: &str = "process_name[]";
const DELIVERY_NAME_KEY: &str = "delivery_name[]";

/// Collect form pairs into a [`PlanRequest`].
///
/// # Examples
/// ```rust
/// # use leadtime::input::form::parse_form_pairs;
/// let request = parse_form_pairs(vec![
///     ("process_name[]", "Pack"),
///     ("delivery_name[]", "Ward A"),
///     ("delivery_date_0", "2025-06-13"),
///     ("process_0_days_0", "3"),
/// ]);
/// let deliveries = request.deliveries();
/// assert_eq!(deliveries[0].processes[0].lead_time.days(), 3);
/// ```
pub fn parse_form_pairs<I, K, V>(pairs: I) -> PlanRequest
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut processes: Vec<String> = Vec::new();
    let mut delivery_names: Vec<String> = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();

    for (key, value) in pairs {
        let (key, value) = (key.as_ref().trim(), value.as_ref());
        match key {
            PROCESS_NAME_KEY => processes.push(value.trim().to_string()),
            DELIVERY_NAME_KEY => delivery_names.push(value.trim().to_string()),
            _ => {
                fields
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
    }

    let process_count = if processes.is_empty() {
        crate::scheduling::DEFAULT_PROCESS_NAMES.len()
    } else {
        processes.len()
    };
    let deliveries = delivery_names
        .into_iter()
        .enumerate()
        .map(|(d, name)| DeliveryRequest {
            name,
            date: fields.get(&format!("delivery_date_{}", d)).cloned(),
            lead_times: (0..process_count)
                .map(|p| {
                    fields
                        .get(&format!("process_{}_days_{}", p, d))
                        .map_or(LeadTime::ZERO, |v| LeadTime::parse(v))
                })
                .collect(),
        })
        .collect();

    PlanRequest {
        processes,
        deliveries,
    }
}

/// Parse `key=value` lines, as saved from a form submission, into a [`PlanRequest`].
///
/// Blank lines and lines starting with `#` are ignored, as are lines without `=`.
pub fn parse_form_lines(text: &str) -> PlanRequest {
    parse_form_pairs(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('=')),
    )
}
