use crate::errors::StatusError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder emitted when the upstream record carries no resolved address.
pub const UNKNOWN_LOCATION: &str = "unknown location";

/// The three fields the dashboard consumes. Built fresh per request from the
/// upstream payload; lives for one response or one cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorStatus {
    pub uptime: f64,
    pub average_response_time: f64,
    pub location: String,
}

/// One monitor record as returned by the upstream `uptime-monitors` endpoint.
/// Unknown upstream fields are ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct UptimeMonitor {
    pub uptime: f64,

    #[serde(default)]
    pub locations: Option<HashMap<String, MonitorLocation>>,

    #[serde(default)]
    pub resolve_address_info: Option<ResolveAddressInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorLocation {
    pub response_time: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveAddressInfo {
    #[serde(rename = "City", default)]
    pub city: Option<String>,

    #[serde(rename = "Country", default)]
    pub country: Option<String>,
}

impl UptimeMonitor {
    /// Collapse the record into the dashboard view. A record without a
    /// `locations` map counts as not found.
    pub fn summarize(&self) -> Result<MonitorStatus, StatusError> {
        let locations = self.locations.as_ref().ok_or(StatusError::DataNotFound)?;

        Ok(MonitorStatus {
            uptime: self.uptime,
            average_response_time: mean_response_time(locations),
            location: self.format_location(),
        })
    }

    fn format_location(&self) -> String {
        let info = self.resolve_address_info.as_ref();
        match (
            info.and_then(|i| i.city.as_deref()),
            info.and_then(|i| i.country.as_deref()),
        ) {
            (Some(city), Some(country)) => format!("{}, {}", city, country),
            _ => UNKNOWN_LOCATION.to_string(),
        }
    }
}

fn mean_response_time(locations: &HashMap<String, MonitorLocation>) -> f64 {
    if locations.is_empty() {
        return 0.0;
    }
    let total: f64 = locations.values().map(|loc| loc.response_time).sum();
    total / locations.len() as f64
}
