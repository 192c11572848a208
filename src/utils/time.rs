//! Timestamp helpers for hook records

use chrono::{DateTime, Local, Utc};

pub const RECEIVE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Arrival time of a hook, captured before the body is read.
#[derive(Debug, Clone)]
pub struct ReceiveTime {
    /// Milliseconds since the unix epoch
    pub millis: i64,
    /// Local wall-clock rendering of the same instant
    pub formatted: String,
}

impl ReceiveTime {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            millis: instant.timestamp_millis(),
            formatted: instant
                .with_timezone(&Local)
                .format(RECEIVE_DATE_FORMAT)
                .to_string(),
        }
    }
}

/// Current time as fractional seconds since the unix epoch.
pub fn unix_seconds_now() -> f64 {
    unix_seconds(Utc::now())
}

pub fn unix_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_micros() as f64 / 1_000_000.0
}
