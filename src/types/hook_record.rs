//! Hook records kept in the history store

use serde::Serialize;
use super::{Headers, HookResponse, Spread};

/// One ingest event. Built in full by the ingest handler before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookRecord {
    pub hook_token: String,
    /// Milliseconds since the unix epoch, taken on arrival
    pub receive_date: i64,
    pub receive_date_str: String,
    pub headers: Option<Headers>,
    pub received_body: Vec<Spread>,
    /// Seconds since the unix epoch; `None` when decoding failed
    pub response_date: Option<f64>,
    pub response_body: HookResponse,
    pub error: Option<String>,
}

impl HookRecord {
    pub fn is_success(&self) -> bool {
        self.response_body.success
    }
}
