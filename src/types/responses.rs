//! Response bodies returned by the HTTP endpoints

use std::collections::BTreeMap;
use std::sync::Arc;
use serde::Serialize;
use super::HookRecord;

/// Body returned to the hook sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HookResponse {
    pub success: bool,
    pub status_code: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub result_status: ResultStatus,
    pub data: BTreeMap<String, Vec<Arc<HookRecord>>>,
}

impl StatsResponse {
    pub fn success(data: BTreeMap<String, Vec<Arc<HookRecord>>>) -> Self {
        Self {
            result_status: ResultStatus::Success,
            data,
        }
    }
}
