//! Request header provenance types

use serde::Serialize;

/// Provenance headers attached to every hook request by the sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headers {
    pub host: String,
    pub user_agent: String,
    pub content_encoding: String,
    pub content_type: String,
    pub traceparent: String,
    pub hook_token: String,
    pub spread_batch_id: String,
    pub accept_encoding: String,
}

pub const HOOK_TOKEN_HEADER: &str = "x-hooktoken";
pub const SPREAD_BATCH_ID_HEADER: &str = "x-spreadbatchid";
