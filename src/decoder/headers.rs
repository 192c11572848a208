//! Provenance header extraction

use axum::http::HeaderMap;
use crate::errors::{HookError, HookResult};
use crate::types::{Headers, HOOK_TOKEN_HEADER, SPREAD_BATCH_ID_HEADER};

/// Builds `Headers` from the request header map. Lookups are case-insensitive and
/// unrecognized headers are ignored; every recognized header is required.
pub fn build_headers(headers: &HeaderMap) -> HookResult<Headers> {
    Ok(Headers {
        host: required(headers, "host")?,
        user_agent: required(headers, "user-agent")?,
        content_encoding: required(headers, "content-encoding")?,
        content_type: required(headers, "content-type")?,
        traceparent: required(headers, "traceparent")?,
        hook_token: required(headers, HOOK_TOKEN_HEADER)?,
        spread_batch_id: required(headers, SPREAD_BATCH_ID_HEADER)?,
        accept_encoding: required(headers, "accept-encoding")?,
    })
}

/// Sender identity used as the cache key. A missing or unreadable header maps to `""`.
pub fn hook_token_from(headers: &HeaderMap) -> String {
    headers
        .get(HOOK_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn required(headers: &HeaderMap, name: &str) -> HookResult<String> {
    let value = headers
        .get(name)
        .ok_or_else(|| HookError::validation(None, name, "missing required header"))?;

    value
        .to_str()
        .map(str::to_string)
        .map_err(|_| HookError::validation(None, name, "header value is not valid UTF-8"))
}
