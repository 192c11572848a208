//! `POST /hook`: decode, record and acknowledge a spread batch

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};
use uuid::Uuid;
use crate::{
    decoder::{build_headers, decode_spreads, hook_token_from},
    errors::{HookError, HookResult},
    server::AppState,
    types::{Headers, HookRecord, HookResponse, Spread},
    utils::{unix_seconds_now, ReceiveTime},
};

/// Successfully decoded request contents.
pub type Decoded = (Headers, Vec<Spread>);

pub async fn accept_hook(State(state): State<AppState>, request: Request) -> Response {
    let received = ReceiveTime::now();
    let ingest_id = Uuid::new_v4();
    info!(%ingest_id, "Received hook");

    let (parts, body) = request.into_parts();
    let hook_token = hook_token_from(&parts.headers);

    let outcome = decode_request(&parts.headers, body, state.max_body_bytes).await;
    match &outcome {
        Ok((_, spreads)) => info!(%ingest_id, spreads = spreads.len(), "Successfully decoded json"),
        Err(e) => error!(%ingest_id, kind = e.kind(), "An error occurred: {}", e),
    }

    let record = build_record(hook_token.clone(), received, outcome);
    let response_body = record.response_body;

    let retained = state.store.append(&hook_token, record).await;
    info!(
        %ingest_id,
        hook_token = %hook_token,
        retained,
        "Saved spreads from hook in RAM. Access via /stats"
    );

    info!(%ingest_id, status = response_body.status_code, "Returning response to hook sender");
    (status_of(&response_body), Json(response_body)).into_response()
}

/// Reads the body, then decodes it off the async workers and builds the provenance headers.
async fn decode_request(headers: &HeaderMap, body: Body, max_body_bytes: usize) -> HookResult<Decoded> {
    let raw_body = axum::body::to_bytes(body, max_body_bytes)
        .await
        .map_err(|e| HookError::BodyRead(e.to_string()))?;

    let spreads = tokio::task::spawn_blocking(move || decode_spreads(&raw_body))
        .await
        .map_err(|e| HookError::Worker(e.to_string()))??;

    let headers = build_headers(headers)?;
    Ok((headers, spreads))
}

/// Folds a decode outcome into the record that is stored and answered with.
pub fn build_record(hook_token: String, received: ReceiveTime, outcome: HookResult<Decoded>) -> HookRecord {
    match outcome {
        Ok((headers, spreads)) => HookRecord {
            hook_token,
            receive_date: received.millis,
            receive_date_str: received.formatted,
            headers: Some(headers),
            received_body: spreads,
            response_date: Some(unix_seconds_now()),
            response_body: HookResponse {
                success: true,
                status_code: StatusCode::OK.as_u16(),
            },
            error: None,
        },
        Err(e) => HookRecord {
            hook_token,
            receive_date: received.millis,
            receive_date_str: received.formatted,
            headers: None,
            received_body: Vec::new(),
            response_date: None,
            response_body: HookResponse {
                success: false,
                status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            },
            error: Some(e.to_string()),
        },
    }
}

fn status_of(response: &HookResponse) -> StatusCode {
    StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
