//! `GET /stats` and `GET /stats/{hook_token}`: read back cached hook records

use axum::{
    extract::{ConnectInfo, Path, Request, State},
    Json,
};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use tracing::info;
use crate::{server::AppState, types::StatsResponse};

/// Every cached token with its history.
pub async fn all_stats(State(state): State<AppState>, request: Request) -> Json<StatsResponse> {
    let data = state.store.get_all().await;
    info!(
        tokens = data.len(),
        "Preparing stats response for all hooks for ip {}",
        client_addr(&request)
    );
    Json(StatsResponse::success(data))
}

/// A single token's history; an unknown token answers with an empty list.
pub async fn token_stats(
    State(state): State<AppState>,
    Path(hook_token): Path<String>,
    request: Request,
) -> Json<StatsResponse> {
    let history = state.store.get(&hook_token).await;
    info!(
        hook_token = %hook_token,
        records = history.len(),
        "Preparing stats response for a single hook for ip {}",
        client_addr(&request)
    );

    let mut data = BTreeMap::new();
    data.insert(hook_token, history);
    Json(StatsResponse::success(data))
}

fn client_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
