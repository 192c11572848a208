use crate::handlers::{ingest, stats};
use crate::server::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hook", post(ingest::accept_hook))
        .route("/stats", get(stats::all_stats))
        .route("/stats/{hook_token}", get(stats::token_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
