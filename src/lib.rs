//! Spread Hook Receiver - webhook endpoint for spread scanner batches
//!
//! Accepts gzip-compressed JSON batches of spreads on `POST /hook`, keeps the most
//! recent batches per hook token in bounded in-memory histories, and serves them
//! back on `GET /stats` and `GET /stats/{hook_token}`.

pub mod config;
pub mod types;
pub mod errors;
pub mod decoder;
pub mod storage;
pub mod handlers;
pub mod server;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{HookError, HookResult};
pub use server::{create_router, AppState};
pub use storage::HookHistoryStore;
pub use types::*;
