//! Spread Hook Receiver - Main Entry Point

use spread_hook_receiver::*;
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = CONFIG.clone();

    // Initialize logging
    utils::setup_output_directories(&config)?;
    let _logging_guard = utils::setup_logging(&config)?;

    info!("🪝 Spread Hook Receiver v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Bind Address: {}", config.bind_addr());
    info!("   Cache Width: {} records per hook token", config.cache_width);
    info!("   Max Body Size: {} bytes", config.max_body_bytes);
    info!("   Log Level: {}", config.logging_level);
    info!("   Log Directory: {}", config.log_dir);

    let state = AppState::from_config(&config);
    let app = create_router(state);

    server::serve(&config, app).await
}
