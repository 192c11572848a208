//! Logging setup and configuration

use anyhow::Result;
use std::sync::Arc;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::Config;

pub const LOG_FILE_PREFIX: &str = "app";
pub const LOG_FILE_SUFFIX: &str = "log";
pub const LOG_FILES_KEPT: usize = 7;

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Console plus daily-rotated file logging. The returned guard flushes the file
/// writer on drop and must live as long as the process.
pub fn setup_logging(config: &Config) -> Result<Arc<LoggingGuard>> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(LOG_FILES_KEPT)
        .build(&config.log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .compact()
        )
        .with(build_filter(
            &config.logging_level,
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        )?)
        .init();

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

/// Non-empty `rust_log` directives win; otherwise the configured level applies to everything.
pub fn build_filter(logging_level: &str, rust_log: Option<&str>) -> Result<EnvFilter> {
    let filter = match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::builder().parse(logging_level)?,
    };
    Ok(filter)
}

pub fn setup_output_directories(config: &Config) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    Ok(())
}
