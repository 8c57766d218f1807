//! Logging configuration using tracing
//!
//! The terminal is owned by the UI, so logs only ever go to a daily rolling
//! file under `<data_local_dir>/lockbox-landing/logs/`.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Directory name shared by logs, settings and preferences.
pub const APP_DIR_NAME: &str = "lockbox-landing";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "LOCKBOX_LOG";

const LOG_FILE_PREFIX: &str = "lockbox.log";

const DEFAULT_FILTER: &str =
    "lockbox=info,lockbox_core=info,lockbox_app=info,lockbox_tui=info,warn";

/// Install the file subscriber and return the log directory.
///
/// ```bash
/// LOCKBOX_LOG=debug lockbox
/// LOCKBOX_LOG=lockbox_app=trace lockbox
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Lockbox landing page starting, logging to {}",
        log_dir.display()
    );
    Ok(log_dir)
}

/// `<data_local_dir>/lockbox-landing/logs`, or `./lockbox-landing/logs`
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("logs")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
