use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::exe_dir;

const LOG_FILE_PREFIX: &str = "bedwars_stats.log";

/// Logs to stderr and to a daily file next to the executable.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logger() -> Result<()> {
    let log_dir = exe_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Console output shares the terminal with chat lines, so keep it terse
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("Logger initialized, writing {} to {:?}", LOG_FILE_PREFIX, log_dir);
    Ok(())
}
