use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::Layer as FmtLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Setup logger configuration for the reader.
///
/// If LOG_INSIDE_FILE=true:
/// - Console output for all log levels
/// - A combined log file for all levels
/// - A separate file for errors only
///
/// If LOG_INSIDE_FILE=false (default):
/// - Only console output for all log levels
///
/// File logs are rotated daily when enabled
pub fn setup_logger() -> Result<()> {
    let log_inside_file: bool = std::env::var("LOG_INSIDE_FILE")
        .unwrap_or("false".to_string())
        .parse()
        .unwrap_or(false);

    // Default log level is INFO when RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = FmtLayer::new()
        .with_line_number(false)
        .with_target(false)
        .with_thread_ids(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if log_inside_file {
        let combined_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("combined")
            .build(".logs/combined.log")
            .context("Failed to create combined logs appender")?;

        let error_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("error")
            .build(".logs/error.log")
            .context("Failed to create errors-only appender")?;

        let combined_layer = FmtLayer::new()
            .with_writer(combined_appender)
            .with_ansi(false)
            .with_thread_ids(false);

        let error_layer = FmtLayer::new()
            .with_writer(error_appender)
            .with_ansi(false)
            .with_thread_ids(false)
            .with_filter(EnvFilter::new("error"));

        registry.with(combined_layer).with(error_layer).init();
    } else {
        registry.init();
    }

    Ok(())
}
