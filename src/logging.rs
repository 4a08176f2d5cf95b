//! Logging configuration for moodlens

use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::LoggingConfig;
use crate::Result;

const LOG_FILE: &str = "moodlens.log";

fn crate_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("warn,moodlens={level}"))
}

/// Initialize logging from the `[logging]` section. `RUST_LOG` wins when set.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| crate_filter(&config.level));
    install(filter, &config.level, &config.dir)
}

/// Initialize logging with an explicit level, e.g. for `--verbose`
pub fn init_logging_with_level(config: &LoggingConfig, level: &str) -> Result<()> {
    install(crate_filter(level), level, &config.dir)
}

fn install(env_filter: EnvFilter, level: &str, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Console output stays on stderr so report JSON on stdout can be piped
    let console_layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::debug!(
        "Logging at {} to {}/{}.YYYY-MM-DD",
        level,
        dir.display(),
        LOG_FILE
    );

    // The writer thread must outlive main
    std::mem::forget(guard);

    Ok(())
}

/// Console-only logging for tests; safe to call more than once
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_logging_is_reentrant() {
        init_test_logging();
        init_test_logging();
        tracing::debug!("still alive");
    }
}
