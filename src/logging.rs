use std::sync::LazyLock;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Log lines go to stderr through a background
/// writer; keep the returned guard alive until exit, dropping it flushes.
pub fn init(log_level: Option<LevelFilter>) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
    // An explicit level scopes to this crate; otherwise RUST_LOG is taken as a
    // full directive list, and directives that fail to parse are dropped.
    let filter = match log_level {
        Some(level) => EnvFilter::new(format!("{crate_name}={level}")),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::OFF.into())
            .parse_lossy(
                std::env::var(EnvFilter::DEFAULT_ENV)
                    .unwrap_or_else(|_| format!("{crate_name}=warn")),
            ),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(guard)
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
});
